//! HTML front end for the phonebook.
//!
//! Exposes an axum [`Router`] backed by any [`ContactStore`]. Every route
//! answers `GET` with an empty form and `POST` with the form plus the
//! outcome of the submitted operation.
//!
//! | Route | Form fields | Store call |
//! |-------|-------------|------------|
//! | `/` | `username` | search |
//! | `/add` | `username`, `phonenumber` | insert |
//! | `/update` | `username`, `phonenumber` | update |
//! | `/delete` | `username` | delete |

pub mod error;
pub mod handlers;
pub mod page;
pub mod settings;

pub use error::Error;
pub use settings::ServerConfig;

use std::sync::Arc;

use axum::{Router, routing::get};
use phonebook_core::store::ContactStore;
use tower_http::trace::TraceLayer;

use handlers::{add, delete, search, update};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ContactStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the phonebook [`Router`], with request tracing applied.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/",       get(search::form::<S>).post(search::submit::<S>))
    .route("/add",    get(add::form::<S>).post(add::submit::<S>))
    .route("/update", get(update::form::<S>).post(update::submit::<S>))
    .route("/delete", get(delete::form::<S>).post(delete::submit::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
