//! `/` — search by name.

use axum::{
  Form,
  extract::State,
  response::Html,
};
use phonebook_core::store::ContactStore;

use crate::{AppState, error::Error, handlers::ContactForm, page};

/// `GET /`
pub async fn form<S>(State(state): State<AppState<S>>) -> Html<String>
where
  S: ContactStore,
{
  Html(page::search(&state.config.developer_name, None))
}

/// `POST /` — body: `username=<keyword>`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<ContactForm>,
) -> Result<Html<String>, Error>
where
  S: ContactStore,
{
  let keyword = form.username;

  let outcome = state.store.search(&keyword).await.map_err(Error::store)?;
  tracing::debug!(
    keyword = %keyword,
    matches = outcome.contacts().len(),
    "search"
  );

  Ok(Html(page::search(
    &state.config.developer_name,
    Some((&keyword, &outcome)),
  )))
}
