//! `/delete` — remove a contact by name.

use axum::{
  Form,
  extract::State,
  response::Html,
};
use phonebook_core::{store::ContactStore, validate::validate_delete};

use crate::{
  AppState,
  error::Error,
  handlers::ContactForm,
  page::{self, Notice},
};

/// `GET /delete`
pub async fn form<S>(State(state): State<AppState<S>>) -> Html<String>
where
  S: ContactStore,
{
  Html(page::delete_form(&state.config.developer_name, Notice::None))
}

/// `POST /delete` — body: `username=<name>`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<ContactForm>,
) -> Result<Html<String>, Error>
where
  S: ContactStore,
{
  let developer = &state.config.developer_name;

  if let Err(invalid) = validate_delete(&form.username) {
    tracing::debug!(reason = %invalid, "delete rejected");
    let message = invalid.to_string();
    return Ok(Html(page::delete_form(developer, Notice::Invalid(&message))));
  }

  let outcome = state
    .store
    .delete(&form.username)
    .await
    .map_err(Error::store)?;
  tracing::info!(?outcome, "delete");

  let message = outcome.to_string();
  Ok(Html(page::delete_form(developer, Notice::Result(&message))))
}
