//! `/add` — create a contact.

use axum::{
  Form,
  extract::State,
  response::Html,
};
use phonebook_core::{store::ContactStore, validate::validate_add};

use crate::{
  AppState,
  error::Error,
  handlers::ContactForm,
  page::{self, FormAction, Notice},
};

/// `GET /add`
pub async fn form<S>(State(state): State<AppState<S>>) -> Html<String>
where
  S: ContactStore,
{
  Html(page::contact_form(
    &state.config.developer_name,
    FormAction::Save,
    Notice::None,
  ))
}

/// `POST /add` — body: `username=<name>&phonenumber=<digits>`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<ContactForm>,
) -> Result<Html<String>, Error>
where
  S: ContactStore,
{
  let developer = &state.config.developer_name;

  if let Err(invalid) = validate_add(&form.username, &form.phonenumber) {
    tracing::debug!(reason = %invalid, "add rejected");
    let message = invalid.to_string();
    return Ok(Html(page::contact_form(
      developer,
      FormAction::Save,
      Notice::Invalid(&message),
    )));
  }

  let outcome = state
    .store
    .insert(&form.username, &form.phonenumber)
    .await
    .map_err(Error::store)?;
  tracing::info!(?outcome, "add");

  let message = outcome.to_string();
  Ok(Html(page::contact_form(
    developer,
    FormAction::Save,
    Notice::Result(&message),
  )))
}
