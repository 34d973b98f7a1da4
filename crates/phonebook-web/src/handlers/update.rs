//! `/update` — change a contact's number.

use axum::{
  Form,
  extract::State,
  response::Html,
};
use phonebook_core::{store::ContactStore, validate::validate_update};

use crate::{
  AppState,
  error::Error,
  handlers::ContactForm,
  page::{self, FormAction, Notice},
};

/// `GET /update`
pub async fn form<S>(State(state): State<AppState<S>>) -> Html<String>
where
  S: ContactStore,
{
  Html(page::contact_form(
    &state.config.developer_name,
    FormAction::Update,
    Notice::None,
  ))
}

/// `POST /update` — body: `username=<name>&phonenumber=<digits>`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<ContactForm>,
) -> Result<Html<String>, Error>
where
  S: ContactStore,
{
  let developer = &state.config.developer_name;

  if let Err(invalid) = validate_update(&form.username, &form.phonenumber) {
    tracing::debug!(reason = %invalid, "update rejected");
    let message = invalid.to_string();
    return Ok(Html(page::contact_form(
      developer,
      FormAction::Update,
      Notice::Invalid(&message),
    )));
  }

  let outcome = state
    .store
    .update(&form.username, &form.phonenumber)
    .await
    .map_err(Error::store)?;
  tracing::info!(?outcome, "update");

  let message = outcome.to_string();
  Ok(Html(page::contact_form(
    developer,
    FormAction::Update,
    Notice::Result(&message),
  )))
}
