//! One module per route. Each exposes `form` for `GET` and `submit` for
//! `POST`.

pub mod add;
pub mod delete;
pub mod search;
pub mod update;

use serde::Deserialize;

/// The urlencoded body shared by every route. Fields a form does not send,
/// or a client omits, read as empty.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
  #[serde(default)]
  pub username:    String,
  #[serde(default)]
  pub phonenumber: String,
}
