//! Server-rendered HTML pages.
//!
//! Three page kinds share one layout: the search page at `/`, the contact
//! form used by `/add` and `/update`, and the delete form. Every piece of
//! user-supplied text goes through [`escape`].

use phonebook_core::outcome::SearchOutcome;

// ─── Pieces ──────────────────────────────────────────────────────────────────

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(s: &str) -> String { quick_xml::escape::escape(s).into_owned() }

/// A message shown under a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
  None,
  /// Input rejected before reaching the store.
  Invalid(&'a str),
  /// Status message returned by the store.
  Result(&'a str),
}

impl Notice<'_> {
  fn render(self) -> String {
    match self {
      Notice::None => String::new(),
      Notice::Invalid(m) => format!("<p class=\"invalid\">{}</p>\n", escape(m)),
      Notice::Result(m) => format!("<p class=\"result\">{}</p>\n", escape(m)),
    }
  }
}

/// Which mutation the contact form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
  Save,
  Update,
}

impl FormAction {
  fn path(self) -> &'static str {
    match self {
      FormAction::Save => "/add",
      FormAction::Update => "/update",
    }
  }

  fn title(self) -> &'static str {
    match self {
      FormAction::Save => "Add a phone record",
      FormAction::Update => "Update a phone record",
    }
  }

  fn button(self) -> &'static str {
    match self {
      FormAction::Save => "save",
      FormAction::Update => "update",
    }
  }
}

// ─── Layout ──────────────────────────────────────────────────────────────────

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto}\
nav a{margin-right:1rem}table{border-collapse:collapse}\
td,th{border:1px solid #ccc;padding:.25rem .75rem;text-align:left}\
.invalid{color:#b00}.result{color:#060}footer{margin-top:2rem;color:#666}";

fn layout(title: &str, developer_name: &str, body: &str) -> String {
  let footer = if developer_name.is_empty() {
    String::new()
  } else {
    format!("<footer>Developed by {}</footer>\n", escape(developer_name))
  };

  format!(
    "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<title>{title} | Phonebook</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href=\"/\">Search</a><a href=\"/add\">Add</a><a href=\"/update\">Update</a><a href=\"/delete\">Delete</a></nav>
<h1>{title}</h1>
{body}{footer}</body>
</html>
",
    title = escape(title),
  )
}

fn text_input(label: &str, name: &str, value: &str) -> String {
  format!(
    "<label>{label} <input type=\"text\" name=\"{name}\" value=\"{}\"></label>\n",
    escape(value)
  )
}

// ─── Pages ───────────────────────────────────────────────────────────────────

/// `/`: the search form, plus a result table once a keyword was submitted.
pub fn search(developer_name: &str, result: Option<(&str, &SearchOutcome)>) -> String {
  let keyword = result.map(|(k, _)| k).unwrap_or_default();

  let mut body = String::from("<form method=\"post\" action=\"/\">\n");
  body.push_str(&text_input("Name", "username", keyword));
  body.push_str("<button type=\"submit\">search</button>\n</form>\n");

  if let Some((keyword, outcome)) = result {
    body.push_str(&format!(
      "<h2>Results for &quot;{}&quot;</h2>\n",
      escape(keyword)
    ));
    body.push_str("<table>\n<tr><th>Name</th><th>Number</th></tr>\n");
    for row in outcome.rows() {
      body.push_str(&format!(
        "<tr><td>{}</td><td>{}</td></tr>\n",
        escape(row.name),
        escape(row.number)
      ));
    }
    body.push_str("</table>\n");
  }

  layout("Phonebook", developer_name, &body)
}

/// `/add` and `/update`: name and number fields.
pub fn contact_form(developer_name: &str, action: FormAction, notice: Notice<'_>) -> String {
  let mut body = format!("<form method=\"post\" action=\"{}\">\n", action.path());
  body.push_str(&text_input("Name", "username", ""));
  body.push_str(&text_input("Phone number", "phonenumber", ""));
  body.push_str(&format!(
    "<button type=\"submit\">{}</button>\n</form>\n",
    action.button()
  ));
  body.push_str(&notice.render());

  layout(action.title(), developer_name, &body)
}

/// `/delete`: name field only.
pub fn delete_form(developer_name: &str, notice: Notice<'_>) -> String {
  let mut body = String::from("<form method=\"post\" action=\"/delete\">\n");
  body.push_str(&text_input("Name", "username", ""));
  body.push_str("<button type=\"submit\">delete</button>\n</form>\n");
  body.push_str(&notice.render());

  layout("Delete a phone record", developer_name, &body)
}
