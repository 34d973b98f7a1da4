//! Runtime server configuration.
//!
//! Layered, lowest precedence first: built-in defaults, an optional TOML
//! file, then `PHONEBOOK_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:           String,
  pub port:           u16,
  pub store_path:     PathBuf,
  /// Shown in the page footer when non-empty.
  #[serde(default)]
  pub developer_name: String,
}

impl ServerConfig {
  /// Load from `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::builder(path)?
      .add_source(Environment::with_prefix("PHONEBOOK"))
      .build()?
      .try_deserialize()
  }

  fn builder(
    path: &Path,
  ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Ok(
      Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 80_i64)?
        .set_default("store_path", "phonebook.db")?
        .set_default("developer_name", "")?
        .add_source(File::from(path).required(false)),
    )
  }

  /// `store_path` with a leading `~/` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn from_file_only(path: &Path) -> ServerConfig {
    ServerConfig::builder(path)
      .unwrap()
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap()
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let cfg = from_file_only(Path::new("/nonexistent/phonebook.toml"));
    assert_eq!(cfg.address(), "0.0.0.0:80");
    assert_eq!(cfg.store_path, PathBuf::from("phonebook.db"));
    assert!(cfg.developer_name.is_empty());
  }

  #[test]
  fn file_overrides_defaults() {
    let path = std::env::temp_dir().join(format!(
      "phonebook-settings-test-{}.toml",
      std::process::id()
    ));
    std::fs::write(
      &path,
      "port = 8080\nstore_path = \"/var/lib/phonebook.db\"\ndeveloper_name = \"Jo\"\n",
    )
    .unwrap();

    let cfg = from_file_only(&path);
    assert_eq!(cfg.address(), "0.0.0.0:8080");
    assert_eq!(cfg.resolved_store_path(), PathBuf::from("/var/lib/phonebook.db"));
    assert_eq!(cfg.developer_name, "Jo");

    let _ = std::fs::remove_file(&path);
  }

  #[test]
  fn environment_overrides_file() {
    let path = std::env::temp_dir().join(format!(
      "phonebook-settings-env-test-{}.toml",
      std::process::id()
    ));
    std::fs::write(&path, "port = 8080\ndeveloper_name = \"Jo\"\n").unwrap();

    // SAFETY: no other test in this crate reads or writes PHONEBOOK_PORT.
    unsafe { std::env::set_var("PHONEBOOK_PORT", "8081") };
    let loaded = ServerConfig::load(&path);
    unsafe { std::env::remove_var("PHONEBOOK_PORT") };
    let _ = std::fs::remove_file(&path);

    let cfg = loaded.unwrap();
    assert_eq!(cfg.address(), "0.0.0.0:8081");
    assert_eq!(cfg.developer_name, "Jo");
  }

  #[test]
  fn tilde_is_expanded_against_home() {
    let expanded = expand_tilde(Path::new("~/data/phonebook.db"));
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(expanded, PathBuf::from(home).join("data/phonebook.db"));
    }
    assert_eq!(expand_tilde(Path::new("/abs.db")), PathBuf::from("/abs.db"));
  }
}
