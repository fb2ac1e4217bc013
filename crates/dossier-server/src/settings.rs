//! Server configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML file,
//! `DOSSIER_*` environment variables, then the hosting platform's own
//! variables (`PORT`, `RENDER`, `RENDER_EXTERNAL_URL`).

use std::{ops::RangeInclusive, path::Path, time::Duration};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Accepted values for `ping_interval_secs`: five to ten minutes.
pub const PING_INTERVAL_RANGE: RangeInclusive<u64> = 300..=600;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:               String,
  pub port:               u16,
  /// Public base URL of this instance. The keepalive task only runs when set.
  #[serde(default)]
  pub external_url:       Option<String>,
  pub ping_interval_secs: u64,
  /// Running on the hosting platform rather than a developer machine.
  #[serde(default)]
  pub hosted:             bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:               "0.0.0.0".to_owned(),
      port:               5000,
      external_url:       None,
      ping_interval_secs: 600,
      hosted:             false,
    }
  }
}

impl ServerConfig {
  /// Load configuration, reading `path` if it exists.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let defaults = Self::default();

    Config::builder()
      .set_default("host", defaults.host)?
      .set_default("port", i64::from(defaults.port))?
      .set_default("ping_interval_secs", defaults.ping_interval_secs as i64)?
      .set_default("hosted", defaults.hosted)?
      .add_source(File::from(path).required(false))
      .add_source(Environment::with_prefix("DOSSIER"))
      .set_override_option("port", platform_var("PORT"))?
      .set_override_option("hosted", platform_var("RENDER").map(|_| true))?
      .set_override_option("external_url", platform_var("RENDER_EXTERNAL_URL"))?
      .build()?
      .try_deserialize::<Self>()?
      .validated()
  }

  fn validated(self) -> Result<Self, ConfigError> {
    if !PING_INTERVAL_RANGE.contains(&self.ping_interval_secs) {
      return Err(ConfigError::Message(format!(
        "ping_interval_secs must be between {} and {}, got {}",
        PING_INTERVAL_RANGE.start(),
        PING_INTERVAL_RANGE.end(),
        self.ping_interval_secs,
      )));
    }
    Ok(self)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn ping_interval(&self) -> Duration {
    Duration::from_secs(self.ping_interval_secs)
  }

  /// `"render"` on the hosting platform, `"development"` elsewhere.
  pub fn environment(&self) -> &'static str {
    if self.hosted { "render" } else { "development" }
  }

  /// The external URL, if one is configured and non-blank.
  pub fn external_url(&self) -> Option<&str> {
    self
      .external_url
      .as_deref()
      .map(str::trim)
      .filter(|u| !u.is_empty())
  }
}

fn platform_var(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|v| !v.is_empty())
}
