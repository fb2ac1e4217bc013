//! Self-ping task that keeps the hosting platform from idling the process.
//!
//! The task owns its own HTTP client and timer and never touches the store.
//! A failed round is logged and the next tick tries again.

use std::time::Duration;

use anyhow::{Context, Result, ensure};
use reqwest::{Client, StatusCode};
use tokio::{
  task::JoinHandle,
  time::{Instant, MissedTickBehavior, interval_at},
};

use crate::ServerConfig;

/// Paths hit on every tick, relative to the base URL.
pub const PING_PATHS: [&str; 2] = ["/api/ping", "/api/health"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The result of one GET issued by [`Keepalive::ping_once`].
#[derive(Debug)]
pub struct PingOutcome {
  pub url:    String,
  pub result: Result<StatusCode, reqwest::Error>,
}

impl PingOutcome {
  pub fn is_success(&self) -> bool {
    matches!(&self.result, Ok(status) if status.is_success())
  }
}

/// Periodic GETs against this service's own public endpoints.
#[derive(Clone)]
pub struct Keepalive {
  client:   Client,
  base_url: String,
  period:   Duration,
}

impl Keepalive {
  /// Fails on a zero `period`, which the tokio timer cannot tick on.
  pub fn new(base_url: impl Into<String>, period: Duration) -> Result<Self> {
    ensure!(!period.is_zero(), "keepalive period must be non-zero");
    let client = Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .build()
      .context("failed to build HTTP client")?;
    let base_url = base_url.into().trim_end_matches('/').to_owned();
    Ok(Self { client, base_url, period })
  }

  /// A pinger for `config`, or `None` when no external URL is configured.
  pub fn from_config(config: &ServerConfig) -> Result<Option<Self>> {
    config
      .external_url()
      .map(|url| Self::new(url, config.ping_interval()))
      .transpose()
  }

  pub fn base_url(&self) -> &str { &self.base_url }

  /// Issue one GET to each of [`PING_PATHS`], logging each outcome.
  pub async fn ping_once(&self) -> Vec<PingOutcome> {
    let mut outcomes = Vec::with_capacity(PING_PATHS.len());

    for path in PING_PATHS {
      let url = format!("{}{path}", self.base_url);
      let result = self
        .client
        .get(&url)
        .send()
        .await
        .map(|resp| resp.status());

      match &result {
        Ok(status) if status.is_success() => {
          tracing::info!(%url, %status, "keepalive ping");
        }
        Ok(status) => tracing::warn!(%url, %status, "keepalive ping returned an error status"),
        Err(e) => tracing::warn!(%url, error = %e, "keepalive ping failed"),
      }

      outcomes.push(PingOutcome { url, result });
    }

    outcomes
  }

  /// Run forever on a detached task. The first round fires one full period
  /// after the call.
  pub fn spawn(self) -> JoinHandle<()> {
    tokio::spawn(async move {
      let mut ticker = interval_at(Instant::now() + self.period, self.period);
      ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
      loop {
        ticker.tick().await;
        self.ping_once().await;
      }
    })
  }
}
