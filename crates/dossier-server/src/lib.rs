//! HTTP server for Dossier.
//!
//! Combines the JSON API from `dossier-api` with the liveness endpoints,
//! permissive CORS and per-request tracing, and hosts the keepalive task.

pub mod keepalive;
pub mod settings;
pub mod status;

pub use keepalive::Keepalive;
pub use settings::ServerConfig;

use std::{sync::Arc, time::Instant};

use axum::Router;
use dossier_core::store::SuspectStore;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through the liveness handlers.
pub struct AppState<S> {
  pub store:   Arc<S>,
  pub config:  Arc<ServerConfig>,
  /// Process start, reported as uptime by `GET /health`.
  pub started: Instant,
}

// Manual impl: `S` itself need not be `Clone`.
impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:   self.store.clone(),
      config:  self.config.clone(),
      started: self.started,
    }
  }
}

impl<S> AppState<S> {
  /// State whose uptime counts from now.
  pub fn new(store: S, config: ServerConfig) -> Self {
    Self::started_at(store, config, Instant::now())
  }

  /// State whose uptime counts from `started`, normally taken first thing
  /// in `main`.
  pub fn started_at(store: S, config: ServerConfig, started: Instant) -> Self {
    Self {
      store:   Arc::new(store),
      config:  Arc::new(config),
      started,
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: everything lives under `/api`.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: SuspectStore + 'static,
{
  let api = dossier_api::api_router(state.store.clone()).merge(status::routes(state));

  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(Any)
    .allow_headers(Any);

  Router::new()
    .nest("/api", api)
    .layer(cors)
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use dossier_store_memory::MemoryStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  fn make_state() -> AppState<MemoryStore> {
    AppState::new(MemoryStore::seeded(), ServerConfig::default())
  }

  async fn send(
    state:  AppState<MemoryStore>,
    method: &str,
    uri:    &str,
    body:   Option<Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };
    let resp = router(state)
      .oneshot(builder.body(body).unwrap())
      .await
      .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
  }

  fn required() -> Value {
    json!({
      "full_name": "Orlov Pavel",
      "date_of_birth": "1998-04-12",
      "crime_type": "fraud",
    })
  }

  // ── List / get ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_returns_seeded_records() {
    let (status, body) = send(make_state(), "GET", "/api/suspects", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["id"], 1);
    assert_eq!(body["data"][1]["alias"][2], "CyberGhost");
    assert!(body["timestamp"].is_string());
  }

  #[tokio::test]
  async fn get_one_returns_record() {
    let (status, body) = send(make_state(), "GET", "/api/suspects/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["case_number"], "2026-002");
  }

  #[tokio::test]
  async fn get_unknown_returns_404_envelope() {
    let (status, body) = send(make_state(), "GET", "/api/suspects/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "suspect not found");
  }

  #[tokio::test]
  async fn non_numeric_id_returns_400_envelope() {
    let (status, body) = send(make_state(), "GET", "/api/suspects/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
  }

  // ── Create ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_returns_201_and_record_is_retrievable() {
    let state = make_state();
    let (status, body) =
      send(state.clone(), "POST", "/api/suspects", Some(required())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["id"], 3);
    assert_eq!(body["data"]["status"], "wanted");
    assert_eq!(body["data"]["nationality"], "RU");

    let (status, fetched) = send(state, "GET", "/api/suspects/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], body["data"]);
  }

  #[tokio::test]
  async fn create_missing_field_returns_400_naming_it() {
    let state = make_state();
    let mut input = required();
    input["date_of_birth"] = json!("");

    let (status, body) = send(state.clone(), "POST", "/api/suspects", Some(input)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("date_of_birth"));

    let (_, list) = send(state, "GET", "/api/suspects", None).await;
    assert_eq!(list["count"], 2);
  }

  #[tokio::test]
  async fn create_with_malformed_json_returns_400_envelope() {
    let req = Request::builder()
      .method("POST")
      .uri("/api/suspects")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{not json"))
      .unwrap();
    let resp = router(make_state()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "error");
  }

  // ── Update ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn update_changes_only_supplied_fields() {
    let state = make_state();
    let (_, before) = send(state.clone(), "GET", "/api/suspects/1", None).await;

    let (status, body) = send(
      state,
      "PUT",
      "/api/suspects/1",
      Some(json!({ "status": "detained", "id": 50, "added_date": "1999-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let mut expected = before["data"].clone();
    expected["status"] = json!("detained");
    assert_eq!(body["data"], expected);
  }

  #[tokio::test]
  async fn update_unknown_returns_404() {
    let (status, body) = send(
      make_state(),
      "PUT",
      "/api/suspects/99",
      Some(json!({ "status": "detained" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
  }

  // ── Delete ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_then_get_returns_404() {
    let state = make_state();
    let (status, body) = send(state.clone(), "DELETE", "/api/suspects/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let (status, _) = send(state.clone(), "GET", "/api/suspects/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(state, "DELETE", "/api/suspects/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Search ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn search_without_params_returns_all() {
    let (status, body) = send(make_state(), "GET", "/api/search", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
  }

  #[tokio::test]
  async fn search_by_alias_and_filter() {
    let state = make_state();
    let (_, body) = send(state.clone(), "GET", "/api/search?q=ghost", None).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["id"], 2);

    let (_, body) = send(
      state.clone(),
      "GET",
      "/api/search?q=cyber&danger_level=high&crime_type=&status=",
      None,
    )
    .await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["id"], 1);

    let (_, body) = send(state, "GET", "/api/search?status=detained", None).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
  }

  // ── Stats ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn stats_aggregate_seeded_records() {
    let (status, body) =
      send(make_state(), "GET", "/api/stats?as_of=2026-06-01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["by_crime_type"]["cyber-terrorism"], 1);
    assert_eq!(body["by_crime_type"]["cyber-extremism"], 1);
    assert_eq!(body["by_city"]["Chelyabinsk"], 2);
    assert_eq!(body["by_age_group"]["18-25"], 2);
    assert_eq!(body["by_age_group"]["<18"], 0);
  }

  #[tokio::test]
  async fn stats_rejects_bad_reference_date() {
    let (status, body) = send(make_state(), "GET", "/api/stats?as_of=soon", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
  }

  // ── Liveness ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn ping_reports_count_and_environment() {
    let (status, body) = send(make_state(), "GET", "/api/ping", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
    assert_eq!(body["environment"], "development");
    assert_eq!(body["suspects_count"], 2);
    assert!(body["timestamp"].is_string());
  }

  #[tokio::test]
  async fn health_reports_uptime() {
    let (status, body) = send(make_state(), "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
  }

  #[tokio::test]
  async fn health_uptime_counts_from_given_start() {
    let started = Instant::now()
      .checked_sub(std::time::Duration::from_secs(5))
      .unwrap();
    let state = AppState::started_at(MemoryStore::seeded(), ServerConfig::default(), started);
    let (_, body) = send(state, "GET", "/api/health", None).await;
    assert!(body["uptime"].as_f64().unwrap() >= 5.0, "{body}");
  }

  #[tokio::test]
  async fn cors_allows_any_origin() {
    let req = Request::builder()
      .method("GET")
      .uri("/api/ping")
      .header(header::ORIGIN, "https://elsewhere.example")
      .body(Body::empty())
      .unwrap();
    let resp = router(make_state()).oneshot(req).await.unwrap();
    assert_eq!(
      resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
      "*"
    );
  }
}
