//! Liveness endpoint. Always 200; the body says whether Postgres answers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    pub fn new(db_healthy: bool) -> Self {
        let status = if db_healthy {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let check = filmoteka_db::health_check(&state.pool).await;
    if let Err(err) = &check {
        tracing::warn!(error = %err, "Database unreachable from health check");
    }

    Json(HealthReport::new(check.is_ok()))
}
