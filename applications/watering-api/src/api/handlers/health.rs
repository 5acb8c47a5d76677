use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use super::AppState;
use crate::db;

/// GET /
/// Marker text the mobile app uses to detect the server
pub async fn index() -> &'static str {
    "Projeto SIV"
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let mut response = json!({
        "status": "ok",
        "database": {
            "connected": false,
            "table_exists": false,
        }
    });

    match db::health_check(&state.pool).await {
        Ok((connected, table_exists)) => {
            response["database"]["connected"] = json!(connected);
            response["database"]["table_exists"] = json!(table_exists);
        }
        Err(e) => {
            response["database"]["error"] = json!(format!("Database error: {}", e));
        }
    }

    let healthy = response["database"]["connected"].as_bool().unwrap_or(false)
        && response["database"]["table_exists"].as_bool().unwrap_or(false);

    if healthy {
        (StatusCode::OK, Json(response))
    } else {
        response["status"] = json!("unavailable");
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}
