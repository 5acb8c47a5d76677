use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

use crate::{
    api::models::{telemetry::SensorReading, TelemetryListResponse},
    error::{ApiResult, RejectWith},
};

use super::AppState;

/// GET /informacao
/// Returns all telemetry, newest first
pub async fn get_all_telemetry(
    State(state): State<AppState>,
) -> ApiResult<Json<TelemetryListResponse>> {
    let records = state
        .telemetry_repository
        .get_all_desc()
        .await
        .reject_with("Erro ao retornar lista de informações!")?;

    Ok(Json(TelemetryListResponse { records }))
}

/// POST /informacao
/// Device reading; rejected unless the pot is active
pub async fn ingest_reading(
    State(state): State<AppState>,
    payload: Result<Json<SensorReading>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<&'static str>)> {
    const FAILURE: &str = "O Vaso não está ativo!";

    let Json(reading) = payload.reject_with(FAILURE)?;
    let ingestion = state
        .telemetry_service
        .ingest(reading)
        .await
        .reject_with(FAILURE)?;

    let message = if ingestion.pump_triggered {
        "Objeto cadastrado, a bomba será acionada!"
    } else {
        "Objeto cadastrado!"
    };

    Ok((StatusCode::OK, Json(message)))
}
