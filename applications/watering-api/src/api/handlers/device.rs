use axum::{extract::State, Json};

use crate::{
    error::{ApiResult, RejectWith},
    services::device::{ActivePots, PumpSchedule},
};

use super::AppState;

const POT_LAYOUT_FAILURE: &str = "Erro ao consultar os vasos!";

/// GET /bomba
/// Device poll for pump instructions. Clears the instructions of every pot.
pub async fn poll_pumps(State(state): State<AppState>) -> ApiResult<Json<PumpSchedule>> {
    let schedule = state
        .device_service
        .take_pump_schedule()
        .await
        .reject_with(POT_LAYOUT_FAILURE)?;

    Ok(Json(schedule))
}

/// GET /ativo
/// Device query for which of its two pots are active
pub async fn get_active_pots(State(state): State<AppState>) -> ApiResult<Json<ActivePots>> {
    let active = state
        .device_service
        .active_pots()
        .await
        .reject_with(POT_LAYOUT_FAILURE)?;

    Ok(Json(active))
}
