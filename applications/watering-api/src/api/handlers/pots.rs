use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

use crate::{
    api::models::{
        pots::{PotAssignment, PotRelease, PumpActivation},
        PotsListResponse,
    },
    error::{ApiResult, RejectWith},
    repositories::Outcome,
    timestamp,
};

use super::AppState;

/// GET /vaso
/// Returns all pots, highest id first
pub async fn get_all_pots(State(state): State<AppState>) -> ApiResult<Json<PotsListResponse>> {
    let pots = state
        .pots_repository
        .get_all_desc()
        .await
        .reject_with("Erro ao retornar lista de vasos!")?;

    Ok(Json(PotsListResponse { pots }))
}

/// PUT /vaso
/// Assign a plant to a pot and activate it
pub async fn assign_pot(
    State(state): State<AppState>,
    payload: Result<Json<PotAssignment>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<&'static str>)> {
    const FAILURE: &str = "Vaso não atualizado!";

    let Json(assignment) = payload.reject_with(FAILURE)?;
    let outcome = state
        .pots_repository
        .assign(assignment.pot_id, assignment.plant_name.as_deref())
        .await
        .reject_with(FAILURE)?;

    log_no_match(outcome, assignment.pot_id, "assign");
    Ok((StatusCode::CREATED, Json("Vaso atualizado!")))
}

/// DELETE /vaso
/// Unassign a pot and switch it off
pub async fn deactivate_pot(
    State(state): State<AppState>,
    payload: Result<Json<PotRelease>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<&'static str>)> {
    const FAILURE: &str = "Não foi possível desligar o vaso!";

    let Json(release) = payload.reject_with(FAILURE)?;
    let outcome = state
        .pots_repository
        .deactivate(release.pot_id)
        .await
        .reject_with(FAILURE)?;

    log_no_match(outcome, release.pot_id, "deactivate");
    Ok((StatusCode::CREATED, Json("Vaso desligado!")))
}

/// PUT /bomba
/// Manually request a pump run; the pot does not need to be active
pub async fn activate_pump(
    State(state): State<AppState>,
    payload: Result<Json<PumpActivation>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<&'static str>)> {
    const FAILURE: &str = "Erro ao ativar bomba!";

    let Json(activation) = payload.reject_with(FAILURE)?;
    let outcome = state
        .pots_repository
        .start_pump(activation.pot_id, activation.duration_secs, &timestamp::now())
        .await
        .reject_with(FAILURE)?;

    log_no_match(outcome, activation.pot_id, "activate pump");
    Ok((StatusCode::CREATED, Json("A bomba será ativada!")))
}

fn log_no_match(outcome: Outcome, pot_id: i64, action: &str) {
    if outcome == Outcome::NoMatch {
        tracing::debug!(pot_id, "{} matched no pot", action);
    }
}
