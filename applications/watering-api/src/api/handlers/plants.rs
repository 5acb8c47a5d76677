use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

use crate::{
    api::models::{
        plants::{Plant, PlantName},
        PlantsListResponse,
    },
    error::{ApiResult, RejectWith},
    repositories::Outcome,
};

use super::AppState;

/// GET /vegetal
/// Returns all registered plants
pub async fn get_all_plants(State(state): State<AppState>) -> ApiResult<Json<PlantsListResponse>> {
    let plants = state
        .plants_repository
        .get_all()
        .await
        .reject_with("Erro ao retornar lista de vegetal!")?;

    Ok(Json(PlantsListResponse { plants }))
}

/// POST /vegetal
/// Register a new plant
pub async fn create_plant(
    State(state): State<AppState>,
    payload: Result<Json<Plant>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<&'static str>)> {
    const FAILURE: &str = "Vegetal não cadastrado!";

    let Json(plant) = payload.reject_with(FAILURE)?;
    state
        .plants_repository
        .create(&plant)
        .await
        .reject_with(FAILURE)?;

    tracing::debug!(plant = %plant.name, "Plant registered");
    Ok((StatusCode::CREATED, Json("Vegetal cadastrado!")))
}

/// PUT /vegetal
/// Update the ideal values of a plant. An unknown name still succeeds.
pub async fn update_plant(
    State(state): State<AppState>,
    payload: Result<Json<Plant>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<&'static str>)> {
    const FAILURE: &str = "Vegetal não atualizado!";

    let Json(plant) = payload.reject_with(FAILURE)?;
    let outcome = state
        .plants_repository
        .update(&plant)
        .await
        .reject_with(FAILURE)?;

    if outcome == Outcome::NoMatch {
        tracing::debug!(plant = %plant.name, "Update matched no plant");
    }

    Ok((StatusCode::CREATED, Json("Vegetal atualizado!")))
}

/// DELETE /vegetal
/// Delete a plant by name. An unknown name still succeeds.
pub async fn delete_plant(
    State(state): State<AppState>,
    payload: Result<Json<PlantName>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<&'static str>)> {
    const FAILURE: &str = "Não foi possível excluir o vegetal!";

    let Json(PlantName { name }) = payload.reject_with(FAILURE)?;
    let outcome = state
        .plants_repository
        .delete(&name)
        .await
        .reject_with(FAILURE)?;

    if outcome == Outcome::NoMatch {
        tracing::debug!(plant = %name, "Delete matched no plant");
    }

    Ok((StatusCode::OK, Json("Vegetal excluído!")))
}
