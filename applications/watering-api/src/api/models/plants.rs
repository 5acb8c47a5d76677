use serde::Serialize;

pub use crate::repositories::plants::{Plant, PlantName};

#[derive(Debug, Serialize)]
pub struct PlantsListResponse {
    #[serde(rename = "lista_vegetais")]
    pub plants: Vec<Plant>,
}
