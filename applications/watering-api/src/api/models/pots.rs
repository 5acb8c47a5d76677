use serde::Serialize;

pub use crate::repositories::pots::{Pot, PotAssignment, PotRelease, PumpActivation};

#[derive(Debug, Serialize)]
pub struct PotsListResponse {
    #[serde(rename = "lista_vasos")]
    pub pots: Vec<Pot>,
}
