use serde::Serialize;

pub use crate::repositories::telemetry::{SensorReading, TelemetryRecord};

#[derive(Debug, Serialize)]
pub struct TelemetryListResponse {
    #[serde(rename = "lista_info")]
    pub records: Vec<TelemetryRecord>,
}
