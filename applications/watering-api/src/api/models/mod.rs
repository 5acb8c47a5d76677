pub mod plants;
pub mod pots;
pub mod telemetry;

pub use plants::PlantsListResponse;
pub use pots::PotsListResponse;
pub use telemetry::TelemetryListResponse;
