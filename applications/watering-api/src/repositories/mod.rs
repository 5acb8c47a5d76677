pub mod plants;
pub mod pots;
pub mod telemetry;

pub use plants::PlantsRepository;
pub use pots::PotsRepository;
pub use telemetry::TelemetryRepository;

/// Result of an update or delete addressed by key.
///
/// A key that matches no row is not an error: callers decide whether
/// `NoMatch` matters to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NoMatch,
}

impl Outcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            Outcome::NoMatch
        } else {
            Outcome::Applied
        }
    }
}
