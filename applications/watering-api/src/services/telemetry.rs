use crate::error::{AppError, Result};
use crate::repositories::telemetry::{SensorReading, TelemetryRecord};
use crate::repositories::{PlantsRepository, PotsRepository, TelemetryRepository};
use crate::timestamp;
use crate::watering;

/// What happened to a reading accepted from the device.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingestion {
    pub record: TelemetryRecord,
    pub pump_triggered: bool,
}

#[derive(Debug, Clone)]
pub struct TelemetryService {
    plants: PlantsRepository,
    pots: PotsRepository,
    telemetry: TelemetryRepository,
}

impl TelemetryService {
    pub fn new(
        plants: PlantsRepository,
        pots: PotsRepository,
        telemetry: TelemetryRepository,
    ) -> Self {
        Self {
            plants,
            pots,
            telemetry,
        }
    }

    /// Store a reading from an active pot and schedule a pump run when the
    /// watering policy says so.
    pub async fn ingest(&self, reading: SensorReading) -> Result<Ingestion> {
        let pot = self
            .pots
            .find_by_id(reading.pot_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pot {} not found", reading.pot_id)))?;

        if !pot.active {
            return Err(AppError::PotInactive(pot.id));
        }

        let now = timestamp::now();
        let plant_name = pot.plant_name.as_deref();
        let record = self.telemetry.insert(&reading, plant_name, &now).await?;

        let plant = match plant_name {
            Some(name) => self.plants.find_by_name(name).await?,
            None => None,
        };

        let pump_triggered = match plant {
            Some(plant) if watering::needs_water(&plant, &reading) => {
                self.pots
                    .start_pump(pot.id, watering::PUMP_DURATION_SECS, &now)
                    .await?;
                tracing::info!(
                    pot_id = pot.id,
                    plant = %plant.name,
                    temperature = reading.temperature,
                    humidity = reading.humidity,
                    "Watering threshold reached, pump scheduled"
                );
                true
            }
            Some(_) => false,
            None => {
                tracing::warn!(
                    pot_id = pot.id,
                    plant = ?plant_name,
                    "Active pot has no registered plant, skipping watering check"
                );
                false
            }
        };

        Ok(Ingestion {
            record,
            pump_triggered,
        })
    }
}
