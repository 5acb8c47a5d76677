pub mod device;
pub mod health;
pub mod plants;
pub mod pots;
pub mod telemetry;

use crate::{
    db::DbPool,
    repositories::{PlantsRepository, PotsRepository, TelemetryRepository},
    services::{DeviceService, TelemetryService},
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub plants_repository: PlantsRepository,
    pub pots_repository: PotsRepository,
    pub telemetry_repository: TelemetryRepository,
    pub device_service: DeviceService,
    pub telemetry_service: TelemetryService,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let plants_repository = PlantsRepository::new(pool.clone());
        let pots_repository = PotsRepository::new(pool.clone());
        let telemetry_repository = TelemetryRepository::new(pool.clone());

        let device_service = DeviceService::new(pots_repository.clone());
        let telemetry_service = TelemetryService::new(
            plants_repository.clone(),
            pots_repository.clone(),
            telemetry_repository.clone(),
        );

        Self {
            pool,
            plants_repository,
            pots_repository,
            telemetry_repository,
            device_service,
            telemetry_service,
        }
    }
}
