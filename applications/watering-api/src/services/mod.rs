pub mod device;
pub mod telemetry;

pub use device::DeviceService;
pub use telemetry::TelemetryService;
