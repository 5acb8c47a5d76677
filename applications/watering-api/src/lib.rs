pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod repositories;
pub mod services;
pub mod timestamp;
pub mod watering;
pub mod wire;

pub use config::Config;
pub use db::create_pool;
pub use error::{AppError, Result};
