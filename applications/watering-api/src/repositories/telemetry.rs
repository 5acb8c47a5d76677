use serde::{Deserialize, Serialize};

use crate::db::DbPool;
use crate::error::Result;
use crate::wire;

/// Stored sensor reading. `plant_name` is a copy taken at insertion time.
#[derive(Debug, Serialize, Clone, PartialEq, sqlx::FromRow)]
pub struct TelemetryRecord {
    #[serde(skip_serializing)]
    pub id: i64,
    #[serde(rename = "idVaso")]
    pub pot_id: i64,
    #[serde(rename = "nomeVegetal")]
    pub plant_name: Option<String>,
    #[serde(rename = "temperatura")]
    pub temperature: f64,
    #[serde(rename = "umidade")]
    pub humidity: f64,
    #[serde(rename = "data")]
    pub recorded_at: String,
}

/// POST /informacao body sent by the device
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SensorReading {
    #[serde(rename = "idVaso", deserialize_with = "wire::lenient::deserialize")]
    pub pot_id: i64,
    #[serde(rename = "t", deserialize_with = "wire::lenient::deserialize")]
    pub temperature: f64,
    #[serde(rename = "u", deserialize_with = "wire::lenient::deserialize")]
    pub humidity: f64,
}

#[derive(Debug, Clone)]
pub struct TelemetryRepository {
    pool: DbPool,
}

impl TelemetryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get all records, newest first
    pub async fn get_all_desc(&self) -> Result<Vec<TelemetryRecord>> {
        let records = sqlx::query_as::<_, TelemetryRecord>(
            r#"
            SELECT id, pot_id, plant_name, temperature, humidity, recorded_at
            FROM telemetry
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn insert(
        &self,
        reading: &SensorReading,
        plant_name: Option<&str>,
        timestamp: &str,
    ) -> Result<TelemetryRecord> {
        let record = sqlx::query_as::<_, TelemetryRecord>(
            r#"
            INSERT INTO telemetry (plant_name, humidity, temperature, pot_id, recorded_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, pot_id, plant_name, temperature, humidity, recorded_at
            "#,
        )
        .bind(plant_name)
        .bind(reading.humidity)
        .bind(reading.temperature)
        .bind(reading.pot_id)
        .bind(timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM telemetry")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_record_wire_shape_omits_id() {
        let record = TelemetryRecord {
            id: 17,
            pot_id: 1,
            plant_name: Some("Tomate".to_string()),
            temperature: 31.5,
            humidity: 42.0,
            recorded_at: "19/10/2026 14:05".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "idVaso": 1,
                "nomeVegetal": "Tomate",
                "temperatura": 31.5,
                "umidade": 42.0,
                "data": "19/10/2026 14:05",
            })
        );
    }

    #[test]
    fn test_sensor_reading_uses_device_keys() {
        let reading: SensorReading =
            serde_json::from_value(json!({ "idVaso": 2, "t": "41.0", "u": 39 })).unwrap();

        assert_eq!(
            reading,
            SensorReading {
                pot_id: 2,
                temperature: 41.0,
                humidity: 39.0,
            }
        );
    }
}
