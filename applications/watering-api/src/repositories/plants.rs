use serde::{Deserialize, Serialize};

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::repositories::Outcome;

/// Plant profile, keyed by name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Plant {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tempIdeal")]
    pub ideal_temperature: f64,
    #[serde(rename = "umidadeIdeal")]
    pub ideal_humidity: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlantName {
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct PlantsRepository {
    pool: DbPool,
}

impl PlantsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get all plants in registration order
    pub async fn get_all(&self) -> Result<Vec<Plant>> {
        let plants = sqlx::query_as::<_, Plant>(
            r#"
            SELECT name, ideal_temperature, ideal_humidity
            FROM plants
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(plants)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Plant>> {
        let plant = sqlx::query_as::<_, Plant>(
            r#"
            SELECT name, ideal_temperature, ideal_humidity
            FROM plants
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plant)
    }

    /// Register a new plant; a taken name yields `DuplicateKey`.
    pub async fn create(&self, plant: &Plant) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO plants (name, ideal_temperature, ideal_humidity)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&plant.name)
        .bind(plant.ideal_temperature)
        .bind(plant.ideal_humidity)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::DuplicateKey(plant.name.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Update the ideal values of the plant with the same name.
    pub async fn update(&self, plant: &Plant) -> Result<Outcome> {
        let result = sqlx::query(
            r#"
            UPDATE plants
            SET ideal_temperature = ?, ideal_humidity = ?
            WHERE name = ?
            "#,
        )
        .bind(plant.ideal_temperature)
        .bind(plant.ideal_humidity)
        .bind(&plant.name)
        .execute(&self.pool)
        .await?;

        Ok(Outcome::from_rows_affected(result.rows_affected()))
    }

    pub async fn delete(&self, name: &str) -> Result<Outcome> {
        let result = sqlx::query("DELETE FROM plants WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(Outcome::from_rows_affected(result.rows_affected()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plant_uses_app_field_names() {
        let plant = Plant {
            name: "Manjericão".to_string(),
            ideal_temperature: 24.0,
            ideal_humidity: 60.0,
        };

        assert_eq!(
            serde_json::to_value(&plant).unwrap(),
            json!({ "nome": "Manjericão", "tempIdeal": 24.0, "umidadeIdeal": 60.0 })
        );
    }

    #[test]
    fn test_plant_requires_all_fields() {
        let missing = json!({ "nome": "Alecrim", "tempIdeal": 20.0 });
        assert!(serde_json::from_value::<Plant>(missing).is_err());
    }
}
