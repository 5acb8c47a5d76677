use serde::{Deserialize, Serialize};

use crate::db::DbPool;
use crate::error::Result;
use crate::repositories::Outcome;
use crate::wire;

#[derive(Debug, Serialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Pot {
    pub id: i64,
    #[serde(rename = "vegetal")]
    pub plant_name: Option<String>,
    #[serde(rename = "bomba", with = "wire::flag")]
    pub pump_on: bool,
    #[serde(rename = "tempo")]
    pub pump_duration_secs: i64,
    #[serde(rename = "status", with = "wire::flag")]
    pub active: bool,
    #[serde(rename = "ultimaBomba")]
    pub last_pumped_at: Option<String>,
}

/// PUT /vaso body
#[derive(Debug, Deserialize, Clone)]
pub struct PotAssignment {
    #[serde(rename = "idVaso", deserialize_with = "wire::lenient::deserialize")]
    pub pot_id: i64,
    #[serde(rename = "nomeVegetal")]
    pub plant_name: Option<String>,
}

/// DELETE /vaso body
#[derive(Debug, Deserialize, Clone)]
pub struct PotRelease {
    #[serde(rename = "idVaso", deserialize_with = "wire::lenient::deserialize")]
    pub pot_id: i64,
}

/// PUT /bomba body
#[derive(Debug, Deserialize, Clone)]
pub struct PumpActivation {
    #[serde(rename = "idVaso", deserialize_with = "wire::lenient::deserialize")]
    pub pot_id: i64,
    #[serde(rename = "tempo", deserialize_with = "wire::lenient::deserialize")]
    pub duration_secs: i64,
}

#[derive(Debug, Clone)]
pub struct PotsRepository {
    pool: DbPool,
}

impl PotsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get all pots, highest id first
    pub async fn get_all_desc(&self) -> Result<Vec<Pot>> {
        let pots = sqlx::query_as::<_, Pot>(
            r#"
            SELECT id, plant_name, pump_on, pump_duration_secs, active, last_pumped_at
            FROM pots
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(pots)
    }

    pub async fn find_by_id(&self, pot_id: i64) -> Result<Option<Pot>> {
        let pot = sqlx::query_as::<_, Pot>(
            r#"
            SELECT id, plant_name, pump_on, pump_duration_secs, active, last_pumped_at
            FROM pots
            WHERE id = ?
            "#,
        )
        .bind(pot_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(pot)
    }

    /// Assign a plant to a pot and mark it active. The plant name is not checked.
    pub async fn assign(&self, pot_id: i64, plant_name: Option<&str>) -> Result<Outcome> {
        let result = sqlx::query("UPDATE pots SET plant_name = ?, active = 1 WHERE id = ?")
            .bind(plant_name)
            .bind(pot_id)
            .execute(&self.pool)
            .await?;

        Ok(Outcome::from_rows_affected(result.rows_affected()))
    }

    /// Clear the assignment; pump state is left as is.
    pub async fn deactivate(&self, pot_id: i64) -> Result<Outcome> {
        let result = sqlx::query("UPDATE pots SET plant_name = NULL, active = 0 WHERE id = ?")
            .bind(pot_id)
            .execute(&self.pool)
            .await?;

        Ok(Outcome::from_rows_affected(result.rows_affected()))
    }

    /// Request a pump run of `duration_secs` and stamp the activation time.
    pub async fn start_pump(
        &self,
        pot_id: i64,
        duration_secs: i64,
        timestamp: &str,
    ) -> Result<Outcome> {
        let result = sqlx::query(
            r#"
            UPDATE pots
            SET pump_duration_secs = ?, pump_on = 1, last_pumped_at = ?
            WHERE id = ?
            "#,
        )
        .bind(duration_secs)
        .bind(timestamp)
        .bind(pot_id)
        .execute(&self.pool)
        .await?;

        Ok(Outcome::from_rows_affected(result.rows_affected()))
    }

    /// Clear pump flag and duration on every pot. Returns the number of pots touched.
    pub async fn reset_all_pumps(&self) -> Result<u64> {
        let result = sqlx::query("UPDATE pots SET pump_duration_secs = 0, pump_on = 0")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
