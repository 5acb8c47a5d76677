//! Device-facing view of the pots.
//!
//! The firmware knows exactly two pots and addresses them by position in the
//! pot list sorted by id descending: index 0 is its "pot 2" and index 1 its
//! "pot 1". All positional addressing lives in this module.

use serde::Serialize;

use crate::db::DEPLOYED_POT_COUNT;
use crate::error::{AppError, Result};
use crate::repositories::pots::Pot;
use crate::repositories::PotsRepository;
use crate::wire;

/// The two pots as the firmware numbers them.
#[derive(Debug, Clone, PartialEq)]
pub struct PotPair {
    pub pot1: Pot,
    pub pot2: Pot,
}

impl PotPair {
    /// Builds the pair from pots sorted by id descending.
    ///
    /// Extra pots beyond the first two are ignored.
    pub fn from_descending(pots: Vec<Pot>) -> Result<Self> {
        let found = pots.len();
        if found < DEPLOYED_POT_COUNT {
            return Err(AppError::PotLayout(found));
        }
        if found > DEPLOYED_POT_COUNT {
            tracing::warn!(found, "More pots than the device knows about, using the two highest ids");
        }

        let mut pots = pots.into_iter();
        match (pots.next(), pots.next()) {
            (Some(pot2), Some(pot1)) => Ok(Self { pot1, pot2 }),
            _ => Err(AppError::PotLayout(found)),
        }
    }
}

/// GET /bomba response
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PumpSchedule {
    #[serde(rename = "tempo1")]
    pub duration1: i64,
    #[serde(rename = "ultimaBomba1")]
    pub last_pumped1: Option<String>,
    #[serde(rename = "tempo2")]
    pub duration2: i64,
    #[serde(rename = "ultimaBomba2")]
    pub last_pumped2: Option<String>,
}

impl From<&PotPair> for PumpSchedule {
    fn from(pair: &PotPair) -> Self {
        Self {
            duration1: pair.pot1.pump_duration_secs,
            last_pumped1: pair.pot1.last_pumped_at.clone(),
            duration2: pair.pot2.pump_duration_secs,
            last_pumped2: pair.pot2.last_pumped_at.clone(),
        }
    }
}

/// GET /ativo response
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct ActivePots {
    #[serde(rename = "idVaso1", with = "wire::flag")]
    pub pot1: bool,
    #[serde(rename = "idVaso2", with = "wire::flag")]
    pub pot2: bool,
}

impl From<&PotPair> for ActivePots {
    fn from(pair: &PotPair) -> Self {
        Self {
            pot1: pair.pot1.active,
            pot2: pair.pot2.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeviceService {
    pots: PotsRepository,
}

impl DeviceService {
    pub fn new(pots: PotsRepository) -> Self {
        Self { pots }
    }

    pub async fn pot_pair(&self) -> Result<PotPair> {
        let pots = self.pots.get_all_desc().await?;
        PotPair::from_descending(pots)
    }

    /// Returns the pending pump instructions and clears them on every pot.
    ///
    /// The read and the reset are separate statements; two overlapping polls
    /// can both observe the same instruction.
    pub async fn take_pump_schedule(&self) -> Result<PumpSchedule> {
        let pair = self.pot_pair().await?;
        let schedule = PumpSchedule::from(&pair);

        let reset = self.pots.reset_all_pumps().await?;
        tracing::info!(
            pots = reset,
            duration1 = schedule.duration1,
            duration2 = schedule.duration2,
            "Pump schedule delivered, flags reset"
        );

        Ok(schedule)
    }

    pub async fn active_pots(&self) -> Result<ActivePots> {
        let pair = self.pot_pair().await?;
        Ok(ActivePots::from(&pair))
    }
}
