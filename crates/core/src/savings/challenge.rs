//! Gamified savings challenges: a total spread evenly over N periods.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::savings_errors::SavingsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeCadence {
    Weekly,
    Daily,
}

impl ChallengeCadence {
    fn period_name(self, count: u32) -> &'static str {
        match (self, count) {
            (Self::Weekly, 1) => "week",
            (Self::Weekly, _) => "weeks",
            (Self::Daily, 1) => "day",
            (Self::Daily, _) => "days",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsChallenge {
    pub id: String,
    pub title: String,
    pub total_amount: f64,
    /// Number of periods.
    pub duration: u32,
    pub cadence: ChallengeCadence,
    /// Amount saved so far.
    pub saved: f64,
    pub is_active: bool,
}

impl SavingsChallenge {
    /// Creates an active challenge. A blank title gets a generated one.
    pub fn new(
        title: Option<&str>,
        total_amount: f64,
        duration: u32,
        cadence: ChallengeCadence,
    ) -> Result<Self, SavingsError> {
        if duration == 0 {
            return Err(SavingsError::InvalidDuration);
        }
        if !total_amount.is_finite() || total_amount <= 0.0 {
            return Err(SavingsError::InvalidTarget(total_amount));
        }

        let title = match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => title.to_string(),
            None => default_title(cadence, duration),
        };

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title,
            total_amount,
            duration,
            cadence,
            saved: 0.0,
            is_active: true,
        })
    }

    /// Amount to save each period, rounded to whole units.
    pub fn installment(&self) -> f64 {
        (self.total_amount / f64::from(self.duration)).round()
    }

    pub fn description(&self) -> String {
        format!(
            "Save {} every {} for {} {} to reach {}.",
            self.installment(),
            self.cadence.period_name(1),
            self.duration,
            self.cadence.period_name(self.duration),
            self.total_amount
        )
    }

    /// Adds a deposit towards the challenge; completing it deactivates it.
    pub fn record_progress(&mut self, amount: f64) -> Result<(), SavingsError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(SavingsError::InvalidContribution(amount));
        }
        self.saved += amount;
        if self.saved >= self.total_amount {
            self.is_active = false;
        }
        Ok(())
    }

    /// Whole percent of the total saved so far, capped at 100.
    pub fn progress_percentage(&self) -> u32 {
        (self.saved / self.total_amount * 100.0).min(100.0).round() as u32
    }
}

fn default_title(cadence: ChallengeCadence, duration: u32) -> String {
    let kind = match cadence {
        ChallengeCadence::Weekly => "Weekly",
        ChallengeCadence::Daily => "Daily",
    };
    format!(
        "{} challenge ({} {})",
        kind,
        duration,
        cadence.period_name(duration)
    )
}
