//! Savings goals and contributions towards them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::savings_errors::SavingsError;

/// Shares of the remaining amount offered as one-tap contributions.
pub const QUICK_CONTRIBUTION_SHARES: [f64; 3] = [0.10, 0.25, 0.50];

/// Share of the remaining amount suggested to keep steady progress.
pub const SUGGESTED_CONTRIBUTION_SHARE: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub target: f64,
    pub current: f64,
    pub deadline: Option<DateTime<Utc>>,
    pub priority: GoalPriority,
}

/// Effect a contribution would have on a goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionPreview {
    pub new_amount: f64,
    pub progress_before: f64,
    /// Capped at 100.
    pub progress_after: f64,
}

impl SavingsGoal {
    pub fn new(title: &str, target: f64, priority: GoalPriority) -> Result<Self, SavingsError> {
        if !target.is_finite() || target <= 0.0 {
            return Err(SavingsError::InvalidTarget(target));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: None,
            target,
            current: 0.0,
            deadline: None,
            priority,
        })
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Amount still missing; zero once the target is met.
    pub fn remaining(&self) -> f64 {
        (self.target - self.current).max(0.0)
    }

    /// Percent of the target saved, uncapped. Zero for a zero target.
    pub fn progress_percentage(&self) -> f64 {
        if self.target > 0.0 {
            self.current / self.target * 100.0
        } else {
            0.0
        }
    }

    pub fn is_achieved(&self) -> bool {
        self.current >= self.target
    }

    pub fn preview_contribution(&self, amount: f64) -> ContributionPreview {
        let new_amount = self.current + amount;
        let progress_after = if self.target > 0.0 {
            (new_amount / self.target * 100.0).min(100.0)
        } else {
            0.0
        };
        ContributionPreview {
            new_amount,
            progress_before: self.progress_percentage(),
            progress_after,
        }
    }

    /// 10%, 25% and 50% of the remaining amount, rounded down.
    pub fn quick_amounts(&self) -> [f64; 3] {
        let remaining = self.remaining();
        QUICK_CONTRIBUTION_SHARES.map(|share| (remaining * share).floor())
    }

    pub fn suggested_contribution(&self) -> f64 {
        (self.remaining() * SUGGESTED_CONTRIBUTION_SHARE).floor()
    }

    pub fn contribute(&mut self, amount: f64) -> Result<ContributionPreview, SavingsError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(SavingsError::InvalidContribution(amount));
        }
        let preview = self.preview_contribution(amount);
        self.current = preview.new_amount;
        Ok(preview)
    }
}

/// Sum saved across all goals.
pub fn total_saved(goals: &[SavingsGoal]) -> f64 {
    goals.iter().map(|goal| goal.current).sum()
}
