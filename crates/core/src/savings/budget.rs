//! Monthly budget allocation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::savings_errors::SavingsError;

/// Recommended share of income per category, in percent.
pub const RECOMMENDED_SPLIT: &[(&str, u32)] = &[
    ("Housing", 30),
    ("Food", 20),
    ("Transport", 10),
    ("Savings", 20),
    ("Entertainment", 8),
    ("Utilities", 6),
    ("Emergencies", 6),
];

/// Categories a custom budget starts with, all unallocated.
pub const CUSTOM_STARTER_CATEGORIES: &[&str] = &["Housing", "Food", "Transport", "Savings"];

/// Name given to categories added without one
pub const NEW_CATEGORY_NAME: &str = "New category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetKind {
    /// Amounts follow [`RECOMMENDED_SPLIT`] and track income changes.
    Recommended,
    /// Amounts are set by hand.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub id: String,
    pub name: String,
    pub amount: f64,
    /// Whole percent of monthly income.
    pub percentage: u32,
}

impl BudgetCategory {
    fn new(name: &str, amount: f64, percentage: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            amount,
            percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub kind: BudgetKind,
    pub monthly_income: f64,
    pub categories: Vec<BudgetCategory>,
}

fn validate_income(income: f64) -> Result<(), SavingsError> {
    if income.is_finite() && income > 0.0 {
        Ok(())
    } else {
        Err(SavingsError::InvalidIncome(income))
    }
}

/// `amount` as a whole percentage of `income`.
fn share_of(amount: f64, income: f64) -> u32 {
    (amount / income * 100.0).round().max(0.0) as u32
}

fn recommended_categories(income: f64) -> Vec<BudgetCategory> {
    RECOMMENDED_SPLIT
        .iter()
        .map(|(name, percent)| {
            BudgetCategory::new(name, (income * f64::from(*percent) / 100.0).round(), *percent)
        })
        .collect()
}

impl Budget {
    /// Splits `income` across the recommended categories, rounded to whole units.
    pub fn recommended(income: f64) -> Result<Self, SavingsError> {
        validate_income(income)?;
        Ok(Self {
            kind: BudgetKind::Recommended,
            monthly_income: income,
            categories: recommended_categories(income),
        })
    }

    /// An empty hand-made budget with the starter categories.
    pub fn custom(income: f64) -> Result<Self, SavingsError> {
        validate_income(income)?;
        Ok(Self {
            kind: BudgetKind::Custom,
            monthly_income: income,
            categories: CUSTOM_STARTER_CATEGORIES
                .iter()
                .map(|name| BudgetCategory::new(name, 0.0, 0))
                .collect(),
        })
    }

    /// Changes the monthly income. Recommended budgets are re-split;
    /// custom budgets keep their amounts and update their percentages.
    pub fn set_income(&mut self, income: f64) -> Result<(), SavingsError> {
        validate_income(income)?;
        self.monthly_income = income;
        match self.kind {
            BudgetKind::Recommended => self.categories = recommended_categories(income),
            BudgetKind::Custom => {
                for category in &mut self.categories {
                    category.percentage = share_of(category.amount, income);
                }
            }
        }
        Ok(())
    }

    pub fn set_category_amount(&mut self, id: &str, amount: f64) -> Result<(), SavingsError> {
        let income = self.monthly_income;
        let category = self
            .categories
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or_else(|| SavingsError::CategoryNotFound(id.to_string()))?;
        category.amount = amount;
        category.percentage = share_of(amount, income);
        Ok(())
    }

    pub fn rename_category(&mut self, id: &str, name: &str) -> Result<(), SavingsError> {
        let category = self
            .categories
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or_else(|| SavingsError::CategoryNotFound(id.to_string()))?;
        category.name = name.to_string();
        Ok(())
    }

    /// Appends an unallocated category and returns its id.
    pub fn add_category(&mut self, name: Option<&str>) -> String {
        let category = BudgetCategory::new(name.unwrap_or(NEW_CATEGORY_NAME), 0.0, 0);
        let id = category.id.clone();
        self.categories.push(category);
        id
    }

    pub fn remove_category(&mut self, id: &str) -> Result<BudgetCategory, SavingsError> {
        let index = self
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| SavingsError::CategoryNotFound(id.to_string()))?;
        Ok(self.categories.remove(index))
    }

    pub fn total_allocated(&self) -> f64 {
        self.categories.iter().map(|category| category.amount).sum()
    }

    /// Income not yet allocated; negative when over budget.
    pub fn remaining(&self) -> f64 {
        self.monthly_income - self.total_allocated()
    }

    pub fn allocated_percentage(&self) -> u32 {
        share_of(self.total_allocated(), self.monthly_income)
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining() < 0.0
    }
}
