//! Savings module - budgets, challenges and goals.

mod budget;
mod challenge;
mod goals;
mod savings_errors;

pub use budget::{
    Budget, BudgetCategory, BudgetKind, CUSTOM_STARTER_CATEGORIES, NEW_CATEGORY_NAME,
    RECOMMENDED_SPLIT,
};
pub use challenge::{ChallengeCadence, SavingsChallenge};
pub use goals::{
    total_saved, ContributionPreview, GoalPriority, SavingsGoal, QUICK_CONTRIBUTION_SHARES,
    SUGGESTED_CONTRIBUTION_SHARE,
};
pub use savings_errors::SavingsError;
