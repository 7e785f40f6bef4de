//! Budget risk classification

use crate::models::Budget;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spend ratio below which the budget is comfortable
pub const LOW_RISK_CEILING: f64 = 0.85;
/// Spend ratio above which the budget is exceeded
pub const MEDIUM_RISK_CEILING: f64 = 1.0;

/// Budget risk buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetRisk {
    /// ratio < 0.85
    Low,
    /// 0.85 <= ratio <= 1.0
    Medium,
    /// ratio > 1.0
    High,
}

impl BudgetRisk {
    /// Classify a spend ratio (total / budget)
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < LOW_RISK_CEILING {
            BudgetRisk::Low
        } else if ratio <= MEDIUM_RISK_CEILING {
            BudgetRisk::Medium
        } else {
            BudgetRisk::High
        }
    }

    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            BudgetRisk::Low => "🟢",
            BudgetRisk::Medium => "🟡",
            BudgetRisk::High => "🔴",
        }
    }
}

/// Ratio of a trip total to the budget
#[must_use]
pub fn spend_ratio(total: f64, budget: Budget) -> f64 {
    total / budget.amount()
}

/// Classify the risk of spending `total` against `budget`
#[must_use]
pub fn budget_risk(total: f64, budget: Budget) -> BudgetRisk {
    BudgetRisk::from_ratio(spend_ratio(total, budget))
}

impl fmt::Display for BudgetRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetRisk::Low => write!(f, "LOW"),
            BudgetRisk::Medium => write!(f, "MEDIUM"),
            BudgetRisk::High => write!(f, "HIGH"),
        }
    }
}
