use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod budget;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
pub mod schedule;
pub mod session;

pub use budget::{BudgetAlert, BudgetAlertKind};
pub use config::{ClientConfig, Endpoint};
pub use error::{ApiError, FormError};
pub use session::{NotificationPermission, Screen, StoredSession};

/// Category name -> amount, ordered by name for stable rendering
pub type CategoryAmounts = BTreeMap<String, f64>;

/// Credentials posted to the login and register endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Generic acknowledgement returned by mutating endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    /// Present only when an expense was created
    #[serde(default)]
    pub id: Option<String>,
}

/// Error body the backend attaches to non-2xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// An expense as returned by `GET /api/expenses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    /// Payment date (YYYY-MM-DD)
    #[serde(default)]
    pub payment_date: String,
    /// Creation timestamp (ISO 8601, usually without offset)
    pub created_at: String,
}

/// Body for creating or updating an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRequest {
    pub category: String,
    pub amount: f64,
    pub description: String,
    /// Empty string lets the server default to today
    pub payment_date: String,
}

/// Body for creating a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

/// All-time totals from `GET /api/expenses/summary`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub total: f64,
    #[serde(default)]
    pub categories: CategoryAmounts,
}

impl ExpenseSummary {
    /// Amount spent in a category, zero when the category has no expenses
    pub fn spent_in(&self, category: &str) -> f64 {
        self.categories.get(category).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// Month key (YYYY-MM)
    pub month: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub total: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// Day (YYYY-MM-DD)
    pub date: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopExpense {
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub payment_date: Option<String>,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub date: Option<String>,
}

/// Server-computed aggregates from `GET /api/expenses/analytics`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub monthly_trends: Vec<MonthlyTrend>,
    #[serde(default)]
    pub category_breakdown: Vec<CategoryBreakdown>,
    #[serde(default)]
    pub recent_activity: Vec<DailyActivity>,
    #[serde(default)]
    pub top_expenses: Vec<TopExpense>,
}

/// Declared income and per-category targets for one month
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyPlan {
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub budgets: CategoryAmounts,
    #[serde(default)]
    pub total_planned: Option<f64>,
}

impl MonthlyPlan {
    /// A plan without income or without any category budget still needs setting
    pub fn is_missing(&self) -> bool {
        self.income == 0.0 || self.budgets.is_empty()
    }

    pub fn total_planned(&self) -> f64 {
        self.total_planned
            .unwrap_or_else(|| self.budgets.values().sum())
    }
}

/// Body for `POST /api/budget/monthly-plan`; replaces the month's plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPlanRequest {
    /// Month key (YYYY-MM)
    pub month: String,
    pub income: f64,
    pub budgets: CategoryAmounts,
}

/// Spent versus budget for one category in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBudgetStatus {
    pub budget: f64,
    pub spent: f64,
    #[serde(default)]
    pub remaining: Option<f64>,
    pub percentage: f64,
}

impl CategoryBudgetStatus {
    pub fn is_over_budget(&self, spent: f64) -> bool {
        spent > self.budget
    }

    /// Width of the progress bar, clamped to a full bar
    pub fn progress_width(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }
}

/// Per-category budget status for a month, keyed by category name
pub type BudgetStatus = BTreeMap<String, CategoryBudgetStatus>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_deserializes_server_payload() {
        let json = r#"{
            "id": "665f1c",
            "category": "Food",
            "amount": 250.5,
            "description": "Lunch",
            "user_id": "abc",
            "payment_date": "2024-06-03",
            "created_at": "2024-06-03T12:30:00.123456"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount, 250.5);
        assert_eq!(expense.payment_date, "2024-06-03");
    }

    #[test]
    fn test_expense_tolerates_missing_optional_fields() {
        let json = r#"{"id": "1", "category": "Rent", "amount": 100, "created_at": "2024-01-01T00:00:00"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.description, "");
        assert_eq!(expense.payment_date, "");
    }

    #[test]
    fn test_monthly_plan_missing_detection() {
        let empty: MonthlyPlan =
            serde_json::from_str(r#"{"income": 0, "budgets": {}, "total_planned": 0}"#).unwrap();
        assert!(empty.is_missing());

        let no_budgets = MonthlyPlan {
            income: 50000.0,
            ..MonthlyPlan::default()
        };
        assert!(no_budgets.is_missing());

        let mut budgets = CategoryAmounts::new();
        budgets.insert("Food".to_string(), 8000.0);
        let complete = MonthlyPlan {
            income: 50000.0,
            budgets,
            total_planned: None,
        };
        assert!(!complete.is_missing());
        assert_eq!(complete.total_planned(), 8000.0);
    }

    #[test]
    fn test_budget_status_map_deserializes() {
        let json = r#"{
            "Food": {"budget": 1000, "spent": 850, "remaining": 150, "percentage": 85.0},
            "Travel": {"budget": 0, "spent": 20, "remaining": -20, "percentage": 0}
        }"#;
        let status: BudgetStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.len(), 2);
        assert_eq!(status["Food"].percentage, 85.0);
        assert!(status["Travel"].is_over_budget(status["Travel"].spent));
    }

    #[test]
    fn test_progress_width_is_clamped() {
        let status = CategoryBudgetStatus {
            budget: 100.0,
            spent: 250.0,
            remaining: Some(-150.0),
            percentage: 250.0,
        };
        assert_eq!(status.progress_width(), 100.0);
    }

    #[test]
    fn test_analytics_deserializes_partial_payload() {
        let json = r#"{
            "monthly_trends": [{"month": "2024-06", "total": 1200.0}],
            "category_breakdown": [{"category": "Food", "total": 1200.0, "count": 3}],
            "recent_activity": [],
            "top_expenses": [{"category": "Food", "amount": 600.0, "description": "Dinner", "payment_date": "2024-06-02", "date": "2024-06-02T20:00:00"}]
        }"#;
        let analytics: Analytics = serde_json::from_str(json).unwrap();
        assert_eq!(analytics.monthly_trends[0].month, "2024-06");
        assert_eq!(analytics.category_breakdown[0].count, 3);
        assert_eq!(analytics.top_expenses[0].description, "Dinner");
    }

    #[test]
    fn test_summary_spent_in_unknown_category_is_zero() {
        let summary = ExpenseSummary::default();
        assert_eq!(summary.spent_in("Food"), 0.0);
    }
}
