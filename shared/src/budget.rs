//! Budget-threshold checks run after an expense is created.
//!
//! The server owns all aggregation; this module only compares already
//! computed spent/budget figures against the warning and exceeded thresholds
//! and picks which figures to trust.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::format::format_currency;
use crate::{BudgetStatus, CategoryBudgetStatus};

/// Percentages at which a category triggers an alert
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warning_pct: f64,
    pub exceeded_pct: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning_pct: 80.0,
            exceeded_pct: 100.0,
        }
    }
}

impl From<&ClientConfig> for Thresholds {
    fn from(config: &ClientConfig) -> Self {
        Self {
            warning_pct: config.warning_threshold_pct,
            exceeded_pct: config.exceeded_threshold_pct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetAlertKind {
    Warning,
    Exceeded,
}

/// Where the spend figure behind an alert came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpendSource {
    /// Budget status refetched after the mutation
    Refreshed,
    /// Pre-submission snapshot plus the newly added amount
    Projected,
}

/// A notification-worthy budget state for one category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub kind: BudgetAlertKind,
    pub category: String,
    pub budget: f64,
    pub spent: f64,
    pub percentage: f64,
    pub source: SpendSource,
}

impl BudgetAlert {
    pub fn title(&self) -> &'static str {
        match self.kind {
            BudgetAlertKind::Warning => "Budget Warning!",
            BudgetAlertKind::Exceeded => "Budget Exceeded!",
        }
    }

    pub fn body(&self) -> String {
        match self.kind {
            BudgetAlertKind::Warning => format!(
                "{}: Only {} remaining",
                self.category,
                format_currency(self.budget - self.spent)
            ),
            BudgetAlertKind::Exceeded => format!(
                "{}: Exceeded by {}",
                self.category,
                format_currency(self.spent - self.budget)
            ),
        }
    }
}

/// Compare spend against budget. Categories without a positive budget never alert.
pub fn evaluate(
    category: &str,
    spent: f64,
    budget: f64,
    thresholds: Thresholds,
    source: SpendSource,
) -> Option<BudgetAlert> {
    if budget.is_nan() || budget <= 0.0 || !spent.is_finite() {
        return None;
    }

    let percentage = spent / budget * 100.0;
    let kind = if percentage >= thresholds.exceeded_pct {
        BudgetAlertKind::Exceeded
    } else if percentage >= thresholds.warning_pct {
        BudgetAlertKind::Warning
    } else {
        return None;
    };

    Some(BudgetAlert {
        kind,
        category: category.to_string(),
        budget,
        spent,
        percentage,
        source,
    })
}

/// Result of refetching budget status once an expense has been stored
#[derive(Debug, Clone, PartialEq)]
pub enum StatusRefresh {
    Fresh(BudgetStatus),
    /// The fetch failed for a reason other than the session
    Unavailable,
    /// The server rejected the session; nothing more should happen
    SessionEnded,
}

impl From<Result<BudgetStatus, ApiError>> for StatusRefresh {
    fn from(result: Result<BudgetStatus, ApiError>) -> Self {
        match result {
            Ok(status) => StatusRefresh::Fresh(status),
            Err(e) if e.is_unauthorized() => StatusRefresh::SessionEnded,
            Err(_) => StatusRefresh::Unavailable,
        }
    }
}

/// Decide whether creating an expense of `amount` in `category` should alert.
///
/// Fresh figures already include the new expense and any concurrent changes,
/// so they win. The snapshot taken before submission is only used, with
/// `amount` added, when the refetch was unavailable. An ended session never
/// alerts.
pub fn reconcile_after_create(
    category: &str,
    amount: f64,
    snapshot: Option<&CategoryBudgetStatus>,
    refresh: &StatusRefresh,
    thresholds: Thresholds,
) -> Option<BudgetAlert> {
    match refresh {
        StatusRefresh::Fresh(status) => {
            let current = status.get(category)?;
            log::debug!(
                "budget check for {} using refreshed status: spent {} of {}",
                category,
                current.spent,
                current.budget
            );
            evaluate(category, current.spent, current.budget, thresholds, SpendSource::Refreshed)
        }
        StatusRefresh::Unavailable => {
            let previous = snapshot?;
            let projected = previous.spent + amount;
            log::warn!(
                "budget status refresh unavailable, projecting {} for {} from cached snapshot",
                projected,
                category
            );
            evaluate(category, projected, previous.budget, thresholds, SpendSource::Projected)
        }
        StatusRefresh::SessionEnded => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(budget: f64, spent: f64) -> CategoryBudgetStatus {
        CategoryBudgetStatus {
            budget,
            spent,
            remaining: Some(budget - spent),
            percentage: if budget > 0.0 { spent / budget * 100.0 } else { 0.0 },
        }
    }

    fn status_map(category: &str, budget: f64, spent: f64) -> BudgetStatus {
        let mut map = BudgetStatus::new();
        map.insert(category.to_string(), status(budget, spent));
        map
    }

    #[test]
    fn test_threshold_boundaries() {
        let t = Thresholds::default();
        assert!(evaluate("Food", 799.99, 1000.0, t, SpendSource::Refreshed).is_none());

        let warning = evaluate("Food", 800.0, 1000.0, t, SpendSource::Refreshed).unwrap();
        assert_eq!(warning.kind, BudgetAlertKind::Warning);

        let still_warning = evaluate("Food", 999.0, 1000.0, t, SpendSource::Refreshed).unwrap();
        assert_eq!(still_warning.kind, BudgetAlertKind::Warning);

        let exceeded = evaluate("Food", 1000.0, 1000.0, t, SpendSource::Refreshed).unwrap();
        assert_eq!(exceeded.kind, BudgetAlertKind::Exceeded);
    }

    #[test]
    fn test_zero_budget_never_alerts() {
        let t = Thresholds::default();
        assert!(evaluate("Gifts", 500.0, 0.0, t, SpendSource::Projected).is_none());
        assert!(evaluate("Gifts", 500.0, -10.0, t, SpendSource::Projected).is_none());
    }

    #[test]
    fn test_alert_messages() {
        let t = Thresholds::default();
        let warning = evaluate("Food", 850.0, 1000.0, t, SpendSource::Refreshed).unwrap();
        assert_eq!(warning.title(), "Budget Warning!");
        assert_eq!(warning.body(), "Food: Only ₹150.00 remaining");

        let exceeded = evaluate("Rent", 26500.0, 25000.0, t, SpendSource::Refreshed).unwrap();
        assert_eq!(exceeded.title(), "Budget Exceeded!");
        assert_eq!(exceeded.body(), "Rent: Exceeded by ₹1,500.00");
    }

    #[test]
    fn test_refreshed_status_wins_over_snapshot() {
        let t = Thresholds::default();
        // Snapshot predates a concurrent deletion; projecting would claim a warning.
        let snapshot = status(1000.0, 700.0);
        let refreshed = status_map("Food", 1000.0, 400.0);

        let alert = reconcile_after_create("Food", 150.0, Some(&snapshot), &StatusRefresh::Fresh(refreshed), t);
        assert!(alert.is_none());
    }

    #[test]
    fn test_refreshed_status_exceeded() {
        let t = Thresholds::default();
        let refreshed = status_map("Food", 1000.0, 1200.0);
        let alert = reconcile_after_create("Food", 300.0, None, &StatusRefresh::Fresh(refreshed), t).unwrap();
        assert_eq!(alert.kind, BudgetAlertKind::Exceeded);
        assert_eq!(alert.source, SpendSource::Refreshed);
        assert_eq!(alert.spent, 1200.0);
    }

    #[test]
    fn test_snapshot_projection_when_refresh_failed() {
        let t = Thresholds::default();
        let snapshot = status(1000.0, 700.0);

        let alert = reconcile_after_create("Food", 150.0, Some(&snapshot), &StatusRefresh::Unavailable, t).unwrap();
        assert_eq!(alert.kind, BudgetAlertKind::Warning);
        assert_eq!(alert.source, SpendSource::Projected);
        assert_eq!(alert.spent, 850.0);

        let exceeded = reconcile_after_create("Food", 300.0, Some(&snapshot), &StatusRefresh::Unavailable, t).unwrap();
        assert_eq!(exceeded.kind, BudgetAlertKind::Exceeded);

        assert!(reconcile_after_create("Food", 50.0, Some(&snapshot), &StatusRefresh::Unavailable, t).is_none());
    }

    #[test]
    fn test_category_without_budget_is_ignored() {
        let t = Thresholds::default();
        let refreshed = status_map("Food", 1000.0, 1200.0);
        assert!(reconcile_after_create("Travel", 5000.0, None, &StatusRefresh::Fresh(refreshed), t).is_none());
        assert!(reconcile_after_create("Travel", 5000.0, None, &StatusRefresh::Unavailable, t).is_none());
    }

    #[test]
    fn test_rejected_session_never_falls_back_to_snapshot() {
        let t = Thresholds::default();
        let snapshot = status(1000.0, 950.0);

        let refresh = StatusRefresh::from(Err(ApiError::Unauthorized));
        assert_eq!(refresh, StatusRefresh::SessionEnded);
        assert!(reconcile_after_create("Food", 500.0, Some(&snapshot), &refresh, t).is_none());

        let refresh = StatusRefresh::from(Err(ApiError::Network("offline".to_string())));
        assert_eq!(refresh, StatusRefresh::Unavailable);
        assert!(reconcile_after_create("Food", 500.0, Some(&snapshot), &refresh, t).is_some());
    }

    #[test]
    fn test_thresholds_from_config() {
        let config = ClientConfig {
            warning_threshold_pct: 70.0,
            ..ClientConfig::default()
        };
        let t = Thresholds::from(&config);
        assert_eq!(t.warning_pct, 70.0);
        assert_eq!(t.exceeded_pct, 100.0);
        let alert = evaluate("Food", 720.0, 1000.0, t, SpendSource::Refreshed).unwrap();
        assert_eq!(alert.kind, BudgetAlertKind::Warning);
    }
}
