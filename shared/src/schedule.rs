//! When the client nags about the monthly plan, and what its notifications say.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::budget::BudgetAlert;
use crate::config::ClientConfig;
use crate::format::format_currency;
use crate::MonthlyPlan;

pub const PLAN_REMINDER_TAG: &str = "monthly-plan";

/// Text and options of one browser notification
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub tag: Option<String>,
    pub require_interaction: bool,
}

impl NotificationContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tag: None,
            require_interaction: false,
        }
    }

    pub fn plan_reminder() -> Self {
        Self {
            title: "Monthly Planning Time!".to_string(),
            body: "Set your income and expenditure plan for this month".to_string(),
            tag: Some(PLAN_REMINDER_TAG.to_string()),
            require_interaction: true,
        }
    }

    pub fn plan_saved(income: f64, total_planned: f64) -> Self {
        Self::new(
            "Monthly Plan Set!",
            format!(
                "Income: {}, Total Budget: {}",
                format_currency(income),
                format_currency(total_planned)
            ),
        )
    }
}

impl From<&BudgetAlert> for NotificationContent {
    fn from(alert: &BudgetAlert) -> Self {
        Self::new(alert.title(), alert.body())
    }
}

/// Day of month and hour at which the plan reminder is due
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReminderWindow {
    pub day: u32,
    pub hour: u32,
}

impl Default for ReminderWindow {
    fn default() -> Self {
        Self { day: 1, hour: 9 }
    }
}

impl From<&ClientConfig> for ReminderWindow {
    fn from(config: &ClientConfig) -> Self {
        Self {
            day: config.reminder_day,
            hour: config.reminder_hour,
        }
    }
}

impl ReminderWindow {
    /// Checked by the hourly timer: right day, right hour
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        self.is_reminder_day(now.date()) && now.hour() == self.hour
    }

    /// Checked once when the main screen opens, at any hour
    pub fn is_reminder_day(&self, today: NaiveDate) -> bool {
        today.day() == self.day
    }
}

/// Whether a reminder should fire for the plan the server returned.
/// A failed fetch counts as a missing plan.
pub fn plan_needs_reminder(plan: Option<&MonthlyPlan>) -> bool {
    plan.map_or(true, MonthlyPlan::is_missing)
}
