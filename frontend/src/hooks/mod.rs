pub mod use_budget;
pub mod use_expense_form;
pub mod use_expenses;
pub mod use_notification_permission;
pub mod use_periodic_refresh;
pub mod use_plan_reminder;
pub mod use_session;
