//! Form state for the auth, expense, category and monthly-plan forms.
//!
//! Inputs are kept as the raw strings the user typed; conversion to request
//! bodies happens on submit so validation errors can be shown inline.

use std::collections::BTreeMap;

use crate::error::FormError;
use crate::format::{format_currency, input_date, parse_date};
use crate::{
    AuthRequest, CategoryAmounts, CategoryRequest, Expense, ExpenseRequest, MonthlyPlan,
    MonthlyPlanRequest,
};

/// Parse a user-typed amount, rejecting blanks, NaN and infinities
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    /// Prompt shown next to the mode switch link
    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account?",
            AuthMode::Register => "Already have an account?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthForm {
    pub username: String,
    pub password: String,
}

impl AuthForm {
    pub fn to_request(&self) -> Result<AuthRequest, FormError> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        Ok(AuthRequest {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// What submitting the expense form should do
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseSubmission {
    Create(ExpenseRequest),
    Update { id: String, request: ExpenseRequest },
}

/// The single expense form, used for both adding and editing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseForm {
    pub category: String,
    pub amount: String,
    pub description: String,
    /// YYYY-MM-DD, empty for "today"
    pub payment_date: String,
    pub editing_id: Option<String>,
}

impl ExpenseForm {
    pub fn new(categories: &[String]) -> Self {
        Self {
            category: categories.first().cloned().unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Pick the first category once categories load, keeping any existing choice
    pub fn ensure_category(&mut self, categories: &[String]) {
        if self.category.is_empty() {
            if let Some(first) = categories.first() {
                self.category = first.clone();
            }
        }
    }

    /// Enter edit mode pre-filled from an existing expense
    pub fn begin_edit(&mut self, expense: &Expense) {
        self.editing_id = Some(expense.id.clone());
        self.category = expense.category.clone();
        self.amount = expense.amount.to_string();
        self.description = expense.description.clone();
        // Date inputs only accept YYYY-MM-DD
        self.payment_date = parse_date(&expense.payment_date)
            .map(input_date)
            .unwrap_or_else(|| expense.payment_date.clone());
    }

    /// Leave edit mode and clear the fields; nothing is sent to the server
    pub fn reset(&mut self, categories: &[String]) {
        *self = Self::new(categories);
    }

    pub fn to_request(&self) -> Result<ExpenseRequest, FormError> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(FormError::MissingCategory);
        }
        let amount = parse_amount(&self.amount).ok_or(FormError::InvalidAmount)?;
        if amount <= 0.0 {
            return Err(FormError::AmountNotPositive);
        }

        Ok(ExpenseRequest {
            category: category.to_string(),
            amount,
            description: self.description.trim().to_string(),
            payment_date: self.payment_date.trim().to_string(),
        })
    }

    pub fn submission(&self) -> Result<ExpenseSubmission, FormError> {
        let request = self.to_request()?;
        Ok(match &self.editing_id {
            Some(id) => ExpenseSubmission::Update {
                id: id.clone(),
                request,
            },
            None => ExpenseSubmission::Create(request),
        })
    }
}

pub fn category_request(name: &str) -> Result<CategoryRequest, FormError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FormError::EmptyCategoryName);
    }
    Ok(CategoryRequest {
        name: name.to_string(),
    })
}

/// A validated plan ready to post, plus the non-blocking over-income warning
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSubmission {
    pub request: MonthlyPlanRequest,
    pub total_planned: f64,
    pub over_income_warning: Option<String>,
}

/// Income and per-category planned amounts as typed in the plan editor
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanForm {
    pub income: String,
    pub budgets: BTreeMap<String, String>,
}

impl PlanForm {
    /// Pre-fill the editor from the month's current plan
    pub fn from_plan(plan: &MonthlyPlan) -> Self {
        if plan.is_missing() {
            return Self::default();
        }
        Self {
            income: plan.income.to_string(),
            budgets: plan
                .budgets
                .iter()
                .map(|(category, amount)| (category.clone(), amount.to_string()))
                .collect(),
        }
    }

    pub fn set_budget(&mut self, category: &str, value: String) {
        self.budgets.insert(category.to_string(), value);
    }

    pub fn budget_input(&self, category: &str) -> String {
        self.budgets.get(category).cloned().unwrap_or_default()
    }

    pub fn income_value(&self) -> f64 {
        parse_amount(&self.income).unwrap_or(0.0)
    }

    pub fn planned_amount(&self, category: &str) -> f64 {
        self.budgets
            .get(category)
            .and_then(|value| parse_amount(value))
            .unwrap_or(0.0)
    }

    /// Sum of the planned amounts for `categories`; inputs for categories
    /// outside the list are not counted.
    pub fn total_planned(&self, categories: &[String]) -> f64 {
        categories
            .iter()
            .map(|category| self.planned_amount(category))
            .sum()
    }

    pub fn expected_savings(&self, categories: &[String]) -> f64 {
        self.income_value() - self.total_planned(categories)
    }

    /// Build the plan for `month` covering every category. Exceeding income
    /// produces a warning but does not block the submission.
    pub fn to_submission(
        &self,
        month: &str,
        categories: &[String],
    ) -> Result<PlanSubmission, FormError> {
        let income = parse_amount(&self.income).ok_or(FormError::InvalidIncome)?;

        let budgets: CategoryAmounts = categories
            .iter()
            .map(|category| (category.clone(), self.planned_amount(category)))
            .collect();
        let total_planned = self.total_planned(categories);

        let over_income_warning = (total_planned > income).then(|| {
            format!(
                "Warning: Total planned expenditure ({}) exceeds income ({})!",
                format_currency(total_planned),
                format_currency(income)
            )
        });

        Ok(PlanSubmission {
            request: MonthlyPlanRequest {
                month: month.to_string(),
                income,
                budgets,
            },
            total_planned,
            over_income_warning,
        })
    }
}
