use shared::budget::{reconcile_after_create, StatusRefresh, Thresholds};
use shared::forms::{ExpenseForm, ExpenseSubmission};
use shared::schedule::NotificationContent;
use shared::{BudgetStatus, Expense};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::{report_failure, ApiClient};
use crate::services::date_utils::current_month_key;
use crate::services::logging::Logger;
use crate::services::notifications;

const COMPONENT: &str = "expense-form";

#[derive(Clone, PartialEq)]
pub struct ExpenseFormState {
    pub form: ExpenseForm,
    pub error: Option<String>,
    pub submitting: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseExpenseFormActions {
    pub on_category_change: Callback<String>,
    pub on_amount_change: Callback<String>,
    pub on_description_change: Callback<String>,
    pub on_date_change: Callback<String>,
    pub submit: Callback<()>,
    pub begin_edit: Callback<Expense>,
    pub cancel: Callback<()>,
}

pub struct UseExpenseFormResult {
    pub state: ExpenseFormState,
    pub actions: UseExpenseFormActions,
}

/// What the expense form needs from the rest of the main screen
#[derive(Clone, PartialEq)]
pub struct ExpenseFormContext {
    pub categories: Vec<String>,
    /// Budget status as displayed when the form is submitted
    pub status: BudgetStatus,
    pub thresholds: Thresholds,
    /// Runs after any successful create or update
    pub on_saved: Callback<()>,
    pub on_status_refreshed: Callback<BudgetStatus>,
    pub on_unauthorized: Callback<()>,
}

/// Add/edit form for a single expense.
///
/// After a create, the category's budget is checked against the thresholds
/// and a browser notification is shown when it is at or over the warning
/// level. Updates refresh the data but never alert.
#[hook]
pub fn use_expense_form(api_client: &ApiClient, context: ExpenseFormContext) -> UseExpenseFormResult {
    let form = use_state(ExpenseForm::default);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    // Default the category once the list arrives
    {
        let form = form.clone();
        use_effect_with(context.categories.clone(), move |categories| {
            if form.category.is_empty() && !categories.is_empty() {
                let mut next = (*form).clone();
                next.ensure_category(categories);
                form.set(next);
            }
            || ()
        });
    }

    let update_field = |apply: fn(&mut ExpenseForm, String)| {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            error.set(None);
            form.set(next);
        })
    };

    let on_category_change = update_field(|form, value| form.category = value);
    let on_amount_change = update_field(|form, value| form.amount = value);
    let on_description_change = update_field(|form, value| form.description = value);
    let on_date_change = update_field(|form, value| form.payment_date = value);

    let submit = {
        let api_client = api_client.clone();
        let form = form.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let context = context.clone();

        Callback::from(move |_| {
            let submission = match form.submission() {
                Ok(submission) => submission,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            let api_client = api_client.clone();
            let form = form.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let context = context.clone();

            spawn_local(async move {
                submitting.set(true);
                error.set(None);

                let result = match &submission {
                    ExpenseSubmission::Create(request) => api_client.create_expense(request).await,
                    ExpenseSubmission::Update { id, request } => {
                        api_client.update_expense(id, request).await
                    }
                };

                match result {
                    Ok(_) => {
                        form.set(ExpenseForm::new(&context.categories));
                        context.on_saved.emit(());

                        let fetched = api_client.get_budget_status(&current_month_key()).await;
                        match &fetched {
                            Ok(status) => context.on_status_refreshed.emit(status.clone()),
                            Err(e) => {
                                report_failure(COMPONENT, "refresh budget status", e, &context.on_unauthorized)
                            }
                        }
                        let refresh = StatusRefresh::from(fetched);

                        if let ExpenseSubmission::Create(request) = &submission {
                            let alert = reconcile_after_create(
                                &request.category,
                                request.amount,
                                context.status.get(&request.category),
                                &refresh,
                                context.thresholds,
                            );
                            if let Some(alert) = alert {
                                Logger::info_with_component(
                                    COMPONENT,
                                    &format!("{} at {:.0}% of budget", alert.category, alert.percentage),
                                );
                                notifications::notify(&NotificationContent::from(&alert));
                            }
                        }
                    }
                    Err(e) => {
                        report_failure(COMPONENT, "save expense", &e, &context.on_unauthorized);
                        if !e.is_unauthorized() {
                            error.set(Some(e.user_message()));
                        }
                    }
                }

                submitting.set(false);
            });
        })
    };

    let begin_edit = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |expense: Expense| {
            let mut next = (*form).clone();
            next.begin_edit(&expense);
            error.set(None);
            form.set(next);
        })
    };

    let cancel = {
        let form = form.clone();
        let error = error.clone();
        let categories = context.categories.clone();
        Callback::from(move |_| {
            error.set(None);
            form.set(ExpenseForm::new(&categories));
        })
    };

    let state = ExpenseFormState {
        form: (*form).clone(),
        error: (*error).clone(),
        submitting: *submitting,
    };

    let actions = UseExpenseFormActions {
        on_category_change,
        on_amount_change,
        on_description_change,
        on_date_change,
        submit,
        begin_edit,
        cancel,
    };

    UseExpenseFormResult { state, actions }
}
