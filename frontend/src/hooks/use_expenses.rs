use shared::forms::category_request;
use shared::{Analytics, Expense, ExpenseSummary};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::{report_failure, ApiClient};
use crate::services::logging::Logger;

const COMPONENT: &str = "expenses";

#[derive(Clone, PartialEq)]
pub struct ExpenseState {
    pub expenses: Vec<Expense>,
    pub categories: Vec<String>,
    pub summary: ExpenseSummary,
    pub analytics: Option<Analytics>,
    pub loading: bool,

    // Add category form state
    pub new_category: String,
    pub category_error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseExpensesActions {
    pub refresh_categories: Callback<()>,
    /// Reload the list, the summary and the analytics
    pub refresh_expenses: Callback<()>,
    pub on_new_category_change: Callback<String>,
    pub add_category: Callback<()>,
    pub delete_expense: Callback<String>,
}

pub struct UseExpensesResult {
    pub state: ExpenseState,
    pub actions: UseExpensesActions,
}

/// Expense list, categories, summary and analytics for the signed-in user.
///
/// `on_mutation` runs after a successful delete so dependent views (budget
/// status) can reload; `on_unauthorized` after any 401.
#[hook]
pub fn use_expenses(
    api_client: &ApiClient,
    on_mutation: Callback<()>,
    on_unauthorized: Callback<()>,
) -> UseExpensesResult {
    let expenses = use_state(Vec::<Expense>::new);
    let categories = use_state(Vec::<String>::new);
    let summary = use_state(ExpenseSummary::default);
    let analytics = use_state(|| Option::<Analytics>::None);
    let loading = use_state(|| true);
    let new_category = use_state(String::new);
    let category_error = use_state(|| None::<String>);

    let refresh_categories = {
        let api_client = api_client.clone();
        let categories = categories.clone();
        let on_unauthorized = on_unauthorized.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let categories = categories.clone();
            let on_unauthorized = on_unauthorized.clone();

            spawn_local(async move {
                match api_client.get_categories().await {
                    Ok(data) => categories.set(data),
                    Err(e) => report_failure(COMPONENT, "fetch categories", &e, &on_unauthorized),
                }
            });
        })
    };

    // The three reads are independent; one failing leaves the others' cached values alone
    let refresh_expenses = {
        let api_client = api_client.clone();
        let expenses = expenses.clone();
        let summary = summary.clone();
        let analytics = analytics.clone();
        let loading = loading.clone();
        let on_unauthorized = on_unauthorized.clone();

        Callback::from(move |_| {
            {
                let api_client = api_client.clone();
                let expenses = expenses.clone();
                let loading = loading.clone();
                let on_unauthorized = on_unauthorized.clone();
                spawn_local(async move {
                    loading.set(true);
                    match api_client.get_expenses().await {
                        Ok(data) => expenses.set(data),
                        Err(e) => report_failure(COMPONENT, "fetch expenses", &e, &on_unauthorized),
                    }
                    loading.set(false);
                });
            }
            {
                let api_client = api_client.clone();
                let summary = summary.clone();
                let on_unauthorized = on_unauthorized.clone();
                spawn_local(async move {
                    match api_client.get_summary().await {
                        Ok(data) => summary.set(data),
                        Err(e) => report_failure(COMPONENT, "fetch summary", &e, &on_unauthorized),
                    }
                });
            }
            {
                let api_client = api_client.clone();
                let analytics = analytics.clone();
                let on_unauthorized = on_unauthorized.clone();
                spawn_local(async move {
                    match api_client.get_analytics().await {
                        Ok(data) => analytics.set(Some(data)),
                        Err(e) => report_failure(COMPONENT, "fetch analytics", &e, &on_unauthorized),
                    }
                });
            }
        })
    };

    let on_new_category_change = {
        let new_category = new_category.clone();
        let category_error = category_error.clone();
        Callback::from(move |value: String| {
            category_error.set(None);
            new_category.set(value);
        })
    };

    let add_category = {
        let api_client = api_client.clone();
        let new_category = new_category.clone();
        let category_error = category_error.clone();
        let refresh_categories = refresh_categories.clone();
        let on_unauthorized = on_unauthorized.clone();

        Callback::from(move |_| {
            // Blank names are ignored without contacting the server
            let request = match category_request(&new_category) {
                Ok(request) => request,
                Err(_) => return,
            };

            let api_client = api_client.clone();
            let new_category = new_category.clone();
            let category_error = category_error.clone();
            let refresh_categories = refresh_categories.clone();
            let on_unauthorized = on_unauthorized.clone();

            spawn_local(async move {
                match api_client.create_category(&request).await {
                    Ok(_) => {
                        Logger::info_with_component(COMPONENT, &format!("Added category '{}'", request.name));
                        new_category.set(String::new());
                        refresh_categories.emit(());
                    }
                    Err(e) => {
                        report_failure(COMPONENT, "add category", &e, &on_unauthorized);
                        if !e.is_unauthorized() {
                            category_error.set(Some(e.user_message()));
                        }
                    }
                }
            });
        })
    };

    let delete_expense = {
        let api_client = api_client.clone();
        let refresh_expenses = refresh_expenses.clone();
        let on_mutation = on_mutation.clone();
        let on_unauthorized = on_unauthorized.clone();

        Callback::from(move |id: String| {
            if !gloo::dialogs::confirm("Are you sure you want to delete this expense?") {
                return;
            }

            let api_client = api_client.clone();
            let refresh_expenses = refresh_expenses.clone();
            let on_mutation = on_mutation.clone();
            let on_unauthorized = on_unauthorized.clone();

            spawn_local(async move {
                match api_client.delete_expense(&id).await {
                    Ok(_) => {
                        Logger::info_with_component(COMPONENT, &format!("Deleted expense {}", id));
                        refresh_expenses.emit(());
                        on_mutation.emit(());
                    }
                    Err(e) => report_failure(COMPONENT, "delete expense", &e, &on_unauthorized),
                }
            });
        })
    };

    let state = ExpenseState {
        expenses: (*expenses).clone(),
        categories: (*categories).clone(),
        summary: (*summary).clone(),
        analytics: (*analytics).clone(),
        loading: *loading,
        new_category: (*new_category).clone(),
        category_error: (*category_error).clone(),
    };

    let actions = UseExpensesActions {
        refresh_categories,
        refresh_expenses,
        on_new_category_change,
        add_category,
        delete_expense,
    };

    UseExpensesResult { state, actions }
}
