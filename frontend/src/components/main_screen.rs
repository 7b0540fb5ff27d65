use shared::budget::Thresholds;
use shared::schedule::ReminderWindow;
use shared::ClientConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::dashboard::Dashboard;
use super::expense_list::ExpenseList;
use super::forms::category_form::CategoryForm;
use super::forms::expense_form::ExpenseForm;
use super::header::Header;
use super::plan_modal::PlanModal;
use super::summary_cards::SummaryCards;
use crate::hooks::use_budget::use_budget;
use crate::hooks::use_expense_form::{use_expense_form, ExpenseFormContext};
use crate::hooks::use_expenses::use_expenses;
use crate::hooks::use_periodic_refresh::{use_periodic_refresh, PeriodicRefreshConfig};
use crate::hooks::use_plan_reminder::use_plan_reminder;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct MainScreenProps {
    pub api_client: ApiClient,
    pub config: ClientConfig,
    pub notifications_granted: bool,
    pub on_enable_notifications: Callback<()>,
    pub on_logout: Callback<()>,
}

/// Everything behind the login and permission gates. All cached data lives in
/// hooks owned here, so unmounting on logout discards it and stops the timers.
#[function_component(MainScreen)]
pub fn main_screen(props: &MainScreenProps) -> Html {
    let api_client = &props.api_client;
    let on_unauthorized = props.on_logout.clone();
    let show_dashboard = use_state(|| false);

    let budget = use_budget(api_client, on_unauthorized.clone());
    let expenses = use_expenses(
        api_client,
        budget.actions.refresh.clone(),
        on_unauthorized.clone(),
    );
    let expense_form = use_expense_form(
        api_client,
        ExpenseFormContext {
            categories: expenses.state.categories.clone(),
            status: budget.state.status.clone(),
            thresholds: Thresholds::from(&props.config),
            on_saved: expenses.actions.refresh_expenses.clone(),
            on_status_refreshed: budget.actions.set_status.clone(),
            on_unauthorized: on_unauthorized.clone(),
        },
    );

    use_plan_reminder(
        api_client,
        ReminderWindow::from(&props.config),
        props.config.plan_check_interval_ms,
        props.notifications_granted,
        budget.actions.open_plan.clone(),
        on_unauthorized,
    );

    // Keep the backend awake; failures are expected while it spins up
    let keep_alive = {
        let api_client = api_client.clone();
        Callback::from(move |_| {
            let api_client = api_client.clone();
            spawn_local(async move {
                if let Err(e) = api_client.health_check().await {
                    Logger::debug_with_component("keep-alive", &format!("Health check failed: {}", e));
                }
            });
        })
    };
    use_periodic_refresh(
        PeriodicRefreshConfig {
            interval_ms: props.config.keep_alive_interval_ms,
            run_immediately: false,
        },
        keep_alive,
        false,
    );

    // Initial load
    {
        let refresh_categories = expenses.actions.refresh_categories.clone();
        let refresh_expenses = expenses.actions.refresh_expenses.clone();
        let refresh_budget = budget.actions.refresh.clone();
        use_effect_with(api_client.clone(), move |_| {
            Logger::info_with_component("main-screen", "Loading expense data");
            refresh_categories.emit(());
            refresh_expenses.emit(());
            refresh_budget.emit(());
            || ()
        });
    }

    let on_toggle_dashboard = {
        let show_dashboard = show_dashboard.clone();
        Callback::from(move |_| show_dashboard.set(!*show_dashboard))
    };

    let income = budget.state.plan.as_ref().map_or(0.0, |plan| plan.income);

    html! {
        <div class="app">
            <div class="container">
                <Header
                    notifications_granted={props.notifications_granted}
                    show_dashboard={*show_dashboard}
                    on_open_plan={budget.actions.open_plan.clone()}
                    on_enable_notifications={props.on_enable_notifications.clone()}
                    on_logout={props.on_logout.clone()}
                    {on_toggle_dashboard}
                />

                {match (&expenses.state.analytics, *show_dashboard) {
                    (Some(analytics), true) => html! { <Dashboard analytics={analytics.clone()} /> },
                    _ => html! {},
                }}

                <SummaryCards
                    {income}
                    summary={expenses.state.summary.clone()}
                    categories={expenses.state.categories.clone()}
                    status={budget.state.status.clone()}
                />

                <div class="forms-section">
                    <CategoryForm
                        value={expenses.state.new_category.clone()}
                        error={expenses.state.category_error.clone()}
                        on_change={expenses.actions.on_new_category_change.clone()}
                        on_submit={expenses.actions.add_category.clone()}
                    />
                    <ExpenseForm
                        form={expense_form.state.form.clone()}
                        categories={expenses.state.categories.clone()}
                        error={expense_form.state.error.clone()}
                        submitting={expense_form.state.submitting}
                        on_category_change={expense_form.actions.on_category_change.clone()}
                        on_amount_change={expense_form.actions.on_amount_change.clone()}
                        on_description_change={expense_form.actions.on_description_change.clone()}
                        on_date_change={expense_form.actions.on_date_change.clone()}
                        on_submit={expense_form.actions.submit.clone()}
                        on_cancel={expense_form.actions.cancel.clone()}
                    />
                </div>

                <ExpenseList
                    expenses={expenses.state.expenses.clone()}
                    loading={expenses.state.loading}
                    on_edit={expense_form.actions.begin_edit.clone()}
                    on_delete={expenses.actions.delete_expense.clone()}
                />

                <PlanModal
                    is_open={budget.state.show_plan_modal}
                    form={budget.state.plan_form.clone()}
                    categories={expenses.state.categories.clone()}
                    error={budget.state.plan_error.clone()}
                    saving={budget.state.saving}
                    on_income_change={budget.actions.on_income_change.clone()}
                    on_budget_change={budget.actions.on_budget_change.clone()}
                    on_submit={budget.actions.submit_plan.clone()}
                    on_close={budget.actions.close_plan.clone()}
                />
            </div>
        </div>
    }
}
