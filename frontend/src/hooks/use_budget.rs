use shared::forms::PlanForm;
use shared::schedule::NotificationContent;
use shared::{BudgetStatus, MonthlyPlan};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::{report_failure, ApiClient};
use crate::services::date_utils::current_month_key;
use crate::services::logging::Logger;
use crate::services::notifications;

const COMPONENT: &str = "budget";

#[derive(Clone, PartialEq)]
pub struct BudgetState {
    /// This month's plan, `None` until loaded
    pub plan: Option<MonthlyPlan>,
    pub status: BudgetStatus,

    // Plan editor state
    pub show_plan_modal: bool,
    pub plan_form: PlanForm,
    pub plan_error: Option<String>,
    pub saving: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseBudgetActions {
    /// Reload plan and budget status for the current month
    pub refresh: Callback<()>,
    /// Replace the cached status with one fetched elsewhere
    pub set_status: Callback<BudgetStatus>,
    pub open_plan: Callback<()>,
    pub close_plan: Callback<()>,
    pub on_income_change: Callback<String>,
    pub on_budget_change: Callback<(String, String)>,
    pub submit_plan: Callback<Vec<String>>,
}

pub struct UseBudgetResult {
    pub state: BudgetState,
    pub actions: UseBudgetActions,
}

#[hook]
pub fn use_budget(api_client: &ApiClient, on_unauthorized: Callback<()>) -> UseBudgetResult {
    let plan = use_state(|| Option::<MonthlyPlan>::None);
    let status = use_state(BudgetStatus::new);
    let show_plan_modal = use_state(|| false);
    let plan_form = use_state(PlanForm::default);
    let plan_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let plan = plan.clone();
        let status = status.clone();
        let on_unauthorized = on_unauthorized.clone();

        Callback::from(move |_| {
            let month = current_month_key();
            {
                let api_client = api_client.clone();
                let plan = plan.clone();
                let on_unauthorized = on_unauthorized.clone();
                let month = month.clone();
                spawn_local(async move {
                    match api_client.get_monthly_plan(&month).await {
                        Ok(data) => plan.set(Some(data)),
                        Err(e) => report_failure(COMPONENT, "fetch monthly plan", &e, &on_unauthorized),
                    }
                });
            }
            {
                let api_client = api_client.clone();
                let status = status.clone();
                let on_unauthorized = on_unauthorized.clone();
                spawn_local(async move {
                    match api_client.get_budget_status(&month).await {
                        Ok(data) => status.set(data),
                        Err(e) => report_failure(COMPONENT, "fetch budget status", &e, &on_unauthorized),
                    }
                });
            }
        })
    };

    let set_status = {
        let status = status.clone();
        Callback::from(move |next: BudgetStatus| status.set(next))
    };

    let open_plan = {
        let plan = plan.clone();
        let plan_form = plan_form.clone();
        let plan_error = plan_error.clone();
        let show_plan_modal = show_plan_modal.clone();
        Callback::from(move |_| {
            let form = plan
                .as_ref()
                .map(PlanForm::from_plan)
                .unwrap_or_default();
            plan_form.set(form);
            plan_error.set(None);
            show_plan_modal.set(true);
        })
    };

    let close_plan = {
        let show_plan_modal = show_plan_modal.clone();
        let plan_error = plan_error.clone();
        Callback::from(move |_| {
            plan_error.set(None);
            show_plan_modal.set(false);
        })
    };

    let on_income_change = {
        let plan_form = plan_form.clone();
        Callback::from(move |value: String| {
            let mut next = (*plan_form).clone();
            next.income = value;
            plan_form.set(next);
        })
    };

    let on_budget_change = {
        let plan_form = plan_form.clone();
        Callback::from(move |(category, value): (String, String)| {
            let mut next = (*plan_form).clone();
            next.set_budget(&category, value);
            plan_form.set(next);
        })
    };

    let submit_plan = {
        let api_client = api_client.clone();
        let plan_form = plan_form.clone();
        let plan_error = plan_error.clone();
        let show_plan_modal = show_plan_modal.clone();
        let saving = saving.clone();
        let refresh = refresh.clone();
        let on_unauthorized = on_unauthorized.clone();

        Callback::from(move |categories: Vec<String>| {
            let submission = match plan_form.to_submission(&current_month_key(), &categories) {
                Ok(submission) => submission,
                Err(e) => {
                    plan_error.set(Some(e.to_string()));
                    return;
                }
            };

            // Planning beyond income is allowed, the user is only told about it
            if let Some(warning) = &submission.over_income_warning {
                Logger::warn_with_component(COMPONENT, warning);
                gloo::dialogs::alert(warning);
            }

            let api_client = api_client.clone();
            let plan_form = plan_form.clone();
            let plan_error = plan_error.clone();
            let show_plan_modal = show_plan_modal.clone();
            let saving = saving.clone();
            let refresh = refresh.clone();
            let on_unauthorized = on_unauthorized.clone();

            spawn_local(async move {
                saving.set(true);
                plan_error.set(None);

                match api_client.set_monthly_plan(&submission.request).await {
                    Ok(_) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Saved plan for {}", submission.request.month),
                        );
                        show_plan_modal.set(false);
                        plan_form.set(PlanForm::default());
                        refresh.emit(());
                        notifications::notify(&NotificationContent::plan_saved(
                            submission.request.income,
                            submission.total_planned,
                        ));
                    }
                    Err(e) => {
                        report_failure(COMPONENT, "save monthly plan", &e, &on_unauthorized);
                        if !e.is_unauthorized() {
                            plan_error.set(Some(e.user_message()));
                        }
                    }
                }

                saving.set(false);
            });
        })
    };

    let state = BudgetState {
        plan: (*plan).clone(),
        status: (*status).clone(),
        show_plan_modal: *show_plan_modal,
        plan_form: (*plan_form).clone(),
        plan_error: (*plan_error).clone(),
        saving: *saving,
    };

    let actions = UseBudgetActions {
        refresh,
        set_status,
        open_plan,
        close_plan,
        on_income_change,
        on_budget_change,
        submit_plan,
    };

    UseBudgetResult { state, actions }
}
