use shared::schedule::{plan_needs_reminder, NotificationContent, ReminderWindow};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_periodic_refresh::{use_periodic_refresh, PeriodicRefreshConfig};
use crate::services::api::{report_failure, ApiClient};
use crate::services::date_utils::{current_month_key, local_now, today};
use crate::services::logging::Logger;
use crate::services::notifications;

const COMPONENT: &str = "plan-reminder";

/// Monthly planning reminder.
///
/// Checks once when the main screen opens on the reminder day, then every
/// `interval_ms` while the reminder hour is current. A notification is shown
/// only when this month has no usable plan; clicking it opens the plan editor.
#[hook]
pub fn use_plan_reminder(
    api_client: &ApiClient,
    window: ReminderWindow,
    interval_ms: u32,
    enabled: bool,
    open_plan: Callback<()>,
    on_unauthorized: Callback<()>,
) {
    let check = {
        let api_client = api_client.clone();
        Callback::from(move |_| {
            let api_client = api_client.clone();
            let open_plan = open_plan.clone();
            let on_unauthorized = on_unauthorized.clone();

            spawn_local(async move {
                let month = current_month_key();
                let plan = match api_client.get_monthly_plan(&month).await {
                    Ok(plan) => Some(plan),
                    Err(e) if e.is_unauthorized() => {
                        report_failure(COMPONENT, "check monthly plan", &e, &on_unauthorized);
                        return;
                    }
                    Err(e) => {
                        Logger::warn_with_component(
                            COMPONENT,
                            &format!("Plan lookup failed, treating {} as unplanned: {}", month, e),
                        );
                        None
                    }
                };

                if !plan_needs_reminder(plan.as_ref()) {
                    Logger::debug_with_component(COMPONENT, &format!("Plan for {} already set", month));
                    return;
                }

                if let Err(e) = notifications::show(&NotificationContent::plan_reminder(), Some(open_plan)) {
                    Logger::warn_with_component(COMPONENT, &format!("Failed to show reminder: {:#}", e));
                }
            });
        })
    };

    // Startup check, any hour of the reminder day
    {
        let check = check.clone();
        use_effect_with(enabled, move |enabled| {
            if *enabled && window.is_reminder_day(today()) {
                check.emit(());
            }
            || ()
        });
    }

    let hourly_check = Callback::from(move |_| {
        if window.is_due(local_now()) {
            check.emit(());
        }
    });

    use_periodic_refresh(
        PeriodicRefreshConfig {
            interval_ms,
            run_immediately: false,
        },
        hourly_check,
        !enabled,
    );
}
