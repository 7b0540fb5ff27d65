use shared::NotificationPermission;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::notifications;

#[derive(Clone, PartialEq)]
pub struct NotificationPermissionState {
    pub permission: NotificationPermission,
    pub supported: bool,
    /// The user chose to continue without notifications
    pub prompt_dismissed: bool,
    pub requesting: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseNotificationPermissionActions {
    pub request: Callback<()>,
    pub dismiss: Callback<()>,
}

pub struct UseNotificationPermissionResult {
    pub state: NotificationPermissionState,
    pub actions: UseNotificationPermissionActions,
}

#[hook]
pub fn use_notification_permission() -> UseNotificationPermissionResult {
    let permission = use_state(notifications::current_permission);
    let prompt_dismissed = use_state(|| false);
    let requesting = use_state(|| false);

    let request = {
        let permission = permission.clone();
        let requesting = requesting.clone();
        use_callback((), move |_, _| {
            let permission = permission.clone();
            let requesting = requesting.clone();
            spawn_local(async move {
                requesting.set(true);
                match notifications::request_permission().await {
                    Ok(choice) => {
                        Logger::info_with_component(
                            "notification-permission",
                            &format!("Permission is now {:?}", choice),
                        );
                        permission.set(choice);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "notification-permission",
                            &format!("Permission request failed: {:#}", e),
                        );
                        permission.set(notifications::current_permission());
                    }
                }
                requesting.set(false);
            });
        })
    };

    let dismiss = {
        let prompt_dismissed = prompt_dismissed.clone();
        use_callback((), move |_, _| prompt_dismissed.set(true))
    };

    UseNotificationPermissionResult {
        state: NotificationPermissionState {
            permission: *permission,
            supported: notifications::is_supported(),
            prompt_dismissed: *prompt_dismissed,
            requesting: *requesting,
        },
        actions: UseNotificationPermissionActions { request, dismiss },
    }
}
