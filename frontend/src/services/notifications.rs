use anyhow::anyhow;
use shared::schedule::NotificationContent;
use shared::NotificationPermission;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationOptions};
use yew::Callback;

use super::logging::Logger;

const ICON: &str = "/favicon.ico";

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

/// Whether this browser exposes the Notification API at all
pub fn is_supported() -> bool {
    web_sys::window()
        .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("Notification")).unwrap_or(false))
        .unwrap_or(false)
}

/// Current permission; browsers without the API count as denied
pub fn current_permission() -> NotificationPermission {
    if !is_supported() {
        return NotificationPermission::Denied;
    }
    match Notification::permission() {
        web_sys::NotificationPermission::Granted => NotificationPermission::Granted,
        web_sys::NotificationPermission::Denied => NotificationPermission::Denied,
        _ => NotificationPermission::Default,
    }
}

/// Ask the user for permission and report what they chose
pub async fn request_permission() -> anyhow::Result<NotificationPermission> {
    if !is_supported() {
        return Ok(NotificationPermission::Denied);
    }
    let promise = Notification::request_permission().map_err(js_error)?;
    let result = JsFuture::from(promise).await.map_err(js_error)?;
    Ok(NotificationPermission::from_browser(
        &result.as_string().unwrap_or_default(),
    ))
}

/// Show a notification when permission is granted; a no-op otherwise.
/// `on_click` runs after the window has been focused.
pub fn show(content: &NotificationContent, on_click: Option<Callback<()>>) -> anyhow::Result<()> {
    if !current_permission().is_granted() {
        Logger::debug_with_component(
            "notifications",
            &format!("Skipping '{}', permission not granted", content.title),
        );
        return Ok(());
    }

    let options = NotificationOptions::new();
    options.set_body(&content.body);
    options.set_icon(ICON);
    options.set_require_interaction(content.require_interaction);
    if let Some(tag) = &content.tag {
        options.set_tag(tag);
    }

    let notification = Notification::new_with_options(&content.title, &options).map_err(js_error)?;

    if let Some(on_click) = on_click {
        let handle = notification.clone();
        let closure = Closure::once_into_js(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.focus();
            }
            on_click.emit(());
            handle.close();
        });
        notification.set_onclick(Some(closure.unchecked_ref()));
    }

    Logger::info_with_component("notifications", &format!("Shown '{}'", content.title));
    Ok(())
}

/// Fire-and-forget variant that only logs failures
pub fn notify(content: &NotificationContent) {
    if let Err(e) = show(content, None) {
        Logger::warn_with_component("notifications", &format!("Failed to show notification: {:#}", e));
    }
}
