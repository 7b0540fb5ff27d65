use shared::{ClientConfig, Screen};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::auth_screen::AuthScreen;
use components::main_screen::MainScreen;
use components::permission_screen::PermissionScreen;
use hooks::use_notification_permission::use_notification_permission;
use hooks::use_session::use_session;
use services::api::ApiClient;

/// Defaults, with the backend origin optionally baked in at build time
fn client_config() -> ClientConfig {
    ClientConfig::default().with_base_url(option_env!("EXPENSE_TRACKER_API_URL"))
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| client_config());
    let session = use_session(&config);
    let permission = use_notification_permission();

    let api_client = {
        let config = config.clone();
        use_memo(session.state.token.clone(), move |token| {
            ApiClient::new(&config).with_token(token.clone())
        })
    };

    let screen = Screen::resolve(
        session.state.token.is_some(),
        permission.state.permission,
        permission.state.prompt_dismissed,
    );

    match screen {
        Screen::Auth => html! {
            <AuthScreen
                mode={session.state.auth_mode}
                form={session.state.auth_form.clone()}
                error={session.state.error.clone()}
                notice={session.state.notice.clone()}
                submitting={session.state.submitting}
                on_username_change={session.actions.on_username_change.clone()}
                on_password_change={session.actions.on_password_change.clone()}
                on_submit={session.actions.submit.clone()}
                on_toggle_mode={session.actions.toggle_mode.clone()}
            />
        },
        Screen::PermissionPrompt => html! {
            <PermissionScreen
                requesting={permission.state.requesting}
                supported={permission.state.supported}
                on_allow={permission.actions.request.clone()}
                on_continue={permission.actions.dismiss.clone()}
            />
        },
        Screen::Main => html! {
            <MainScreen
                api_client={(*api_client).clone()}
                config={(*config).clone()}
                notifications_granted={permission.state.permission.is_granted()}
                on_enable_notifications={permission.actions.request.clone()}
                on_logout={session.actions.logout.clone()}
            />
        },
    }
}

fn main() {
    services::logging::init(log::LevelFilter::Debug);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_has_usable_origin() {
        let config = client_config();
        assert!(config.api_base_url.starts_with("http"));
        assert!(!config.api_base_url.ends_with('/'));
    }
}
