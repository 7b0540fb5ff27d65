use gloo::timers::callback::Timeout;
use shared::forms::{AuthForm, AuthMode};
use shared::{ClientConfig, StoredSession};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::now_ms;
use crate::services::logging::Logger;
use crate::services::storage::SessionStorage;

const COMPONENT: &str = "session";

#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub auth_mode: AuthMode,
    pub auth_form: AuthForm,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub submitting: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    pub submit: Callback<()>,
    pub toggle_mode: Callback<()>,
    pub on_username_change: Callback<String>,
    pub on_password_change: Callback<String>,
    pub logout: Callback<()>,
}

pub struct UseSessionResult {
    pub state: SessionState,
    pub actions: UseSessionActions,
}

/// Login/register, persisted token, logout and the 24-hour expiry timer
#[hook]
pub fn use_session(config: &ClientConfig) -> UseSessionResult {
    let storage = SessionStorage::new(config.token_storage_key.clone());
    let ttl_ms = config.session_ttl_ms;

    let session = use_state({
        let storage = storage.clone();
        move || match storage.load() {
            Some(stored) if !stored.is_expired(now_ms(), ttl_ms) => Some(stored),
            Some(_) => {
                Logger::info_with_component(COMPONENT, "Stored session has expired, discarding it");
                storage.clear();
                None
            }
            None => None,
        }
    });
    let auth_mode = use_state(AuthMode::default);
    let auth_form = use_state(AuthForm::default);
    let error = use_state(|| Option::<String>::None);
    let notice = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let logout = {
        let storage = storage.clone();
        let session = session.clone();
        Callback::from(move |_| {
            storage.clear();
            session.set(None);
            Logger::info_with_component(COMPONENT, "Logged out");
        })
    };

    // Arm the one-shot expiry timer for whatever lifetime the token has left
    {
        let logout = logout.clone();
        use_effect_with((*session).clone(), move |current| {
            let timeout = current.as_ref().map(|stored| {
                let logout = logout.clone();
                match stored.remaining_ms(now_ms(), ttl_ms) {
                    Some(remaining) => Some(Timeout::new(remaining, move || {
                        Logger::info_with_component(COMPONENT, "Session lifetime reached, logging out");
                        logout.emit(());
                    })),
                    None => {
                        logout.emit(());
                        None
                    }
                }
            });
            move || drop(timeout)
        });
    }

    let submit = {
        let api_client = ApiClient::new(config);
        let storage = storage.clone();
        let session = session.clone();
        let auth_mode = auth_mode.clone();
        let auth_form = auth_form.clone();
        let error = error.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();

        Callback::from(move |_| {
            let request = match auth_form.to_request() {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            let api_client = api_client.clone();
            let storage = storage.clone();
            let session = session.clone();
            let auth_mode = auth_mode.clone();
            let auth_form = auth_form.clone();
            let error = error.clone();
            let notice = notice.clone();
            let submitting = submitting.clone();
            let mode = *auth_mode;

            spawn_local(async move {
                submitting.set(true);
                error.set(None);
                notice.set(None);

                match mode {
                    AuthMode::Login => match api_client.login(&request).await {
                        Ok(response) => {
                            let stored = StoredSession::new(response.access_token, now_ms());
                            if let Err(e) = storage.save(&stored) {
                                Logger::warn_with_component(COMPONENT, &format!("{:#}", e));
                            }
                            Logger::info_with_component(COMPONENT, "Logged in");
                            session.set(Some(stored));
                        }
                        Err(e) => {
                            Logger::warn_with_component(COMPONENT, &format!("Login failed: {}", e));
                            error.set(Some(e.auth_message()));
                        }
                    },
                    AuthMode::Register => match api_client.register(&request).await {
                        Ok(_) => {
                            auth_mode.set(AuthMode::Login);
                            notice.set(Some("Registration successful! Please login.".to_string()));
                        }
                        Err(e) => {
                            Logger::warn_with_component(COMPONENT, &format!("Registration failed: {}", e));
                            error.set(Some(e.auth_message()));
                        }
                    },
                }

                auth_form.set(AuthForm::default());
                submitting.set(false);
            });
        })
    };

    let toggle_mode = {
        let auth_mode = auth_mode.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            auth_mode.set(auth_mode.toggled());
            error.set(None);
            notice.set(None);
        })
    };

    let on_username_change = {
        let auth_form = auth_form.clone();
        Callback::from(move |value: String| {
            let mut next = (*auth_form).clone();
            next.username = value;
            auth_form.set(next);
        })
    };

    let on_password_change = {
        let auth_form = auth_form.clone();
        Callback::from(move |value: String| {
            let mut next = (*auth_form).clone();
            next.password = value;
            auth_form.set(next);
        })
    };

    let state = SessionState {
        token: session.as_ref().map(|stored| stored.token.clone()),
        auth_mode: *auth_mode,
        auth_form: (*auth_form).clone(),
        error: (*error).clone(),
        notice: (*notice).clone(),
        submitting: *submitting,
    };

    let actions = UseSessionActions {
        submit,
        toggle_mode,
        on_username_change,
        on_password_change,
        logout,
    };

    UseSessionResult { state, actions }
}
