use shared::forms::{AuthForm, AuthMode};
use yew::prelude::*;

use super::{input_handler, submit_handler};

#[derive(Properties, PartialEq)]
pub struct AuthScreenProps {
    pub mode: AuthMode,
    pub form: AuthForm,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub submitting: bool,

    pub on_username_change: Callback<String>,
    pub on_password_change: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_toggle_mode: Callback<()>,
}

#[function_component(AuthScreen)]
pub fn auth_screen(props: &AuthScreenProps) -> Html {
    let on_toggle = {
        let on_toggle_mode = props.on_toggle_mode.clone();
        Callback::from(move |_: MouseEvent| on_toggle_mode.emit(()))
    };

    let heading = match props.mode {
        AuthMode::Login => "🔒 Login",
        AuthMode::Register => "👤 Register",
    };

    html! {
        <div class="auth-screen">
            <div class="auth-modal">
                <h1>{"💵 Expense Tracker"}</h1>
                <div class="auth-content">
                    <h2>{heading}</h2>

                    {if let Some(error) = props.error.as_ref() {
                        html! { <div class="form-message error">{error}</div> }
                    } else { html! {} }}

                    {if let Some(notice) = props.notice.as_ref() {
                        html! { <div class="form-message success">{notice}</div> }
                    } else { html! {} }}

                    <form onsubmit={submit_handler(&props.on_submit)} autocomplete="off">
                        <input
                            type="text"
                            class="auth-input"
                            placeholder="Username"
                            value={props.form.username.clone()}
                            oninput={input_handler(&props.on_username_change)}
                            required=true
                            autocomplete="off"
                            spellcheck="false"
                        />
                        <input
                            type="password"
                            class="auth-input"
                            placeholder="Password"
                            value={props.form.password.clone()}
                            oninput={input_handler(&props.on_password_change)}
                            required=true
                            autocomplete="new-password"
                        />
                        <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                            {if props.submitting { "Please wait..." } else { props.mode.title() }}
                        </button>
                    </form>
                    <p>
                        {props.mode.switch_prompt()}
                        <button type="button" class="link-btn" onclick={on_toggle}>
                            {props.mode.toggled().title()}
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}
