use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PermissionScreenProps {
    pub requesting: bool,
    /// False when the browser has no Notification API at all
    pub supported: bool,
    pub on_allow: Callback<()>,
    pub on_continue: Callback<()>,
}

#[function_component(PermissionScreen)]
pub fn permission_screen(props: &PermissionScreenProps) -> Html {
    let on_allow_click = {
        let on_allow = props.on_allow.clone();
        Callback::from(move |_: MouseEvent| on_allow.emit(()))
    };

    let on_continue_click = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| on_continue.emit(()))
    };

    html! {
        <div class="permission-screen">
            <div class="permission-modal">
                <h1>{"💵 Expense Tracker"}</h1>
                <div class="permission-content">
                    <h2>{"🔔 Enable Notifications"}</h2>
                    <p>{"This app needs notification permission to:"}</p>
                    <ul>
                        <li>{"📅 Remind you to set monthly budgets"}</li>
                        <li>{"⚠️ Alert when you exceed spending limits"}</li>
                        <li>{"💡 Provide financial insights"}</li>
                    </ul>

                    {if !props.supported {
                        html! {
                            <div class="form-message info">
                                {"This browser does not support notifications."}
                            </div>
                        }
                    } else { html! {} }}

                    <div class="permission-actions">
                        <button
                            class="btn btn-primary"
                            onclick={on_allow_click}
                            disabled={props.requesting || !props.supported}
                        >
                            {"✔ Allow Notifications"}
                        </button>
                        <button class="btn btn-secondary" onclick={on_continue_click}>
                            {"✖ Continue Without Notifications"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
