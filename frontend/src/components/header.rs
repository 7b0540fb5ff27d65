use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub notifications_granted: bool,
    pub show_dashboard: bool,
    pub on_open_plan: Callback<()>,
    pub on_enable_notifications: Callback<()>,
    pub on_logout: Callback<()>,
    pub on_toggle_dashboard: Callback<()>,
}

fn click(callback: &Callback<()>) -> Callback<MouseEvent> {
    let callback = callback.clone();
    Callback::from(move |_: MouseEvent| callback.emit(()))
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <h1>{"💵 Expense Tracker"}</h1>
            <div class="header-menus">
                <button class="btn btn-secondary" onclick={click(&props.on_open_plan)}>
                    {"💵 Monthly Plan"}
                </button>
                {if !props.notifications_granted {
                    html! {
                        <button class="btn btn-warning" onclick={click(&props.on_enable_notifications)}>
                            {"🔔 Enable Notifications"}
                        </button>
                    }
                } else { html! {} }}
                <button class="btn btn-secondary" onclick={click(&props.on_logout)}>
                    {"🚪 Logout"}
                </button>
                <button class="btn btn-secondary" onclick={click(&props.on_toggle_dashboard)}>
                    {if props.show_dashboard { "📊 Hide Dashboard" } else { "📈 Show Dashboard" }}
                </button>
            </div>
        </header>
    }
}
