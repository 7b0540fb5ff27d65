use yew::prelude::*;

use crate::components::{input_handler, submit_handler};

#[derive(Properties, PartialEq)]
pub struct CategoryFormProps {
    pub value: String,
    pub error: Option<String>,
    pub on_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(CategoryForm)]
pub fn category_form(props: &CategoryFormProps) -> Html {
    html! {
        <form class="form category-form" onsubmit={submit_handler(&props.on_submit)}>
            <input
                class="input"
                type="text"
                placeholder="Add new category"
                value={props.value.clone()}
                oninput={input_handler(&props.on_change)}
            />
            <button type="submit" class="btn btn-secondary">{"➕ Add"}</button>
            {if let Some(error) = props.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}
        </form>
    }
}
