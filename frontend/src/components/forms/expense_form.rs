use shared::forms::ExpenseForm as ExpenseFormData;
use yew::prelude::*;

use crate::components::{input_handler, select_handler, submit_handler};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    // Form state
    pub form: ExpenseFormData,
    pub categories: Vec<String>,
    pub error: Option<String>,
    pub submitting: bool,

    // Event handlers
    pub on_category_change: Callback<String>,
    pub on_amount_change: Callback<String>,
    pub on_description_change: Callback<String>,
    pub on_date_change: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let editing = props.form.is_editing();

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <form class="form expense-form" onsubmit={submit_handler(&props.on_submit)}>
            <select class="select" onchange={select_handler(&props.on_category_change)}>
                {for props.categories.iter().map(|category| html! {
                    <option
                        key={category.clone()}
                        value={category.clone()}
                        selected={*category == props.form.category}
                    >
                        {category}
                    </option>
                })}
            </select>
            <input
                class="input"
                type="number"
                step="0.01"
                placeholder="Amount (₹)"
                value={props.form.amount.clone()}
                oninput={input_handler(&props.on_amount_change)}
                required=true
            />
            <input
                class="input"
                type="text"
                placeholder="Description"
                value={props.form.description.clone()}
                oninput={input_handler(&props.on_description_change)}
            />
            <input
                class="input"
                type="date"
                title="Payment date"
                value={props.form.payment_date.clone()}
                oninput={input_handler(&props.on_date_change)}
            />
            <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                {if editing { "✏️ Update Expense" } else { "➕ Add Expense" }}
            </button>
            {if editing {
                html! {
                    <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                        {"✖ Cancel"}
                    </button>
                }
            } else { html! {} }}

            {if let Some(error) = props.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}
        </form>
    }
}
