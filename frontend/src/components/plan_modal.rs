use shared::format::format_currency;
use shared::forms::PlanForm;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use super::input_handler;

#[derive(Properties, PartialEq)]
pub struct PlanModalProps {
    pub is_open: bool,
    pub form: PlanForm,
    pub categories: Vec<String>,
    pub error: Option<String>,
    pub saving: bool,

    pub on_income_change: Callback<String>,
    pub on_budget_change: Callback<(String, String)>,
    pub on_submit: Callback<Vec<String>>,
    pub on_close: Callback<()>,
}

#[function_component(PlanModal)]
pub fn plan_modal(props: &PlanModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let on_form_submit = {
        let on_submit = props.on_submit.clone();
        let categories = props.categories.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(categories.clone());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-overlay" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3>{"💵 Monthly Income & Expenditure Plan"}</h3>

                {if let Some(error) = props.error.as_ref() {
                    html! { <div class="form-message error">{error}</div> }
                } else { html! {} }}

                <form onsubmit={on_form_submit}>
                    <div class="income-section">
                        <h4>{"Monthly Income"}</h4>
                        <input
                            type="number"
                            class="income-input"
                            placeholder="Enter your monthly income"
                            value={props.form.income.clone()}
                            oninput={input_handler(&props.on_income_change)}
                            required=true
                        />
                    </div>

                    <div class="budget-section">
                        <h4>{"📊 Planned Expenditure by Category"}</h4>
                        {for props.categories.iter().map(|category| {
                            let oninput = {
                                let on_budget_change = props.on_budget_change.clone();
                                let category = category.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    on_budget_change.emit((category.clone(), input.value()));
                                })
                            };

                            html! {
                                <div key={category.clone()} class="budget-input">
                                    <label>{format!("{}:", category)}</label>
                                    <input
                                        type="number"
                                        placeholder="Planned amount"
                                        value={props.form.budget_input(category)}
                                        {oninput}
                                    />
                                </div>
                            }
                        })}

                        <div class="plan-summary">
                            <div class="summary-row">
                                <span>{"Total Income:"}</span>
                                <span>{format_currency(props.form.income_value())}</span>
                            </div>
                            <div class="summary-row">
                                <span>{"Total Planned:"}</span>
                                <span>{format_currency(props.form.total_planned(&props.categories))}</span>
                            </div>
                            <div class="summary-row savings">
                                <span>{"Expected Savings:"}</span>
                                <span>{format_currency(props.form.expected_savings(&props.categories))}</span>
                            </div>
                        </div>
                    </div>

                    <div class="modal-actions">
                        <button type="submit" class="btn btn-primary" disabled={props.saving}>
                            {if props.saving { "Saving..." } else { "💾 Save Plan" }}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                            {"✖ Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
