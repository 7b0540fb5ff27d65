use shared::format::{format_currency, format_date};
use shared::Expense;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub on_edit: Callback<Expense>,
    pub on_delete: Callback<String>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    html! {
        <section class="expenses-section">
            <h2>{"💵 Your Expenses"}</h2>

            {if props.loading && props.expenses.is_empty() {
                html! { <div class="loading">{"Loading expenses..."}</div> }
            } else if props.expenses.is_empty() {
                html! { <div class="empty-state">{"No expenses yet"}</div> }
            } else {
                html! {
                    <div class="expenses-list">
                        {for props.expenses.iter().map(|expense| {
                            let on_edit = {
                                let on_edit = props.on_edit.clone();
                                let expense = expense.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
                            };
                            let on_delete = {
                                let on_delete = props.on_delete.clone();
                                let id = expense.id.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                            };

                            html! {
                                <div key={expense.id.clone()} class="expense-row">
                                    <div class="expense-info">
                                        <div class="expense-header">
                                            <span class="category-tag">{&expense.category}</span>
                                            <span class="amount">{format_currency(expense.amount)}</span>
                                        </div>
                                        <div class="expense-details">
                                            <span class="description">{&expense.description}</span>
                                            <span class="date">{format_date(&expense.created_at)}</span>
                                        </div>
                                    </div>
                                    <div class="expense-actions">
                                        <button class="btn-icon" title="Edit" onclick={on_edit}>{"✏️"}</button>
                                        <button class="btn-icon" title="Delete" onclick={on_delete}>{"🗑️"}</button>
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                }
            }}
        </section>
    }
}
