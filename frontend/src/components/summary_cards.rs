use shared::format::format_currency;
use shared::{BudgetStatus, ExpenseSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    /// Income from this month's plan, zero without one
    pub income: f64,
    pub summary: ExpenseSummary,
    pub categories: Vec<String>,
    pub status: BudgetStatus,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    html! {
        <div class="summary-cards">
            <div class="summary-card income">
                <span class="label">{"Monthly Income"}</span>
                <span class="value">{format_currency(props.income)}</span>
            </div>
            <div class="summary-card total">
                <span class="label">{"Total Spent"}</span>
                <span class="value">{format_currency(props.summary.total)}</span>
                <div class="budget-info">
                    <small>{format!("Remaining: {}", format_currency(props.income - props.summary.total))}</small>
                </div>
            </div>

            {for props.categories.iter().map(|category| {
                let spent = props.summary.spent_in(category);
                let status = props.status.get(category);
                let over_budget = status.map_or(false, |status| status.is_over_budget(spent));

                html! {
                    <div key={category.clone()} class={classes!("summary-card", over_budget.then_some("over-budget"))}>
                        <span class="label">{category}</span>
                        <span class="value">{format_currency(spent)}</span>
                        {if let Some(status) = status {
                            html! {
                                <div class="budget-info">
                                    <small>{format!("Budget: {}", format_currency(status.budget))}</small>
                                    <div class="progress-bar">
                                        <div class="progress" style={format!("width: {}%", status.progress_width())}></div>
                                    </div>
                                </div>
                            }
                        } else { html! {} }}
                    </div>
                }
            })}
        </div>
    }
}
