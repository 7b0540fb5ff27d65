use shared::format::{format_currency, format_date};
use shared::Analytics;
use yew::prelude::*;

use super::charts::{breakdown_points, daily_points, trend_points, AnalyticsChart, ChartKind};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub analytics: Analytics,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let analytics = &props.analytics;

    html! {
        <div class="dashboard">
            <h2>{"📊 Dashboard"}</h2>
            <div class="dashboard-grid">
                <div class="card">
                    <h3>{"📈 Monthly Trends"}</h3>
                    <AnalyticsChart kind={ChartKind::Trend} points={trend_points(&analytics.monthly_trends)} />
                    <div class="trend-list">
                        {for analytics.monthly_trends.iter().map(|item| html! {
                            <div key={item.month.clone()} class="trend-item">
                                <span>{&item.month}</span>
                                <span class="amount">{format_currency(item.total)}</span>
                            </div>
                        })}
                    </div>
                </div>

                <div class="card">
                    <h3>{"📊 Category Breakdown"}</h3>
                    <AnalyticsChart kind={ChartKind::Breakdown} points={breakdown_points(&analytics.category_breakdown)} />
                    <div class="category-list">
                        {for analytics.category_breakdown.iter().map(|item| html! {
                            <div key={item.category.clone()} class="category-item">
                                <span>{format!("{} ({})", item.category, item.count)}</span>
                                <span class="amount">{format_currency(item.total)}</span>
                            </div>
                        })}
                    </div>
                </div>

                <div class="card">
                    <h3>{"🕒 Recent Activity"}</h3>
                    <AnalyticsChart kind={ChartKind::Daily} points={daily_points(&analytics.recent_activity)} />
                    <div class="activity-list">
                        {for analytics.recent_activity.iter().map(|item| html! {
                            <div key={item.date.clone()} class="activity-item">
                                <span>{format_date(&item.date)}</span>
                                <span class="amount">{format_currency(item.total)}</span>
                            </div>
                        })}
                    </div>
                </div>

                <div class="card">
                    <h3>{"🔥 Top Expenses"}</h3>
                    <div class="top-expenses">
                        {for analytics.top_expenses.iter().map(|item| html! {
                            <div class="expense-item">
                                <div class="expense-main">
                                    {format!("{} - {}", format_currency(item.amount), item.category)}
                                </div>
                                <div class="expense-desc">{&item.description}</div>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
