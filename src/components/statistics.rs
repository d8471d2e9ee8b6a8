use yew::prelude::*;

use crate::components::error_card::ErrorCard;
use crate::hooks::use_statistics::use_statistics;
use crate::models::records::Utility;

/// Summary block showing last-day and last-week usage totals per utility.
#[function_component(StatisticsBlock)]
pub fn statistics_block() -> Html {
    let state = use_statistics();

    if let Some(error) = state.error() {
        return html! {
            <ErrorCard
                title="Statistics Error"
                description={error.to_string()}
            />
        };
    }

    let stats = state.data();
    let class = if state.is_loading() {
        "stat-block loading"
    } else {
        "stat-block"
    };

    html! {
        <div class={class}>
            { stat_row(Utility::Light, "Last Day", stats.map(|s| s.light_total_last_day)) }
            { stat_row(Utility::Light, "Last Week", stats.map(|s| s.light_total_last_week)) }
            { stat_row(Utility::Ac, "Last Day", stats.map(|s| s.ac_total_last_day)) }
            { stat_row(Utility::Ac, "Last Week", stats.map(|s| s.ac_total_last_week)) }
        </div>
    }
}

fn stat_row(utility: Utility, title: &str, value: Option<f64>) -> Html {
    let class = classes!("stat-row", utility.css_class());
    let value = value.map_or_else(|| "--".to_string(), |v| format!("{v}"));

    html! {
        <div {class}>
            <p>{title}</p>
            <div class="stat-value-row">
                <p class="stat-value">{value}</p>
                <p class="stat-unit">{"kW"}</p>
            </div>
        </div>
    }
}
