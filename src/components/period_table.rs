use yew::prelude::*;

use crate::components::error_card::ErrorCard;
use crate::hooks::use_period_usage::use_period_usage;
use crate::models::records::{PeriodUnit, PeriodUsage, Utility};
use crate::utils::format::format_month_day;

#[derive(Properties, PartialEq)]
pub struct PeriodUsageTableProps {
    pub unit: PeriodUnit,
    pub count: u32,
}

/// Table of aggregated usage periods, most recent first.
#[function_component(PeriodUsageTable)]
pub fn period_usage_table(props: &PeriodUsageTableProps) -> Html {
    let state = use_period_usage(props.unit, props.count, true);

    if let Some(error) = state.error() {
        return html! {
            <ErrorCard title="Usage Table Error" description={error.to_string()} />
        };
    }

    let Some(periods) = state.data() else {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        };
    };

    html! {
        <table class="period-table">
            <thead>
                <tr>
                    <th rowspan="2">{"From"}</th>
                    <th rowspan="2">{"To"}</th>
                    <th colspan="2">{"Usage"}</th>
                </tr>
                <tr>
                    <th>{"Illumination"}</th>
                    <th>{"Air Conditioner"}</th>
                </tr>
            </thead>
            <tbody>
                { periods.iter().map(|period| period_row(period, props.unit)).collect::<Html>() }
            </tbody>
        </table>
    }
}

fn period_row(period: &PeriodUsage, unit: PeriodUnit) -> Html {
    html! {
        <tr>
            <td class="period-date">{format_month_day(period.start_time)}</td>
            <td class="period-date">{format_month_day(period.end_time)}</td>
            { usage_cell(period, Utility::Light, unit) }
            { usage_cell(period, Utility::Ac, unit) }
        </tr>
    }
}

fn usage_cell(period: &PeriodUsage, utility: Utility, unit: PeriodUnit) -> Html {
    let usage = match utility {
        Utility::Light => period.light_usage,
        Utility::Ac => period.ac_usage,
    };
    let tooltip = format!("{:.2} kW/day", period.daily_average(utility, unit));
    let class = classes!("usage-value", utility.css_class());

    html! {
        <td title={tooltip}>
            <p {class}>{format!("{usage:.2}")}</p>
        </td>
    }
}
