use yew::prelude::*;

use crate::components::balance_card::BalanceCard;
use crate::components::chart::TrendChart;
use crate::components::error_card::ErrorCard;
use crate::components::header::LastUpdateTag;
use crate::components::period_table::PeriodUsageTable;
use crate::components::segmented::{
    DiagramDaysSegmented, InfoTypeSegmented, ItemCountSegmented, PeriodUnitSegmented,
};
use crate::components::statistics::StatisticsBlock;
use crate::config::Config;
use crate::hooks::use_balance::use_balance;
use crate::hooks::DataState;
use crate::hooks::use_records::use_recent_records;
use crate::hooks::use_settings::use_settings;
use crate::hooks::use_statistics::use_record_count;
use crate::models::records::{InfoType, PeriodUnit, Utility};
use crate::models::usage::UsageOptions;

/// Main dashboard: balance cards, statistics, trend chart and usage table.
/// Control overrides live in local state; the settings record only provides
/// the defaults.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let settings = use_settings(Callback::noop()).settings;
    let balance = use_balance();

    let graph_days = use_state(|| None::<u32>);
    let graph_type = use_state(|| None::<InfoType>);
    let table_unit = use_state(|| None::<PeriodUnit>);
    let table_count = use_state(|| None::<u32>);

    let days = (*graph_days).unwrap_or(settings.diagram_days);
    let info_type = (*graph_type).unwrap_or(settings.diagram_type);
    let unit = (*table_unit).unwrap_or(settings.chart_time_range);
    let count = (*table_count).unwrap_or(settings.chart_items_count);

    let records = use_recent_records(days, info_type);

    let on_days_change = {
        let graph_days = graph_days.clone();
        Callback::from(move |value| graph_days.set(Some(value)))
    };
    let on_type_change = {
        let graph_type = graph_type.clone();
        Callback::from(move |value| graph_type.set(Some(value)))
    };
    let on_unit_change = {
        let table_unit = table_unit.clone();
        Callback::from(move |value| table_unit.set(Some(value)))
    };
    let on_count_change = {
        let table_count = table_count.clone();
        Callback::from(move |value| table_count.set(Some(value)))
    };

    let balance_data = balance.data();

    html! {
        <div class="dashboard">
            <div class="dashboard-top">
                <LastUpdateTag
                    timestamp={balance_data.map(|record| record.timestamp)}
                    is_loading={balance.is_loading()}
                />
            </div>

            <div class="balance-row">
                <BalanceCard
                    utility={Utility::Light}
                    value={balance_data.map(|record| record.light_balance)}
                    is_loading={balance.is_loading()}
                />
                <BalanceCard
                    utility={Utility::Ac}
                    value={balance_data.map(|record| record.ac_balance)}
                    is_loading={balance.is_loading()}
                />
                <StatisticsBlock />
            </div>

            <section class="chart-section">
                <div class="option-bar">
                    <DiagramDaysSegmented value={days} on_change={on_days_change} />
                    <InfoTypeSegmented value={info_type} on_change={on_type_change} />
                </div>

                {
                    match &*records {
                        DataState::Loading => html! {
                            <div class="status loading">
                                <div class="spinner"></div>
                                <p>{"Loading data..."}</p>
                            </div>
                        },
                        DataState::Error(error) => html! {
                            <ErrorCard title="Records Error" description={error.to_string()} />
                        },
                        DataState::Loaded(records) => html! {
                            <TrendChart
                                records={records.clone()}
                                {info_type}
                                options={UsageOptions::from(&settings)}
                            />
                        },
                    }
                }
            </section>

            <section class="table-section">
                <div class="option-bar">
                    <PeriodUnitSegmented value={unit} on_change={on_unit_change} />
                    <ItemCountSegmented value={count} on_change={on_count_change} />
                </div>
                <h2 class="section-title">{format!("{} Usage", unit.label())}</h2>
                <PeriodUsageTable {unit} {count} />
            </section>

            <RecordsFooter />
        </div>
    }
}

/// Footer with stored-record counters and the backend docs link.
#[function_component(RecordsFooter)]
fn records_footer() -> Html {
    let counts = use_record_count();

    let summary = counts.data().map_or_else(
        || "-- records stored".to_string(),
        |count| {
            format!(
                "{} records stored, {} in the last 7 days",
                count.total, count.last_7_days
            )
        },
    );

    html! {
        <footer class="dashboard-footer">
            <p>{summary}</p>
            <a target="_blank" href={format!("{}/docs", Config::base_url())}>
                {"Backend Interactive API Docs"}
            </a>
        </footer>
    }
}
