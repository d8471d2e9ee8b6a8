use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::records::{balance_series, BalanceRecord, InfoType};
use crate::models::usage::{usage_series, UsageOptions};
use crate::utils::format::format_chart_label;

const CHART_ID: &str = "trend-chart";

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub records: Rc<Vec<BalanceRecord>>,
    pub info_type: InfoType,
    pub options: UsageOptions,
}

#[derive(Clone, Debug, PartialEq)]
struct SeriesData {
    labels: Vec<String>,
    light: Vec<f64>,
    ac: Vec<f64>,
    title: &'static str,
    unit: &'static str,
}

/// Line chart of balance or converted usage over the selected day window.
#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(
        (props.records.clone(), props.info_type, props.options),
        |(records, info_type, options)| build_series(records, *info_type, *options),
    );

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (series_data, container_ref),
            |(series_data, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, series_data);

                    let series_data = series_data.clone();
                    EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                        render_chart(&container, &series_data);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn build_series(
    records: &[BalanceRecord],
    info_type: InfoType,
    options: UsageOptions,
) -> SeriesData {
    match info_type {
        InfoType::Balance => {
            let (labels, light, ac) = balance_series(records);
            SeriesData {
                labels,
                light,
                ac,
                title: "Balance Trends",
                unit: "kW",
            }
        }
        InfoType::Usage => {
            let points = usage_series(records, options);
            SeriesData {
                labels: points
                    .iter()
                    .map(|p| format_chart_label(p.timestamp))
                    .collect(),
                light: points.iter().map(|p| p.light).collect(),
                ac: points.iter().map(|p| p.ac).collect(),
                title: "Usage Trends",
                unit: if options.per_hour_unit { "kW/h" } else { "kW" },
            }
        }
    }
}

fn render_chart(container: &HtmlElement, series_data: &SeriesData) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series_data, prefers_dark());
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

/// Detect the system's preferred color scheme; defaults to light.
fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

fn build_chart(series_data: &SeriesData, dark_mode: bool) -> CharmingChart {
    // Theme-aware colors
    let (title_color, axis_color, grid_color) = if dark_mode {
        ("#e4e4e7", "#a1a1aa", "#404040")
    } else {
        ("#1f2937", "#6b7280", "#e5e7eb")
    };

    let (light_color, ac_color) = if dark_mode {
        ("#34d058", "#58a6ff")
    } else {
        ("#0aba00", "#007bac")
    };

    CharmingChart::new()
        .title(
            Title::new()
                .text(series_data.title)
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
        )
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series_data.labels.clone())
                .axis_label(AxisLabel::new().rotate(45).color(axis_color).interval(5)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(series_data.unit)
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .name("Illumination")
                .data(series_data.light.clone())
                .line_style(LineStyle::new().color(light_color)),
        )
        .series(
            Line::new()
                .name("Air Conditioner")
                .data(series_data.ac.clone())
                .line_style(LineStyle::new().color(ac_color)),
        )
}
