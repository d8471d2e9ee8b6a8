use yew::prelude::*;

use crate::models::records::{InfoType, PeriodUnit};

#[derive(Clone, PartialEq)]
pub struct SegmentedOption<T: PartialEq + Clone> {
    pub label: String,
    pub value: T,
}

#[derive(Properties, PartialEq)]
pub struct SegmentedProps<T: PartialEq + Clone + 'static> {
    pub value: T,
    pub options: Vec<SegmentedOption<T>>,
    pub on_change: Callback<T>,
}

/// Segmented control: one button per option, the selected one highlighted.
#[function_component(Segmented)]
pub fn segmented<T: PartialEq + Clone + 'static>(props: &SegmentedProps<T>) -> Html {
    html! {
        <div class="segmented" role="group">
            {
                props.options.iter().map(|option| {
                    let active = option.value == props.value;
                    let on_change = props.on_change.clone();
                    let value = option.value.clone();
                    let onclick = Callback::from(move |_| on_change.emit(value.clone()));
                    let class = if active { "segmented-option active" } else { "segmented-option" };
                    html! {
                        <button {class} {onclick}>{&option.label}</button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DiagramDaysSegmentedProps {
    pub value: u32,
    pub on_change: Callback<u32>,
}

/// Day-window selector for the trend chart.
#[function_component(DiagramDaysSegmented)]
pub fn diagram_days_segmented(props: &DiagramDaysSegmentedProps) -> Html {
    let options = vec![
        SegmentedOption {
            label: "24 Hours".to_string(),
            value: 1,
        },
        SegmentedOption {
            label: "3 Days".to_string(),
            value: 3,
        },
        SegmentedOption {
            label: "Weekly".to_string(),
            value: 7,
        },
        SegmentedOption {
            label: "Monthly".to_string(),
            value: 30,
        },
    ];

    html! {
        <Segmented<u32> value={props.value} {options} on_change={props.on_change.clone()} />
    }
}

#[derive(Properties, PartialEq)]
pub struct InfoTypeSegmentedProps {
    pub value: InfoType,
    pub on_change: Callback<InfoType>,
}

/// Balance/usage selector for the trend chart.
#[function_component(InfoTypeSegmented)]
pub fn info_type_segmented(props: &InfoTypeSegmentedProps) -> Html {
    let options = InfoType::all()
        .iter()
        .map(|info_type| SegmentedOption {
            label: info_type.label().to_string(),
            value: *info_type,
        })
        .collect::<Vec<_>>();

    html! {
        <Segmented<InfoType> value={props.value} {options} on_change={props.on_change.clone()} />
    }
}

#[derive(Properties, PartialEq)]
pub struct PeriodUnitSegmentedProps {
    pub value: PeriodUnit,
    pub on_change: Callback<PeriodUnit>,
}

/// Aggregation-unit selector for the period usage table.
#[function_component(PeriodUnitSegmented)]
pub fn period_unit_segmented(props: &PeriodUnitSegmentedProps) -> Html {
    let options = PeriodUnit::all()
        .iter()
        .map(|unit| SegmentedOption {
            label: unit.label().to_string(),
            value: *unit,
        })
        .collect::<Vec<_>>();

    html! {
        <Segmented<PeriodUnit> value={props.value} {options} on_change={props.on_change.clone()} />
    }
}

#[derive(Properties, PartialEq)]
pub struct ItemCountSegmentedProps {
    pub value: u32,
    pub on_change: Callback<u32>,
}

/// Row-count selector for the period usage table.
#[function_component(ItemCountSegmented)]
pub fn item_count_segmented(props: &ItemCountSegmentedProps) -> Html {
    let options = [7, 14, 30]
        .iter()
        .map(|count| SegmentedOption {
            label: count.to_string(),
            value: *count,
        })
        .collect::<Vec<_>>();

    html! {
        <Segmented<u32> value={props.value} {options} on_change={props.on_change.clone()} />
    }
}
