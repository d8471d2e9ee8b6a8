use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::error_card::ErrorCard;
use crate::components::notice::Notice;
use crate::models::error::AppError;
use crate::models::records::{BalanceRecord, InfoType};
use crate::services::api;
use crate::utils::format::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct MaintenancePanelProps {
    /// Current session role; the panel is admin only.
    pub role: Option<String>,
    pub notify: Callback<Notice>,
}

/// Admin panel for inspecting and deleting stored records by time range.
#[function_component(MaintenancePanel)]
pub fn maintenance_panel(props: &MaintenancePanelProps) -> Html {
    if props.role.as_deref() != Some("admin") {
        return html! {
            <ErrorCard
                title="Permission Required"
                description="Current role is not allowed to manage stored records"
            />
        };
    }

    html! { <MaintenancePart notify={props.notify.clone()} /> }
}

#[derive(Properties, PartialEq)]
struct MaintenancePartProps {
    notify: Callback<Notice>,
}

#[function_component(MaintenancePart)]
fn maintenance_part(props: &MaintenancePartProps) -> Html {
    let start_input = use_state(String::new);
    let end_input = use_state(String::new);
    let found = use_state(|| None::<Rc<Vec<BalanceRecord>>>);

    let on_start_input = {
        let start_input = start_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            start_input.set(input.value());
        })
    };

    let on_end_input = {
        let end_input = end_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            end_input.set(input.value());
        })
    };

    let on_query = {
        let start_input = start_input.clone();
        let end_input = end_input.clone();
        let found = found.clone();
        let notify = props.notify.clone();
        Callback::from(move |_| {
            let found = found.clone();
            let notify = notify.clone();

            let range = parse_range(&start_input, &end_input);
            let (start, end) = match range {
                Ok(range) => range,
                Err(error) => {
                    notify.emit(Notice::failure(&error));
                    return;
                }
            };

            spawn_local(async move {
                match api::fetch_records_by_range(start, end, InfoType::Balance).await {
                    Ok(records) => found.set(Some(Rc::new(records))),
                    Err(e) => notify.emit(Notice::failure(&e)),
                }
            });
        })
    };

    let on_delete = {
        let start_input = start_input.clone();
        let end_input = end_input.clone();
        let found = found.clone();
        let notify = props.notify.clone();
        Callback::from(move |_| {
            let found = found.clone();
            let notify = notify.clone();

            let range = parse_range(&start_input, &end_input);
            let (start, end) = match range {
                Ok(range) => range,
                Err(error) => {
                    notify.emit(Notice::failure(&error));
                    return;
                }
            };

            notify.emit(Notice::pending("Deleting records in range..."));
            spawn_local(async move {
                match api::delete_records(start, end).await {
                    Ok(count) => {
                        found.set(None);
                        notify.emit(Notice::success(format!("Deleted {} records", count.deleted)));
                    }
                    Err(e) => notify.emit(Notice::failure(&e)),
                }
            });
        })
    };

    html! {
        <div class="maintenance-panel">
            <div class="range-inputs">
                <label>
                    {"From"}
                    <input type="datetime-local" value={(*start_input).clone()} oninput={on_start_input} />
                </label>
                <label>
                    {"To"}
                    <input type="datetime-local" value={(*end_input).clone()} oninput={on_end_input} />
                </label>
            </div>

            <div class="range-actions">
                <button class="button" onclick={on_query}>{"Query Records"}</button>
                <button class="button danger" onclick={on_delete}>{"Delete Records In Range"}</button>
            </div>

            { range_summary(found.as_ref()) }
        </div>
    }
}

fn range_summary(found: Option<&Rc<Vec<BalanceRecord>>>) -> Html {
    let Some(records) = found else {
        return html! {};
    };

    if records.is_empty() {
        return html! { <p class="range-summary">{"No records inside this range"}</p> };
    }

    let first = records.iter().map(|r| r.timestamp).min().unwrap_or(0);
    let last = records.iter().map(|r| r.timestamp).max().unwrap_or(0);

    html! {
        <p class="range-summary">
            { format!(
                "{} records inside this range, from {} to {}",
                records.len(),
                format_timestamp(first),
                format_timestamp(last),
            ) }
        </p>
    }
}

/// Parses the two datetime-local inputs into an epoch-second range.
fn parse_range(start: &str, end: &str) -> Result<(i64, i64), AppError> {
    Ok((parse_local_datetime(start)?, parse_local_datetime(end)?))
}

fn parse_local_datetime(value: &str) -> Result<i64, AppError> {
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .map(|t| t.and_utc().timestamp())
        .map_err(|_| AppError::Parse("Could not parse the time range input".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_datetime() {
        assert_eq!(parse_local_datetime("1970-01-01T00:00").unwrap(), 0);
        assert_eq!(parse_local_datetime("1970-01-02T01:30").unwrap(), 91_800);
    }

    #[test]
    fn test_parse_failure_is_parse_kind() {
        let error = parse_local_datetime("yesterday").unwrap_err();
        assert_eq!(error.kind(), "parse_error");
    }
}
