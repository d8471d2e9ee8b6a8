use chrono::Utc;
use yew::prelude::*;

use crate::utils::format::ago_label;

#[derive(Properties, PartialEq)]
pub struct LastUpdateTagProps {
    /// Timestamp of the latest snapshot, when known.
    pub timestamp: Option<i64>,
    /// If `true`, the info is still loading and `timestamp` may be absent.
    #[prop_or(false)]
    pub is_loading: bool,
}

/// Tag showing how long ago the latest snapshot was caught.
#[function_component(LastUpdateTag)]
pub fn last_update_tag(props: &LastUpdateTagProps) -> Html {
    let error = !props.is_loading && props.timestamp.is_none();

    let label = if error {
        "Error".to_string()
    } else if props.is_loading {
        "--".to_string()
    } else {
        ago_label(props.timestamp.unwrap_or(0), Utc::now())
    };

    let class = if error {
        "last-update error"
    } else if props.is_loading {
        "last-update loading"
    } else {
        "last-update"
    };

    html! {
        <div
            class={class}
            title="Snapshots are caught from the topup platform at the 30th minute of every hour."
        >
            <p>{"Last Update: "}<span class="last-update-value">{label}</span></p>
        </div>
    }
}
