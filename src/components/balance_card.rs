use yew::prelude::*;

use crate::models::records::Utility;

#[derive(Properties, PartialEq)]
pub struct BalanceCardProps {
    /// Which utility balance this card shows.
    pub utility: Utility,
    /// Remaining balance in kW, absent while loading.
    pub value: Option<f64>,
    #[prop_or(false)]
    pub is_loading: bool,
}

/// Little info card showing the remaining balance of one utility.
#[function_component(BalanceCard)]
pub fn balance_card(props: &BalanceCardProps) -> Html {
    let class = classes!(
        "balance-card",
        props.utility.css_class(),
        props.is_loading.then_some("loading"),
    );

    let value = if props.is_loading {
        "- -".to_string()
    } else {
        props
            .value
            .map_or_else(|| "--".to_string(), |v| format!("{v}"))
    };

    html! {
        <div {class}>
            <p class="balance-title">{props.utility.long_label()}<br />{"BALANCE"}</p>
            <div class="balance-value-row">
                <p class="balance-value">{value}</p>
                <p class="balance-unit">{"kW"}</p>
            </div>
        </div>
    }
}
