use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorCardProps {
    pub title: String,
    pub description: String,
}

/// Card shown when a section cannot render its data.
#[function_component(ErrorCard)]
pub fn error_card(props: &ErrorCardProps) -> Html {
    html! {
        <div class="error-card">
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
        </div>
    }
}
