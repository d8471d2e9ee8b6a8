use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::error_card::ErrorCard;
use crate::components::notice::Notice;
use crate::hooks::use_credential::use_credential;
use crate::services::{clipboard, collector_api};

#[derive(Properties, PartialEq)]
pub struct CredentialPanelProps {
    /// Current session role; the panel is admin only.
    pub role: Option<String>,
    pub notify: Callback<Notice>,
}

/// Settings panel for the scraping integration's credential configuration.
#[function_component(CredentialPanel)]
pub fn credential_panel(props: &CredentialPanelProps) -> Html {
    if props.role.as_deref() != Some("admin") {
        return html! {
            <ErrorCard
                title="Permission Required"
                description="Current role is not allowed to access or edit this settings info"
            />
        };
    }

    html! { <CredentialManagePart notify={props.notify.clone()} /> }
}

#[derive(Properties, PartialEq)]
struct CredentialManagePartProps {
    notify: Callback<Notice>,
}

#[function_component(CredentialManagePart)]
fn credential_manage_part(props: &CredentialManagePartProps) -> Html {
    let state = use_credential();
    let info_url = use_state(String::new);

    if let Some(error) = state.error() {
        return html! {
            <ErrorCard title="Credential Error" description={error.to_string()} />
        };
    }

    let info = state.data();
    let authorization = info.map(|i| i.authorization.clone()).unwrap_or_default();
    let collector_auth = info.map(|i| i.collector_auth.clone()).unwrap_or_default();

    let on_url_input = {
        let info_url = info_url.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            info_url.set(input.value());
        })
    };

    let on_update = {
        let info_url = info_url.clone();
        let notify = props.notify.clone();
        Callback::from(move |_| {
            let url = (*info_url).clone();
            let notify = notify.clone();

            notify.emit(Notice::pending("Updating collector credential..."));
            spawn_local(async move {
                match collector_api::set_credential_from_url(&url).await {
                    Ok(()) => notify.emit(Notice::success("Collector credential updated")),
                    Err(e) => notify.emit(Notice::failure(&e)),
                }
            });
        })
    };

    html! {
        <div class="credential-panel">
            { header_value_row("Authorization", authorization, props.notify.clone()) }
            { header_value_row("Collector_Auth", collector_auth, props.notify.clone()) }

            <div class="credential-update">
                <input
                    type="text"
                    placeholder="Copy the electric balance topup platform URL here"
                    value={(*info_url).clone()}
                    oninput={on_url_input}
                />
                <button class="button primary" onclick={on_update}>
                    {"Update Collector_Auth"}
                </button>
            </div>

            <p class="notice-text">
                {"Notice: the credential configuration is stored in the backend and \
                  will not be persisted as frontend settings in the browser."}
            </p>
        </div>
    }
}

/// Readonly header value with a copy-to-clipboard button.
fn header_value_row(label: &'static str, value: String, notify: Callback<Notice>) -> Html {
    let onclick = {
        let value = value.clone();
        Callback::from(move |_| {
            let value = value.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match clipboard::write_text(&value).await {
                    Ok(()) => notify.emit(Notice::success(format!("Header \"{label}\" copied"))),
                    Err(e) => notify.emit(Notice::failure(&e)),
                }
            });
        })
    };

    html! {
        <div class="credential-row" title={format!("Platform \"{label}\" header value")}>
            <span class="credential-label">{label}</span>
            <input type="text" readonly={true} value={value} />
            <button class="button" {onclick}>{"Copy"}</button>
        </div>
    }
}
