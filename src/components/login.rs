use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::error_card::ErrorCard;
use crate::components::notice::Notice;
use crate::hooks::use_session::use_session;
use crate::models::error::AppError;
use crate::services::auth_api;

#[derive(Properties, PartialEq)]
pub struct AccountBlockProps {
    pub notify: Callback<Notice>,
}

/// Login form, or the logged-in role with a logout button. Login and logout
/// invalidate the session cache key, so this block refreshes itself after
/// either operation settles.
#[function_component(AccountBlock)]
pub fn account_block(props: &AccountBlockProps) -> Html {
    let session = use_session();

    if session.is_loading() {
        return html! {
            <div class="account-block">
                <div class="spinner"></div>
            </div>
        };
    }

    if let Some(error) = session.error() {
        return html! {
            <ErrorCard title="Role Info Error" description={error.to_string()} />
        };
    }

    let role = session.data().and_then(|role| (**role).clone());

    match role {
        Some(role) => {
            let onclick = {
                let notify = props.notify.clone();
                Callback::from(move |_| {
                    let notify = notify.clone();
                    notify.emit(Notice::pending("Logging out..."));
                    spawn_local(async move {
                        match auth_api::logout().await {
                            Ok(()) => notify.emit(Notice::success("Logged out")),
                            Err(e) => notify.emit(Notice::failure(&e)),
                        }
                    });
                })
            };

            html! {
                <div class="account-block">
                    <div class="account-row">
                        <p>{"Logged in as role: "}<span class="role-tag">{role}</span></p>
                        <button class="button danger" {onclick}>{"Logout"}</button>
                    </div>
                </div>
            }
        }
        None => html! { <LoginForm notify={props.notify.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
struct LoginFormProps {
    notify: Callback<Notice>,
}

#[function_component(LoginForm)]
fn login_form(props: &LoginFormProps) -> Html {
    let name = use_state(String::new);
    let password = use_state(String::new);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let password = password.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = (*name).clone();
            let password = (*password).clone();
            let notify = notify.clone();

            if let Err(error) = validate_credentials(&name, &password) {
                notify.emit(Notice::failure(&error));
                return;
            }

            notify.emit(Notice::pending("Logging into role..."));
            spawn_local(async move {
                match auth_api::login(&name, &password).await {
                    Ok(()) => notify.emit(Notice::success("Logged in")),
                    Err(e) => notify.emit(Notice::failure(&e)),
                }
            });
        })
    };

    html! {
        <form class="account-block login-form" {onsubmit}>
            <label>
                {"Role Name"}
                <input
                    type="text"
                    placeholder="Enter role name here"
                    value={(*name).clone()}
                    oninput={on_name_input}
                />
            </label>
            <label>
                {"Password"}
                <input
                    type="password"
                    placeholder="Password for this role"
                    value={(*password).clone()}
                    oninput={on_password_input}
                />
            </label>
            <button class="button primary" type="submit">{"Verify Role"}</button>
        </form>
    }
}

/// Form-level checks mirrored from the login form rules.
fn validate_credentials(name: &str, password: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::InvalidParameter(
            "Role name can not be empty".to_string(),
        ));
    }
    if name.len() > 99 {
        return Err(AppError::InvalidParameter(
            "Maximum role name length is 99".to_string(),
        ));
    }
    if password.is_empty() {
        return Err(AppError::InvalidParameter(
            "Please provide password to login as this role".to_string(),
        ));
    }
    if password.len() > 99 {
        return Err(AppError::InvalidParameter(
            "Maximum password length is 99".to_string(),
        ));
    }
    Ok(())
}
