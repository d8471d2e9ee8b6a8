use yew::prelude::*;

use crate::models::error::AppError;

/// One phase of a user-triggered operation, rendered as a banner. Multi-step
/// flows emit `Pending` first, then `Success` or `Failure` when the
/// operation settles.
#[derive(Clone, PartialEq, Debug)]
pub enum Notice {
    Pending(String),
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn pending(message: impl Into<String>) -> Self {
        Self::Pending(message.into())
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    /// Failure banner text: the message plus the error kind in parentheses.
    pub fn failure(error: &AppError) -> Self {
        Self::Failure(error.to_string())
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

/// Banner showing the latest operation notice.
#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let (class, text) = match notice {
        Notice::Pending(text) => ("notice pending", text),
        Notice::Success(text) => ("notice success", text),
        Notice::Failure(text) => ("notice failure", text),
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class={class}>
            if matches!(notice, Notice::Pending(_)) {
                <div class="spinner small"></div>
            }
            <p>{text}</p>
            <button class="notice-dismiss" {onclick} aria-label="Dismiss">{"×"}</button>
        </div>
    }
}
