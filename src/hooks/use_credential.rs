use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::DataState;
use crate::models::records::CredentialInfo;
use crate::services::{cache, collector_api};
use wasm_bindgen_futures::spawn_local;

/// Scraping-credential header values, admin only. A credential update
/// invalidates the backing cache key, which refetches this state.
#[hook]
pub fn use_credential() -> UseStateHandle<DataState<CredentialInfo>> {
    let state = use_state(|| {
        cache::get::<CredentialInfo>(cache::keys::CREDENTIAL)
            .map_or(DataState::Loading, DataState::Loaded)
    });
    let revision = use_state(|| cache::revision(cache::keys::CREDENTIAL));

    {
        let revision = revision.clone();
        use_effect_with((), move |_| {
            let subscription = cache::subscribe(
                cache::keys::CREDENTIAL,
                Callback::from(move |value| revision.set(value)),
            );
            move || drop(subscription)
        });
    }

    {
        let state = state.clone();
        let revision_value = *revision;

        use_effect_with(revision_value, move |_| {
            let state = state.clone();

            spawn_local(async move {
                match collector_api::credential().await {
                    Ok(info) => {
                        let info = Rc::new(info);
                        cache::insert(cache::keys::CREDENTIAL, info.clone());
                        state.set(DataState::Loaded(info));
                    }
                    Err(e) => state.set(DataState::Error(e)),
                }
            });

            || () // Cleanup
        });
    }

    state
}
