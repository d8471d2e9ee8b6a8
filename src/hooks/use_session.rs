use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::DataState;
use crate::services::{auth_api, cache};
use wasm_bindgen_futures::spawn_local;

/// Current session role name, `None` when browsing anonymously. Login and
/// logout invalidate the backing cache key, which refetches this state.
#[hook]
pub fn use_session() -> UseStateHandle<DataState<Option<String>>> {
    let state = use_state(|| {
        cache::get::<Option<String>>(cache::keys::ME).map_or(DataState::Loading, DataState::Loaded)
    });
    let revision = use_state(|| cache::revision(cache::keys::ME));

    {
        let revision = revision.clone();
        use_effect_with((), move |_| {
            let subscription = cache::subscribe(
                cache::keys::ME,
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
                match auth_api::me().await {
                    Ok(role) => {
                        let role = Rc::new(role);
                        cache::insert(cache::keys::ME, role.clone());
                        state.set(DataState::Loaded(role));
                    }
                    Err(e) => state.set(DataState::Error(e)),
                }
            });

            || () // Cleanup
        });
    }

    state
}
