use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::DataState;
use crate::models::records::{RecordCount, Statistics};
use crate::services::{api, cache};
use wasm_bindgen_futures::spawn_local;

/// Aggregate usage statistics for the summary block.
#[hook]
pub fn use_statistics() -> UseStateHandle<DataState<Statistics>> {
    let state = use_state(|| {
        cache::get::<Statistics>(cache::keys::STATISTICS)
            .map_or(DataState::Loading, DataState::Loaded)
    });

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_statistics().await {
                    Ok(stats) => {
                        let stats = Rc::new(stats);
                        cache::insert(cache::keys::STATISTICS, stats.clone());
                        state.set(DataState::Loaded(stats));
                    }
                    Err(e) => state.set(DataState::Error(e)),
                }
            });

            || () // Cleanup
        });
    }

    state
}

/// Stored-record counters for the dashboard footer. Revalidated after a
/// range deletion through the cache contract.
#[hook]
pub fn use_record_count() -> UseStateHandle<DataState<RecordCount>> {
    let state = use_state(|| {
        cache::get::<RecordCount>(cache::keys::RECORD_COUNT)
            .map_or(DataState::Loading, DataState::Loaded)
    });
    let revision = use_state(|| cache::revision(cache::keys::RECORD_COUNT));

    {
        let revision = revision.clone();
        use_effect_with((), move |_| {
            let subscription = cache::subscribe(
                cache::keys::RECORD_COUNT,
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
                match api::fetch_record_count().await {
                    Ok(count) => {
                        let count = Rc::new(count);
                        cache::insert(cache::keys::RECORD_COUNT, count.clone());
                        state.set(DataState::Loaded(count));
                    }
                    Err(e) => state.set(DataState::Error(e)),
                }
            });

            || () // Cleanup
        });
    }

    state
}
