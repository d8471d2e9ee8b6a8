use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::DataState;
use crate::models::records::BalanceRecord;
use crate::services::{api, cache};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Latest balance snapshot, polled on an interval and revalidated whenever
/// its cache key is invalidated.
#[hook]
pub fn use_balance() -> UseStateHandle<DataState<BalanceRecord>> {
    let state = use_state(|| {
        cache::get::<BalanceRecord>(cache::keys::LATEST_RECORD)
            .map_or(DataState::Loading, DataState::Loaded)
    });
    let revision = use_state(|| cache::revision(cache::keys::LATEST_RECORD));
    let trigger = use_state(|| 0u32); // Polling trigger

    // Refetch when the cache key is invalidated elsewhere.
    {
        let revision = revision.clone();
        use_effect_with((), move |_| {
            let subscription = cache::subscribe(
                cache::keys::LATEST_RECORD,
                Callback::from(move |value| revision.set(value)),
            );
            move || drop(subscription)
        });
    }

    {
        let state = state.clone();
        let trigger = trigger.clone();
        let trigger_value = *trigger;
        let revision_value = *revision;

        use_effect_with((trigger_value, revision_value), move |_| {
            let state = state.clone();
            let trigger = trigger.clone();

            spawn_local(async move {
                match api::fetch_latest_record().await {
                    Ok(record) => {
                        let record = Rc::new(record);
                        cache::insert(cache::keys::LATEST_RECORD, record.clone());
                        state.set(DataState::Loaded(record));
                    }
                    Err(e) => state.set(DataState::Error(e)),
                }

                // Schedule next poll if enabled
                if Config::ENABLE_AUTO_REFRESH {
                    TimeoutFuture::new(Config::POLLING_INTERVAL_MS).await;
                    trigger.set(*trigger + 1); // Trigger next fetch
                }
            });

            || () // Cleanup
        });
    }

    state
}
