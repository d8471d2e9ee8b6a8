use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::DataState;
use crate::models::records::{BalanceRecord, InfoType};
use crate::services::{api, cache};
use wasm_bindgen_futures::spawn_local;

/// Balance snapshots covering the last `days` days. Refetches when the
/// parameters change; stale cached data is shown while the fetch is in
/// flight.
#[hook]
pub fn use_recent_records(
    days: u32,
    info_type: InfoType,
) -> UseStateHandle<DataState<Vec<BalanceRecord>>> {
    let state = use_state(|| {
        cache::get::<Vec<BalanceRecord>>(&cache::keys::recent_records(days, info_type))
            .map_or(DataState::Loading, DataState::Loaded)
    });

    {
        let state = state.clone();
        use_effect_with((days, info_type), move |(days, info_type)| {
            let days = *days;
            let info_type = *info_type;
            let key = cache::keys::recent_records(days, info_type);

            // Show stale data when we have it, a spinner otherwise.
            match cache::get::<Vec<BalanceRecord>>(&key) {
                Some(cached) => state.set(DataState::Loaded(cached)),
                None => state.set(DataState::Loading),
            }

            spawn_local(async move {
                match api::fetch_recent_records(days, info_type).await {
                    Ok(records) => {
                        let records = Rc::new(records);
                        cache::insert(&key, records.clone());
                        state.set(DataState::Loaded(records));
                    }
                    Err(e) => state.set(DataState::Error(e)),
                }
            });

            || () // Cleanup
        });
    }

    state
}
