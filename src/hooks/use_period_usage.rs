use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::DataState;
use crate::models::records::{PeriodUnit, PeriodUsage};
use crate::services::{api, cache};
use wasm_bindgen_futures::spawn_local;

/// Aggregated usage periods for the table, keyed by unit and count.
#[hook]
pub fn use_period_usage(
    unit: PeriodUnit,
    count: u32,
    recent_on_top: bool,
) -> UseStateHandle<DataState<Vec<PeriodUsage>>> {
    let state = use_state(|| {
        cache::get::<Vec<PeriodUsage>>(&cache::keys::period_usage(unit, count, recent_on_top))
            .map_or(DataState::Loading, DataState::Loaded)
    });

    {
        let state = state.clone();
        use_effect_with(
            (unit, count, recent_on_top),
            move |(unit, count, recent_on_top)| {
                let unit = *unit;
                let count = *count;
                let recent_on_top = *recent_on_top;
                let key = cache::keys::period_usage(unit, count, recent_on_top);

                match cache::get::<Vec<PeriodUsage>>(&key) {
                    Some(cached) => state.set(DataState::Loaded(cached)),
                    None => state.set(DataState::Loading),
                }

                spawn_local(async move {
                    match api::fetch_period_usage(unit, count, recent_on_top).await {
                        Ok(periods) => {
                            let periods = Rc::new(periods);
                            cache::insert(&key, periods.clone());
                            state.set(DataState::Loaded(periods));
                        }
                        Err(e) => state.set(DataState::Error(e)),
                    }
                });

                || () // Cleanup
            },
        );
    }

    state
}
