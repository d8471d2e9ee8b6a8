//! Keyed response cache shared by the data-fetching hooks.
//!
//! Keys are endpoint paths plus their significant parameters. Each key holds
//! the last resolved payload and a revision counter; bumping the revision
//! wakes every subscribed hook so it refetches.
//!
//! Invalidation contract:
//! - `login` / `logout` invalidate [`keys::ME`]
//! - `set_credential_from_url` invalidates [`keys::CREDENTIAL`]
//! - `delete_records` invalidates [`keys::RECORD_COUNT`]

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use yew::Callback;

/// Well-known cache keys.
pub mod keys {
    use crate::models::records::{InfoType, PeriodUnit};

    pub const LATEST_RECORD: &str = "/info/latest_record";
    pub const STATISTICS: &str = "/info/statistics";
    pub const RECORD_COUNT: &str = "/info/record_count";
    pub const ME: &str = "/auth/me";
    pub const CREDENTIAL: &str = "/collector/credential";

    pub fn recent_records(days: u32, info_type: InfoType) -> String {
        format!("/info/recent_records?days={days}&info_type={}", info_type.code())
    }

    pub fn period_usage(unit: PeriodUnit, count: u32, recent_on_top: bool) -> String {
        format!(
            "/info/period_usage?period={}&period_count={count}&recent_on_top={recent_on_top}",
            unit.code()
        )
    }
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<String, Rc<dyn Any>>,
    revisions: HashMap<String, u64>,
    listeners: Vec<Listener>,
    next_listener_id: usize,
}

struct Listener {
    id: usize,
    key: String,
    callback: Callback<u64>,
}

thread_local! {
    static CACHE: RefCell<CacheInner> = RefCell::new(CacheInner::default());
}

/// Last resolved payload for `key`, if any.
pub fn get<T: 'static>(key: &str) -> Option<Rc<T>> {
    CACHE
        .with(|cache| cache.borrow().entries.get(key).cloned())
        .and_then(|entry| entry.downcast::<T>().ok())
}

/// Stores the payload resolved for `key`.
pub fn insert<T: 'static>(key: &str, value: Rc<T>) {
    CACHE.with(|cache| {
        cache.borrow_mut().entries.insert(key.to_string(), value);
    });
}

/// Current revision of `key`; starts at zero.
pub fn revision(key: &str) -> u64 {
    CACHE.with(|cache| cache.borrow().revisions.get(key).copied().unwrap_or(0))
}

/// Drops the cached payload, bumps the key's revision and wakes every
/// subscribed hook. Callbacks run outside the borrow so a listener may
/// touch the cache again.
pub fn invalidate(key: &str) {
    let notify = CACHE.with(|cache| {
        let mut inner = cache.borrow_mut();
        inner.entries.remove(key);
        let revision = inner.revisions.entry(key.to_string()).or_insert(0);
        *revision += 1;
        let revision = *revision;
        inner
            .listeners
            .iter()
            .filter(|listener| listener.key == key)
            .map(|listener| (listener.callback.clone(), revision))
            .collect::<Vec<_>>()
    });

    for (callback, revision) in notify {
        callback.emit(revision);
    }
}

/// Subscribes to invalidations of `key`. The subscription is removed when the
/// returned guard drops.
pub fn subscribe(key: &str, callback: Callback<u64>) -> Subscription {
    CACHE.with(|cache| {
        let mut inner = cache.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push(Listener {
            id,
            key: key.to_string(),
            callback,
        });
        Subscription { id }
    })
}

/// Guard keeping a cache subscription alive.
pub struct Subscription {
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let id = self.id;
        CACHE.with(|cache| {
            cache
                .borrow_mut()
                .listeners
                .retain(|listener| listener.id != id);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_insert_get_round_trip() {
        insert("test/round_trip", Rc::new(41_u32));
        assert_eq!(get::<u32>("test/round_trip"), Some(Rc::new(41)));
        assert_eq!(get::<String>("test/round_trip"), None);
        assert_eq!(get::<u32>("test/missing"), None);
    }

    #[test]
    fn test_invalidate_bumps_revision_and_drops_payload() {
        insert("test/invalidate", Rc::new(1_u32));
        let before = revision("test/invalidate");

        invalidate("test/invalidate");

        assert_eq!(revision("test/invalidate"), before + 1);
        assert_eq!(get::<u32>("test/invalidate"), None);
    }

    #[test]
    fn test_subscription_is_notified_until_dropped() {
        let seen = Rc::new(Cell::new(0_u64));
        let seen_in_callback = seen.clone();
        let subscription = subscribe(
            "test/subscribe",
            Callback::from(move |revision| seen_in_callback.set(revision)),
        );

        invalidate("test/subscribe");
        let first = seen.get();
        assert!(first > 0);

        drop(subscription);
        invalidate("test/subscribe");
        assert_eq!(seen.get(), first);
    }

    #[test]
    fn test_invalidating_one_key_leaves_others_alone() {
        insert("test/key_a", Rc::new(1_u32));
        insert("test/key_b", Rc::new(2_u32));

        invalidate("test/key_a");

        assert_eq!(get::<u32>("test/key_b"), Some(Rc::new(2)));
    }
}
