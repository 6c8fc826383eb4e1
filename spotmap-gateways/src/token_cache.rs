use std::collections::HashMap;

use parking_lot::Mutex;
use time::Duration;

use spotmap_core::gateways::token_cache::TokenCache;
use spotmap_entities::time::Timestamp;

/// A process-local token cache.
///
/// Expired entries are filtered on read and reclaimed lazily by
/// [`sweep`](Self::sweep).
#[derive(Debug, Default)]
pub struct InMemoryTokenCache {
    entries: Mutex<HashMap<String, (String, Timestamp)>>,
}

impl InMemoryTokenCache {
    pub fn sweep(&self) {
        let now = Timestamp::now();
        self.entries
            .lock()
            .retain(|_, (_, expires_at)| *expires_at > now);
    }
}

impl TokenCache for InMemoryTokenCache {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock();
        let (value, expires_at) = entries.get(key)?;
        if *expires_at <= Timestamp::now() {
            return None;
        }
        Some(value.clone())
    }

    fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) {
        let expires_at = Timestamp::now() + ttl;
        self.entries
            .lock()
            .insert(key.to_string(), (value.to_string(), expires_at));
    }

    fn delete(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_delete() {
        let cache = InMemoryTokenCache::default();
        cache.set_with_ttl("k", "v", Duration::minutes(1));
        assert_eq!(cache.get("k").as_deref(), Some("v"));
        cache.delete("k");
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn expired_entries_are_not_returned() {
        let cache = InMemoryTokenCache::default();
        cache.set_with_ttl("k", "v", Duration::milliseconds(-1));
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn sweep_reclaims_expired_entries() {
        let cache = InMemoryTokenCache::default();
        cache.set_with_ttl("stale", "v", Duration::milliseconds(-1));
        cache.set_with_ttl("fresh", "v", Duration::minutes(1));
        cache.sweep();
        let entries = cache.entries.lock();
        assert!(!entries.contains_key("stale"));
        assert!(entries.contains_key("fresh"));
    }

    #[test]
    fn consume_is_single_use() {
        let cache = InMemoryTokenCache::default();
        cache.set_with_ttl("k", "v", Duration::minutes(1));
        assert_eq!(cache.consume("k").as_deref(), Some("v"));
        assert_eq!(cache.consume("k"), None);
    }
}
