use time::Duration;

/// An expiring key-value map for short-lived tokens.
///
/// Entries vanish after their time-to-live has elapsed. There is
/// no way to write an entry without an expiry.
pub trait TokenCache {
    fn get(&self, key: &str) -> Option<String>;
    fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration);
    fn delete(&self, key: &str);

    // Read then delete, so a token can only be redeemed once.
    fn consume(&self, key: &str) -> Option<String> {
        let value = self.get(key)?;
        self.delete(key);
        Some(value)
    }
}
