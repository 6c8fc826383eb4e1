use time::Duration;

use super::prelude::*;
use crate::gateways::token_cache::TokenCache;

pub const TOKEN_VALIDITY: Duration = Duration::hours(1);

const VERIFY_KEY_PREFIX: &str = "verify:";
const RESET_KEY_PREFIX: &str = "reset:";

pub fn issue_verification_token<C: TokenCache + ?Sized>(cache: &C, user_id: &Id) -> String {
    issue_token(cache, VERIFY_KEY_PREFIX, user_id)
}

pub fn issue_reset_token<C: TokenCache + ?Sized>(cache: &C, user_id: &Id) -> String {
    issue_token(cache, RESET_KEY_PREFIX, user_id)
}

pub fn consume_verification_token<C: TokenCache + ?Sized>(cache: &C, token: &str) -> Result<Id> {
    consume_token(cache, VERIFY_KEY_PREFIX, token)
}

pub fn consume_reset_token<C: TokenCache + ?Sized>(cache: &C, token: &str) -> Result<Id> {
    consume_token(cache, RESET_KEY_PREFIX, token)
}

fn issue_token<C: TokenCache + ?Sized>(cache: &C, key_prefix: &str, user_id: &Id) -> String {
    let token = UserNonce {
        user_id: user_id.clone(),
        nonce: Nonce::new(),
    }
    .encode_to_string();
    cache.set_with_ttl(
        &format!("{key_prefix}{token}"),
        user_id.as_str(),
        TOKEN_VALIDITY,
    );
    token
}

fn consume_token<C: TokenCache + ?Sized>(cache: &C, key_prefix: &str, token: &str) -> Result<Id> {
    // Reject malformed tokens before touching the cache.
    let user_nonce = UserNonce::decode_from_str(token)?;
    let Some(user_id) = cache.consume(&format!("{key_prefix}{token}")) else {
        return Err(Error::TokenInvalid);
    };
    debug_assert_eq!(user_nonce.user_id.as_str(), user_id.as_str());
    Ok(user_id.into())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockTokenCache, *};

    #[test]
    fn issue_and_consume_verification_token() {
        let cache = MockTokenCache::default();
        let user_id = Id::new();
        let token = issue_verification_token(&cache, &user_id);
        assert!(!token.is_empty());
        assert_eq!(user_id, consume_verification_token(&cache, &token).unwrap());
    }

    #[test]
    fn tokens_are_single_use() {
        let cache = MockTokenCache::default();
        let user_id = Id::new();
        let token = issue_verification_token(&cache, &user_id);
        assert!(consume_verification_token(&cache, &token).is_ok());
        assert!(matches!(
            consume_verification_token(&cache, &token),
            Err(Error::TokenInvalid)
        ));
    }

    #[test]
    fn key_namespaces_are_separate() {
        let cache = MockTokenCache::default();
        let user_id = Id::new();
        let token = issue_reset_token(&cache, &user_id);
        assert!(consume_verification_token(&cache, &token).is_err());
        assert!(consume_reset_token(&cache, &token).is_ok());
    }

    #[test]
    fn reject_malformed_token() {
        let cache = MockTokenCache::default();
        assert!(matches!(
            consume_verification_token(&cache, "not base58 !!!"),
            Err(Error::TokenInvalid)
        ));
    }
}
