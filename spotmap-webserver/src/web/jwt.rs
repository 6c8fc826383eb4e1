use std::collections::HashSet;

use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The user id
    sub: String,
    email: String,
    /// Expiry time as Unix timestamp
    exp: usize,
}

struct Key {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Key {
    fn new(secret: &str) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        Self {
            encoding_key,
            decoding_key,
        }
    }

    fn random() -> Self {
        use base64::Engine as _;
        let secret = base64::engine::general_purpose::STANDARD.encode(rand::random::<[u8; 32]>());
        Self::new(&secret)
    }
}

pub struct JwtState {
    key: Key,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new() -> Self {
        Self {
            key: Key::random(),
            time_valid: Duration::days(7),
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn with_secret(secret: &str) -> Self {
        Self {
            key: Key::new(secret),
            ..Self::new()
        }
    }

    pub fn generate_token(&self, user_id: &str, email: &str) -> Result<String> {
        let exp = usize::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp,
        };
        let token = encode(&Header::default(), &claims, &self.key.encoding_key)?;
        Ok(token)
    }

    pub fn validate_token_and_get_user_id(&self, token: &str) -> Result<String> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        let claims = self.decode(token)?;
        Ok(claims.sub)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens(); // do housekeeping
        self.lock().insert(token);
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().get(token).is_some()
    }

    fn remove_invalid_tokens(&self) {
        let invalid_tokens = self
            .lock()
            .iter()
            .filter(|token| self.decode(token).is_err())
            .cloned()
            .collect::<Vec<_>>();
        for token in invalid_tokens {
            self.lock().remove(&token);
        }
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}

impl Default for JwtState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_works() {
        let jwt_state = JwtState::new();
        let token = jwt_state.generate_token("user-1", "foo@bar.org").unwrap();
        let user_id = jwt_state.validate_token_and_get_user_id(&token).unwrap();
        assert_eq!(user_id, "user-1");
        jwt_state.blacklist_token(token.clone());
        assert!(jwt_state.validate_token_and_get_user_id(&token).is_err());
    }

    #[test]
    fn tokens_from_another_key_are_rejected() {
        let a = JwtState::new();
        let b = JwtState::new();
        let token = a.generate_token("user-1", "foo@bar.org").unwrap();
        assert!(b.validate_token_and_get_user_id(&token).is_err());
    }

    #[test]
    fn invalid_tokens_are_removed() {
        let jwt_state = JwtState::new();
        let token = jwt_state.generate_token("user-1", "foo@bar.org").unwrap();
        let invalid_token = "dubidubidu".to_string();
        jwt_state.blacklist_token(token.clone());
        jwt_state.blacklist_token(invalid_token.clone());
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(jwt_state.is_on_blacklist(&invalid_token));
        jwt_state.remove_invalid_tokens();
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(!jwt_state.is_on_blacklist(&invalid_token));
    }
}
