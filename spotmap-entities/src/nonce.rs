use std::{fmt, str::FromStr};

use uuid::Uuid;

use crate::id::Id;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nonce(Uuid);

impl Nonce {
    pub const STR_LEN: usize = 32;

    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for Nonce {
    fn from(from: Uuid) -> Self {
        Self(from)
    }
}

#[derive(Debug)]
pub struct NonceParseError;

impl fmt::Display for NonceParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "Invalid Nonce")
    }
}

impl FromStr for Nonce {
    type Err = NonceParseError;

    fn from_str(nonce_str: &str) -> Result<Self, Self::Err> {
        nonce_str
            .parse::<Uuid>()
            .map(Into::into)
            .map_err(|_| NonceParseError)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0.as_simple())
    }
}

/// An opaque, base58-encoded single-use token that binds a
/// nonce to a user id.
///
/// Used for e-mail verification and password reset tokens.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserNonce {
    pub user_id: Id,
    pub nonce: Nonce,
}

#[derive(Debug)]
pub enum UserNonceDecodingError {
    Bs58(bs58::decode::Error),
    Utf8(std::string::FromUtf8Error),
    TooShort(usize),
    Parse(NonceParseError),
}

impl fmt::Display for UserNonceDecodingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "Invalid user token")
    }
}

impl UserNonce {
    pub fn encode_to_string(&self) -> String {
        let nonce = self.nonce.to_string();
        debug_assert_eq!(Nonce::STR_LEN, nonce.len());
        let mut concat = String::with_capacity(self.user_id.as_str().len() + nonce.len());
        concat += self.user_id.as_str();
        concat += &nonce;
        bs58::encode(concat).into_string()
    }

    pub fn decode_from_str(encoded: &str) -> Result<UserNonce, UserNonceDecodingError> {
        let decoded = bs58::decode(encoded)
            .into_vec()
            .map_err(UserNonceDecodingError::Bs58)?;
        let mut concat = String::from_utf8(decoded).map_err(UserNonceDecodingError::Utf8)?;
        if concat.len() <= Nonce::STR_LEN {
            return Err(UserNonceDecodingError::TooShort(concat.len()));
        }
        let id_len = concat.len() - Nonce::STR_LEN;
        // The split index may fall inside a multi-byte character.
        let nonce = concat
            .get(id_len..)
            .ok_or(UserNonceDecodingError::Parse(NonceParseError))?
            .parse::<Nonce>()
            .map_err(UserNonceDecodingError::Parse)?;
        concat.truncate(id_len);
        Ok(Self {
            user_id: concat.into(),
            nonce,
        })
    }
}
