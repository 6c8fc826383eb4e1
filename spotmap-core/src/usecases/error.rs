use thiserror::Error;

use crate::{authorization, repositories};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("Email not confirmed")]
    EmailNotConfirmed,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Bounding box is invalid")]
    Bbox,
    #[error("Invalid radius")]
    Radius,
    #[error("Invalid distance")]
    Distance,
    #[error("Vote value out of range")]
    VoteValue,
    #[error("Empty report reason")]
    EmptyReason,
    #[error("Invalid file name")]
    FileName,
    #[error("Invalid content type")]
    ContentType,
    #[error("Invalid content length")]
    ContentLength,
    #[error("Token invalid")]
    TokenInvalid,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<spotmap_entities::password::ParseError> for Error {
    fn from(_: spotmap_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<spotmap_entities::email::EmailAddressParseError> for Error {
    fn from(_: spotmap_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<spotmap_entities::nonce::UserNonceDecodingError> for Error {
    fn from(_: spotmap_entities::nonce::UserNonceDecodingError) -> Self {
        Self::TokenInvalid
    }
}

impl From<spotmap_entities::vote::VoteValueOutOfRange> for Error {
    fn from(_: spotmap_entities::vote::VoteValueOutOfRange) -> Self {
        Self::VoteValue
    }
}

impl From<authorization::user::Error> for Error {
    fn from(_: authorization::user::Error) -> Self {
        Self::Forbidden
    }
}
