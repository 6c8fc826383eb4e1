use std::io;

use thiserror::Error;

use spotmap_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use spotmap_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<spotmap_core::usecases::Error> for AppError {
    fn from(err: spotmap_core::usecases::Error) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<spotmap_entities::password::ParseError> for AppError {
    fn from(err: spotmap_entities::password::ParseError) -> Self {
        BError::from(err).into()
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl From<spotmap_entities::password::ParseError> for BError {
    fn from(_: spotmap_entities::password::ParseError) -> Self {
        Self::Parameter(ParameterError::Password)
    }
}

impl From<spotmap_entities::nonce::UserNonceDecodingError> for BError {
    fn from(_: spotmap_entities::nonce::UserNonceDecodingError) -> Self {
        Self::Parameter(ParameterError::TokenInvalid)
    }
}
