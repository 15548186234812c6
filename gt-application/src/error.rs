use std::io;

use thiserror::Error;

use gt_core::{
    gateways::{feed::FeedError, identity::Error as IdentityError},
    repositories::Error as RepoError,
    usecases::Error as ParameterError,
};

pub use gt_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<FeedError> for AppError {
    fn from(err: FeedError) -> AppError {
        AppError::Business(BError::Feed(err))
    }
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> AppError {
        AppError::Business(BError::Identity(err))
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}
