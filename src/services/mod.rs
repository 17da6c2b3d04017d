use thiserror::Error;

use crate::pricing::PricingError;
use crate::repository::RepositoryError;

pub mod brands;
pub mod categories;
pub mod discounts;
pub mod products;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested entity does not exist.
    #[error("not found")]
    NotFound,
    /// Form input failed validation or sanitization.
    #[error("invalid form input: {0}")]
    Form(String),
    /// A discount assignment would produce an invalid price.
    #[error(transparent)]
    Pricing(#[from] PricingError),
    /// The repository failed for a reason other than a missing record.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

/// Result type returned by service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
