use thiserror::Error;

/// Errors that can occur during test environment setup.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection or schema setup failure.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
