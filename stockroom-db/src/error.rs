use sea_orm::DbErr;
use thiserror::Error;
use tokio::time::error::Elapsed;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Insufficient quantity in inventory: {required} requested, {available} available")]
    InsufficientStock { required: i32, available: i32 },
    #[error("Invalid quantity {0}")]
    InvalidQuantity(i32),
    #[error("Db Error {0}")]
    Db(#[from] DbErr),
    #[error("Storage call ran past its deadline {0}")]
    Timeout(#[from] Elapsed),
}

impl StoreError {
    /// Conditions the caller caused, as opposed to storage faults.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound(_)
                | StoreError::InsufficientStock { .. }
                | StoreError::InvalidQuantity(_)
        )
    }
}
