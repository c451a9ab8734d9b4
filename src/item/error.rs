use thiserror::Error;

/// Unified error type for store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Item not found: index {0} is out of range")]
    NotFound(usize),
}
