use thiserror::Error;

use crate::model::ResourceType;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("id space exhausted for {resource_type:?}")]
    IdExhausted { resource_type: ResourceType },
}
