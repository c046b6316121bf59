use crate::{domain::models::product::Product, services::error::StorageError};

pub const METADATA_FILENAME: &str = "product-info.json";

pub fn encode(product: &Product) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec_pretty(product)?)
}

pub fn decode(bytes: &[u8]) -> Result<Product, StorageError> {
    Ok(serde_json::from_slice(bytes)?)
}
