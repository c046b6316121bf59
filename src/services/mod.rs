mod error;
mod fs_product_repository;
#[cfg(test)]
mod memory_product_repository;
mod metadata_codec;

pub use error::StorageError;
pub use fs_product_repository::FsProductRepository;
#[cfg(test)]
pub use memory_product_repository::InMemoryProductRepository;

use std::sync::Arc;

use crate::{
    application::repositories::product_repository::ProductRepository,
    domain::config::storage::StorageConfig,
};

/// Builds the filesystem-backed repository, creating the storage root if needed.
pub async fn create_product_repository(
    config: StorageConfig,
) -> Result<Arc<dyn ProductRepository>, StorageError> {
    tokio::fs::create_dir_all(&config.storage_path)
        .await
        .map_err(|e| {
            StorageError::Io(format!(
                "Cannot create storage root {}: {}",
                config.storage_path.display(),
                e
            ))
        })?;

    Ok(Arc::new(FsProductRepository::new(config)))
}
