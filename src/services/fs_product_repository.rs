use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use chrono::Local;
use tokio::fs;
use uuid::Uuid;

use crate::{
    application::{error::ApplicationError, repositories::product_repository::ProductRepository},
    domain::{
        config::storage::StorageConfig,
        models::product::{is_image_filename, ImageLocation, ImageUpload, Product},
    },
    services::{
        error::StorageError,
        metadata_codec::{self, METADATA_FILENAME},
    },
};

pub const PRODUCT_DIR_PREFIX: &str = "product_";

/// Stores each product in its own directory under the configured root:
///
/// ```text
/// <root>/product_<id>/image<ext>
/// <root>/product_<id>/product-info.json
/// ```
pub struct FsProductRepository {
    config: StorageConfig,
}

impl FsProductRepository {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    fn product_dir(&self, product_id: &str) -> Result<PathBuf, StorageError> {
        if product_id.is_empty()
            || product_id.contains(['/', '\\'])
            || product_id.contains("..")
        {
            return Err(StorageError::NotFound(product_id.to_string()));
        }

        Ok(self
            .config
            .storage_path
            .join(format!("{}{}", PRODUCT_DIR_PREFIX, product_id)))
    }

    async fn write_product(&self, upload: ImageUpload) -> Result<Product, StorageError> {
        let product_id = Uuid::new_v4().to_string();
        let product_dir = self.product_dir(&product_id)?;

        fs::create_dir_all(&product_dir).await.map_err(|e| {
            StorageError::Io(format!(
                "Cannot create directory {}: {}",
                product_dir.display(),
                e
            ))
        })?;

        let image_path = product_dir.join(format!("image{}", upload.extension()));
        fs::write(&image_path, &upload.content).await.map_err(|e| {
            StorageError::Io(format!("Cannot write {}: {}", image_path.display(), e))
        })?;

        let product = Product {
            name: upload.product_name(&product_id),
            description: upload.product_description(),
            folder_path: absolute(&product_dir).display().to_string(),
            image_url: self.config.image_url(&product_id),
            file_size: upload.size(),
            content_type: upload.content_type,
            created_at: Local::now().naive_local(),
            id: product_id,
        };

        let metadata_path = product_dir.join(METADATA_FILENAME);
        fs::write(&metadata_path, metadata_codec::encode(&product)?)
            .await
            .map_err(|e| {
                StorageError::Io(format!("Cannot write {}: {}", metadata_path.display(), e))
            })?;

        Ok(product)
    }

    async fn read_metadata(&self, product_id: &str) -> Result<Product, StorageError> {
        let metadata_path = self.product_dir(product_id)?.join(METADATA_FILENAME);

        let bytes = match fs::read(&metadata_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(product_id.to_string()));
            }
            Err(e) => {
                return Err(StorageError::Corrupt(format!(
                    "Cannot read {}: {}",
                    metadata_path.display(),
                    e
                )));
            }
        };

        metadata_codec::decode(&bytes).map_err(|e| match e {
            StorageError::Corrupt(msg) => StorageError::Corrupt(format!("{}: {}", product_id, msg)),
            other => other,
        })
    }

    async fn find_image(&self, product_id: &str) -> Result<ImageLocation, StorageError> {
        let product_dir = self.product_dir(product_id)?;

        let mut entries = match fs::read_dir(&product_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(product_id.to_string()));
            }
            Err(e) => {
                return Err(StorageError::Io(format!(
                    "Cannot read {}: {}",
                    product_dir.display(),
                    e
                )));
            }
        };

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?
        {
            let filename = entry.file_name().to_string_lossy().into_owned();
            if is_image_filename(&filename) {
                return Ok(ImageLocation {
                    path: entry.path(),
                    filename,
                });
            }
        }

        Err(StorageError::NotFound(format!(
            "No image file for product {}",
            product_id
        )))
    }

    async fn scan_product_ids(&self) -> Result<Vec<String>, StorageError> {
        let root = &self.config.storage_path;

        let mut entries = match fs::read_dir(root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::Io(format!(
                    "Cannot read {}: {}",
                    root.display(),
                    e
                )));
            }
        };

        let mut product_ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?
        {
            let is_dir = fs::metadata(entry.path())
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false);
            if !is_dir {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(product_id) = name.strip_prefix(PRODUCT_DIR_PREFIX) {
                product_ids.push(product_id.to_string());
            }
        }

        Ok(product_ids)
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[async_trait]
impl ProductRepository for FsProductRepository {
    async fn create(&self, upload: ImageUpload) -> Result<Product, ApplicationError> {
        Ok(self.write_product(upload).await?)
    }

    async fn load_metadata(&self, product_id: &str) -> Result<Product, ApplicationError> {
        Ok(self.read_metadata(product_id).await?)
    }

    async fn locate_image(&self, product_id: &str) -> Result<ImageLocation, ApplicationError> {
        Ok(self.find_image(product_id).await?)
    }

    async fn list_product_ids(&self) -> Result<Vec<String>, ApplicationError> {
        Ok(self.scan_product_ids().await?)
    }
}
