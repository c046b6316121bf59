use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use chrono::Local;
use uuid::Uuid;

use crate::{
    application::{error::ApplicationError, repositories::product_repository::ProductRepository},
    domain::models::product::{is_image_filename, ImageLocation, ImageUpload, Product},
    services::error::StorageError,
};

struct Entry {
    product_id: String,
    product: Option<Product>,
    image_filename: Option<String>,
}

/// Keeps products in memory, in insertion order.
#[derive(Default)]
pub struct InMemoryProductRepository {
    entries: Mutex<Vec<Entry>>,
    create_calls: AtomicUsize,
    failing_create: Mutex<Option<usize>>,
    failing_listing: AtomicBool,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, product: Product) {
        self.entries.lock().unwrap().push(Entry {
            product_id: product.id.clone(),
            image_filename: Some("image.png".to_string()),
            product: Some(product),
        });
    }

    /// Makes the `nth` call to `create` (zero-based) fail with an I/O error.
    pub fn fail_create_at(&self, nth: usize) {
        *self.failing_create.lock().unwrap() = Some(nth);
    }

    pub fn fail_listing(&self) {
        self.failing_listing.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Adds an id whose metadata cannot be decoded.
    pub fn insert_corrupt(&self, product_id: &str) {
        self.entries.lock().unwrap().push(Entry {
            product_id: product_id.to_string(),
            product: None,
            image_filename: None,
        });
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, upload: ImageUpload) -> Result<Product, ApplicationError> {
        let call = self.create_calls.fetch_add(1, Ordering::SeqCst);
        if *self.failing_create.lock().unwrap() == Some(call) {
            return Err(StorageError::Io("disk full".to_string()).into());
        }

        let product_id = Uuid::new_v4().to_string();
        let image_filename = format!("image{}", upload.extension());

        let product = Product {
            name: upload.product_name(&product_id),
            description: upload.product_description(),
            folder_path: format!("/memory/product_{}", product_id),
            image_url: format!("http://localhost/images/{}", product_id),
            file_size: upload.size(),
            content_type: upload.content_type,
            created_at: Local::now().naive_local(),
            id: product_id.clone(),
        };

        self.entries.lock().unwrap().push(Entry {
            product_id,
            product: Some(product.clone()),
            image_filename: Some(image_filename),
        });

        Ok(product)
    }

    async fn load_metadata(&self, product_id: &str) -> Result<Product, ApplicationError> {
        let entries = self.entries.lock().unwrap();
        let entry = entries
            .iter()
            .find(|e| e.product_id == product_id)
            .ok_or_else(|| StorageError::NotFound(product_id.to_string()))?;

        match &entry.product {
            Some(product) => Ok(product.clone()),
            None => Err(StorageError::Corrupt(product_id.to_string()).into()),
        }
    }

    async fn locate_image(&self, product_id: &str) -> Result<ImageLocation, ApplicationError> {
        let entries = self.entries.lock().unwrap();
        entries
            .iter()
            .find(|e| e.product_id == product_id)
            .and_then(|e| e.image_filename.clone())
            .filter(|filename| is_image_filename(filename))
            .map(|filename| ImageLocation {
                path: PathBuf::from(format!("/memory/product_{}/{}", product_id, filename)),
                filename,
            })
            .ok_or_else(|| StorageError::NotFound(product_id.to_string()).into())
    }

    async fn list_product_ids(&self) -> Result<Vec<String>, ApplicationError> {
        if self.failing_listing.load(Ordering::SeqCst) {
            return Err(StorageError::Io("storage root unreadable".to_string()).into());
        }

        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().map(|e| e.product_id.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn locate_image_follows_uploaded_extension() {
        let repo = InMemoryProductRepository::new();
        let image = repo
            .create(ImageUpload::new(vec![1u8], Some("a.webp".to_string()), None))
            .await
            .unwrap();
        let text = repo
            .create(ImageUpload::new(vec![1u8], Some("a.txt".to_string()), None))
            .await
            .unwrap();

        let location = repo.locate_image(&image.id).await.unwrap();
        assert_eq!(location.filename, "image.webp");
        assert!(matches!(
            repo.locate_image(&text.id).await,
            Err(ApplicationError::NotFound(_))
        ));
    }
}
