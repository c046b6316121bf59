use async_trait::async_trait;

use crate::{
    application::error::ApplicationError,
    domain::models::product::{ImageLocation, ImageUpload, Product},
};

/// Persistence for products. The set of stored products is whatever the backend
/// currently holds; there is no separate index.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, upload: ImageUpload) -> Result<Product, ApplicationError>;
    async fn load_metadata(&self, product_id: &str) -> Result<Product, ApplicationError>;
    async fn locate_image(&self, product_id: &str) -> Result<ImageLocation, ApplicationError>;
    async fn list_product_ids(&self) -> Result<Vec<String>, ApplicationError>;
}
