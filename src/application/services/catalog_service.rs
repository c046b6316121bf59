use std::sync::Arc;

use tracing::info;

use crate::{
    application::{
        dto::catalog_page::{CatalogPage, SkippedProduct},
        error::ApplicationError,
        repositories::product_repository::ProductRepository,
    },
    domain::models::product::{ImageUpload, Product},
};

pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Stores every non-empty upload as a new product, in input order.
    ///
    /// The first storage failure aborts the batch. Products created before it stay on disk.
    pub async fn upload_many(
        &self,
        uploads: Vec<ImageUpload>,
    ) -> Result<Vec<Product>, ApplicationError> {
        let mut products = Vec::with_capacity(uploads.len());

        for upload in uploads {
            if upload.is_empty() {
                info!("Skipping empty upload: {:?}", upload.filename);
                continue;
            }

            let product = self.repository.create(upload).await?;
            info!("Created product {} ({} bytes)", product.id, product.file_size);
            products.push(product);
        }

        Ok(products)
    }

    /// Loads every stored product, newest first, and returns one page of them.
    ///
    /// Products whose metadata cannot be loaded are reported in `skipped` and do not
    /// count towards the totals.
    pub async fn list_page(&self, page: usize, size: usize) -> Result<CatalogPage, ApplicationError> {
        if size == 0 {
            return Err(ApplicationError::BadRequest(
                "Page size must be greater than zero".to_string(),
            ));
        }

        let product_ids = self.repository.list_product_ids().await?;
        let mut products = Vec::with_capacity(product_ids.len());
        let mut skipped = Vec::new();

        for product_id in product_ids {
            match self.repository.load_metadata(&product_id).await {
                Ok(product) => products.push(product),
                Err(e) => {
                    skipped.push(SkippedProduct {
                        product_id,
                        reason: e.message().to_string(),
                    });
                }
            }
        }

        // Stable sort keeps listing order for equal timestamps.
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(CatalogPage::paginate(products, page, size, skipped))
    }
}
