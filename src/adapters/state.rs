use std::sync::Arc;

use axum::extract::FromRef;

use crate::application::{
    repositories::product_repository::ProductRepository, services::CatalogService,
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub product_repository: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            catalog_service: Arc::new(CatalogService::new(product_repository.clone())),
            product_repository,
        }
    }
}
