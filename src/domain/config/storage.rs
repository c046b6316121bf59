use std::path::PathBuf;

pub const DEFAULT_STORAGE_PATH: &str = "./product-storage";
pub const DEFAULT_IMAGE_URL_BASE: &str = "http://localhost:8080/api/products/images";

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub storage_path: PathBuf,
    pub image_url_base: String,
}

impl StorageConfig {
    pub fn new(storage_path: impl Into<PathBuf>, image_url_base: &str) -> Self {
        Self {
            storage_path: storage_path.into(),
            image_url_base: image_url_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let storage_path =
            std::env::var("STORAGE_PATH").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string());
        let image_url_base =
            std::env::var("IMAGE_URL_BASE").unwrap_or_else(|_| DEFAULT_IMAGE_URL_BASE.to_string());

        Self::new(storage_path, &image_url_base)
    }

    pub fn image_url(&self, product_id: &str) -> String {
        format!("{}/{}", self.image_url_base, product_id)
    }
}
