use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{application::dto::catalog_page::CatalogPage, domain::models::product::Product};

#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "fileSize")]
    pub file_size: u64,
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            image_url: product.image_url,
            created_at: product.created_at,
            file_size: product.file_size,
            content_type: product.content_type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub items: Vec<ProductDto>,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "totalElements")]
    pub total_elements: usize,
    pub page: usize,
    pub size: usize,
}

impl From<CatalogPage> for ProductResponse {
    fn from(page: CatalogPage) -> Self {
        Self {
            items: page.items.into_iter().map(ProductDto::from).collect(),
            total_pages: page.total_pages,
            total_elements: page.total_elements,
            page: page.page,
            size: page.size,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub size: i64,
}

fn default_page_size() -> i64 {
    10
}

#[derive(Debug, Serialize)]
pub struct UploadProductsResponse {
    pub success: bool,
    pub message: String,
    pub products: Vec<Product>,
    pub count: usize,
}

impl UploadProductsResponse {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            success: true,
            message: format!("Successfully uploaded {} product(s)", products.len()),
            count: products.len(),
            products,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
