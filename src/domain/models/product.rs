use std::path::PathBuf;

use bytes::Bytes;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored product: one uploaded image plus the metadata written next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "folderPath")]
    pub folder_path: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "fileSize")]
    pub file_size: u64,
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}

/// One file taken from an upload request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub content: Bytes,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl ImageUpload {
    pub fn new(
        content: impl Into<Bytes>,
        filename: Option<String>,
        content_type: Option<String>,
    ) -> Self {
        Self {
            content: content.into(),
            filename,
            content_type,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Extension of the original filename including the leading dot, case preserved.
    pub fn extension(&self) -> &str {
        self.filename
            .as_deref()
            .and_then(|name| name.rfind('.').map(|idx| &name[idx..]))
            .unwrap_or("")
    }

    /// Product name: the original filename without its trailing extension.
    pub fn product_name(&self, product_id: &str) -> String {
        match self.filename.as_deref() {
            Some(name) => name[..name.len() - self.extension().len()].to_string(),
            None => format!("Product {}", product_id),
        }
    }

    pub fn product_description(&self) -> String {
        format!(
            "Product uploaded from image: {}",
            self.filename.as_deref().unwrap_or("unknown")
        )
    }
}

/// Where a product's image lives on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLocation {
    pub path: PathBuf,
    pub filename: String,
}

impl ImageLocation {
    pub fn content_type(&self) -> &'static str {
        image_content_type(&self.filename)
    }
}

pub const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

pub fn is_image_filename(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

pub fn image_content_type(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".gif") {
        "image/gif"
    } else if lower.ends_with(".webp") {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}
