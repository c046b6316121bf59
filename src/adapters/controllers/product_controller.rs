use axum::{
    body::Body,
    extract::{multipart::MultipartRejection, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio_util::io::ReaderStream;
use tracing::{error, info, warn};

use crate::{
    adapters::{
        dto::product_dto::{ListProductsQuery, ProductResponse, UploadProductsResponse},
        state::AppState,
    },
    application::error::ApplicationError,
    domain::models::product::ImageUpload,
};

const FILES_FIELD: &str = "files";

pub struct ProductController;

impl ProductController {
    /// POST /api/products/upload
    /// Multipart body with one or more `files` parts.
    pub async fn upload_products(
        State(app_state): State<AppState>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Json<UploadProductsResponse>, ApplicationError> {
        let mut multipart = multipart.map_err(|e| {
            warn!("Upload is not a multipart request: {}", e);
            ApplicationError::BadRequest("No files provided".to_string())
        })?;
        let mut uploads = Vec::new();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            warn!("Invalid multipart data: {}", e);
            ApplicationError::BadRequest("Invalid request format".to_string())
        })? {
            if field.name() != Some(FILES_FIELD) {
                continue;
            }

            let filename = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let content = field.bytes().await.map_err(|e| {
                warn!("Cannot read file bytes: {}", e);
                ApplicationError::BadRequest("Invalid file data".to_string())
            })?;

            uploads.push(ImageUpload::new(content, filename, content_type));
        }

        if uploads.is_empty() {
            return Err(ApplicationError::BadRequest("No files provided".to_string()));
        }

        info!("Uploading {} file(s)", uploads.len());

        let products = app_state
            .catalog_service
            .upload_many(uploads)
            .await
            .map_err(|e| match e {
                ApplicationError::InternalError(msg) | ApplicationError::Corrupt(msg) => {
                    ApplicationError::InternalError(format!("Error uploading products: {}", msg))
                }
                other => other,
            })?;

        Ok(Json(UploadProductsResponse::new(products)))
    }

    /// GET /api/products?page&size
    pub async fn list_products(
        State(app_state): State<AppState>,
        Query(query): Query<ListProductsQuery>,
    ) -> Result<Json<ProductResponse>, Response> {
        if query.page < 0 {
            return Err(
                ApplicationError::BadRequest("Page must not be negative".to_string())
                    .into_response(),
            );
        }
        if query.size <= 0 {
            return Err(
                ApplicationError::BadRequest("Page size must be greater than zero".to_string())
                    .into_response(),
            );
        }

        let page = app_state
            .catalog_service
            .list_page(query.page as usize, query.size as usize)
            .await
            .map_err(|e| match e {
                ApplicationError::BadRequest(msg) => {
                    ApplicationError::BadRequest(msg).into_response()
                }
                other => {
                    other.log();
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            })?;

        for skipped in &page.skipped {
            warn!(
                "Error loading product {}: {}",
                skipped.product_id, skipped.reason
            );
        }

        Ok(Json(ProductResponse::from(page)))
    }

    /// GET /api/products/images/{product_id}
    pub async fn get_product_image(
        State(app_state): State<AppState>,
        Path(product_id): Path<String>,
    ) -> Result<Response, StatusCode> {
        let location = app_state
            .product_repository
            .locate_image(&product_id)
            .await
            .map_err(|e| {
                e.log();
                e.status_code()
            })?;

        let file = tokio::fs::File::open(&location.path).await.map_err(|e| {
            error!("Cannot open {}: {}", location.path.display(), e);
            StatusCode::NOT_FOUND
        })?;
        let content_length = file
            .metadata()
            .await
            .map_err(|e| {
                error!("Cannot stat {}: {}", location.path.display(), e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .len();

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, location.content_type())
            .header(header::CONTENT_LENGTH, content_length)
            .header(
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", location.filename),
            )
            .body(Body::from_stream(ReaderStream::new(file)))
            .map_err(|e| {
                error!("Cannot build image response: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })
    }
}
