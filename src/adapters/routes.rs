use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::adapters::{controllers::product_controller::ProductController, state::AppState};

pub fn build_router(app_state: AppState, max_upload_bytes: usize, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            "/api/products/upload",
            post(ProductController::upload_products)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/products", get(ProductController::list_products))
        .route(
            "/api/products/images/{product_id}",
            get(ProductController::get_product_image),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
