//! HTTP interface - routes `/products` requests to the record store.
//!
//! ```text
//!   GET    /                  HTML listing of every product
//!   GET    /products          list, optional ?min=&max= price range
//!   POST   /products          create
//!   PUT    /products          bulk update of every product
//!   GET    /products/{id}     fetch one
//!   PUT    /products/{id}     partial update of one
//!   DELETE /products/{id}     delete one
//! ```

/// Product resource handlers
pub mod handlers;
/// Server-rendered listing page
pub mod home;
/// Response bodies and error-to-status mapping
pub mod response;

use crate::core::ProductStore;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Record store shared by every request
    pub store: ProductStore,
}

impl AppState {
    /// Creates the state around an already-connected store.
    #[must_use]
    pub const fn new(store: ProductStore) -> Self {
        Self { store }
    }
}

/// Builds the axum router with every product route and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::listing_page))
        .route(
            "/products",
            get(handlers::list_products)
                .post(handlers::create_product)
                .put(handlers::update_all_products),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
