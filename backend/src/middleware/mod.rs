//! General-purpose middleware for the API.
//!
//! Request tracing and CORS are applied to the whole router, static files
//! included. CORS is fully permissive: the dashboard may be opened from a
//! different origin than the one serving the API.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Wrap `router` with request tracing and CORS.
pub fn apply(router: Router) -> Router {
    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
