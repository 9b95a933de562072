/**
 * Router Configuration
 *
 * Combines the API routes with the cross-cutting layers: request tracing
 * and CORS for the configured web client origin (methods GET and POST,
 * headers `Content-Type` and `Authorization`).
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::CorsOrigin;
use crate::backend::server::state::AppState;

pub fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
    let allow_origin = match origin {
        CorsOrigin::Any => AllowOrigin::from(Any),
        CorsOrigin::Exact(value) => AllowOrigin::exact(value.clone()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&app_state.config.cors_origin));

    router.layer(layers).with_state(app_state)
}
