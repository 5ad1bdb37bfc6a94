use axum::{
    handler::HandlerWithoutStateExt,
    routing::{get, get_service},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{config::Config, handlers, AppState};

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        // ── Index ───────────────────────────────────────────────────────────
        .route(
            "/",
            get_service(ServeFile::new(&config.index_file)).fallback(handlers::not_found),
        )

        // ── Products ────────────────────────────────────────────────────────
        .route(
            "/products",
            get(handlers::products::list_products)
                .post(handlers::products::create_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product)
                .fallback(handlers::not_found),
        )
        .route(
            "/products/:id",
            get(handlers::products::get_product).fallback(handlers::not_found),
        )

        // ── Static files, then not-found ────────────────────────────────────
        .fallback_service(
            ServeDir::new(&config.public_dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(handlers::not_found.into_service()),
        );

    with_middleware(router).with_state(state)
}

/// Request tracing, panic recovery and CORS, outermost first.
pub fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handlers::handle_panic))
            .layer(CorsLayer::permissive()),
    )
}
