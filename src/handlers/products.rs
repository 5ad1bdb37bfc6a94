use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderName},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::{ListParams, Product, QueryOptions},
    AppState,
};

fn allow_any_origin() -> [(HeaderName, &'static str); 1] {
    [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")]
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    (allow_any_origin(), list(&state, params).await)
}

async fn list(state: &AppState, params: ListParams) -> AppResult<Json<Vec<Product>>> {
    let options = QueryOptions::try_from(params)?;

    let start = Instant::now();
    let products = state.catalog.list(&options).await?;

    info!(
        count = products.len(),
        offset = options.offset,
        limit = options.limit,
        tag = options.tag.as_deref().unwrap_or(""),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed products"
    );

    Ok(Json(products))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    (allow_any_origin(), get(&state, id).await)
}

async fn get(state: &AppState, id: String) -> AppResult<Json<Product>> {
    // Path segments are text, so only string ids can match.
    let key = Value::String(id);

    match state.catalog.get(&key).await? {
        Some(product) => {
            info!(id = %key, "Fetched product");
            Ok(Json(product))
        }
        None => {
            debug!(id = %key, "Product lookup missed");
            Err(AppError::NotFound(format!("Product {key} not found")))
        }
    }
}

// ── Create / Update / Delete ──────────────────────────────────────────────────
//
// Not persisted: each one answers with the body it was given. A request that
// is not JSON at all (no body, other content type) reads as `{}`; a JSON body
// that fails to parse is still rejected.

type EchoResult = Result<Json<Value>, JsonRejection>;

fn echo_body(payload: EchoResult) -> EchoResult {
    match payload {
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Json(Value::Object(Map::new()))),
        other => other,
    }
}

pub async fn create_product(payload: EchoResult) -> EchoResult {
    let Json(body) = echo_body(payload)?;
    info!(body = %body, "Create product (echo only)");
    Ok(Json(body))
}

pub async fn update_product(payload: EchoResult) -> EchoResult {
    let Json(body) = echo_body(payload)?;
    info!(body = %body, "Update product (echo only)");
    Ok(Json(body))
}

pub async fn delete_product(payload: EchoResult) -> EchoResult {
    let Json(body) = echo_body(payload)?;
    info!(body = %body, "Delete product (echo only)");
    Ok(Json(body))
}
