//! Product resource handlers.
//!
//! Each handler parses its inputs into the typed request structs from
//! [`crate::models`], calls the [`crate::core::ProductStore`], and returns
//! either a JSON body or an [`Error`] that renders as a structured JSON error.

use crate::{
    api::{AppState, response::Message},
    entities::ProductModel,
    errors::{Error, Result},
    models::{NewProduct, PriceRangeParams, ProductChanges},
};
use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

type PathParam = std::result::Result<Path<String>, PathRejection>;
type QueryParams = std::result::Result<Query<PriceRangeParams>, QueryRejection>;

/// `GET /products` - every product ordered by price, optionally in `[min, max)`.
pub async fn list_products(
    State(state): State<AppState>,
    query: QueryParams,
) -> Result<Json<Vec<ProductModel>>> {
    let Query(params) = query.map_err(|e| Error::invalid_input(e.body_text()))?;
    let range = params.into_range()?;
    debug!(?range, "Listing products");

    let products = state.store.query(range).await?;
    Ok(Json(products))
}

/// `GET /products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    id: PathParam,
) -> Result<Json<ProductModel>> {
    let id = parse_id(id)?;
    let product = state.store.get_existing(id).await?;
    Ok(Json(product))
}

/// `POST /products`
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let new: NewProduct = parse_json(&body)?;
    state.store.insert(new).await?;
    Ok((StatusCode::CREATED, Json(Message::new("object created."))))
}

/// `PUT /products` - writes every truthy field onto every product.
pub async fn update_all_products(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let changes: ProductChanges = parse_json(&body)?;
    state.store.update_many(changes.truthy()).await?;
    Ok((
        StatusCode::NON_AUTHORITATIVE_INFORMATION,
        Json(Message::new("updated all.")),
    ))
}

/// `PUT /products/{id}` - fields present in the body replace, the rest are kept.
pub async fn update_product(
    State(state): State<AppState>,
    id: PathParam,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let id = parse_id(id)?;
    let changes: ProductChanges = parse_json(&body)?;
    state.store.update_one(id, changes).await?;
    Ok((
        StatusCode::NON_AUTHORITATIVE_INFORMATION,
        Json(Message::new("updated.")),
    ))
}

/// `DELETE /products/{id}` - 204 with an empty body.
pub async fn delete_product(
    State(state): State<AppState>,
    id: PathParam,
) -> Result<StatusCode> {
    let id = parse_id(id)?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(path: PathParam) -> Result<i64> {
    let Path(raw) = path.map_err(|e| Error::invalid_input(e.body_text()))?;
    raw.parse().map_err(|_| {
        Error::invalid_input(format!("product id must be an integer, got '{raw}'"))
    })
}

/// Bodies must be JSON objects; arrays would otherwise bind positionally.
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| Error::invalid_input(format!("malformed JSON body: {e}")))?;
    if !value.is_object() {
        return Err(Error::invalid_input("request body must be a JSON object"));
    }
    serde_json::from_value(value)
        .map_err(|e| Error::invalid_input(format!("invalid request body: {e}")))
}
