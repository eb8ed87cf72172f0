//! Handlers for the `/products` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use storefront_core::error::CoreError;
use storefront_core::product;
use storefront_core::types::DbId;
use storefront_db::models::product::{CreateProduct, Product, UpdateProduct};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// Body returned by update and delete.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}

/// Validate the fields shared by create and update.
fn validate_fields(
    name: &str,
    description: Option<&str>,
    price: rust_decimal::Decimal,
) -> AppResult<()> {
    product::validate_name(name)?;
    if let Some(description) = description {
        product::validate_description(description)?;
    }
    product::validate_price(price)?;
    Ok(())
}

fn validate_create_input(input: &CreateProduct) -> AppResult<()> {
    validate_fields(&input.name, input.description.as_deref(), input.price)?;
    if let Some(ref url) = input.image_url {
        product::validate_image_url(url)?;
    }
    Ok(())
}

fn validate_update_input(input: &UpdateProduct) -> AppResult<()> {
    validate_fields(&input.name, input.description.as_deref(), input.price)
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    validate_create_input(&input)?;

    let product = state.products.create(&input).await?;

    tracing::info!(product_id = product.id, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.find_all().await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Product>> {
    let product = state
        .products
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// PUT /api/products/{id}
///
/// Replaces `name`, `description` and `price`; partial updates are not
/// supported.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProduct>,
) -> AppResult<Json<SuccessResponse>> {
    validate_update_input(&input)?;

    if !state.products.update(id, &input).await? {
        return Err(not_found(id));
    }

    tracing::info!(product_id = id, "Product updated");

    Ok(Json(SuccessResponse { success: true }))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !state.products.delete(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(product_id = id, "Product deleted");

    Ok(Json(SuccessResponse { success: true }))
}
