use crate::dtos::{CreateProductRequest, CreateProductResponse, MessageResponse, ProductResponse};
use crate::services::DeleteOutcome;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.store.list().await?;

    let products: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let product = payload.into_product()?;
    let product = state.store.insert(product).await?;

    tracing::info!(
        product_id = %product.id.map(|oid| oid.to_hex()).unwrap_or_default(),
        name = %product.name,
        "Product created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            message: "Product added successfully".to_string(),
            product: ProductResponse::from(product),
        }),
    ))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match state.store.delete_by_id(&id).await? {
        DeleteOutcome::Deleted => {
            tracing::info!(product_id = %id, "Product deleted");
            Ok(Json(MessageResponse {
                message: "Product deleted successfully".to_string(),
            }))
        }
        DeleteOutcome::NotFound => Err(AppError::NotFound(anyhow::anyhow!("Product not found"))),
    }
}
