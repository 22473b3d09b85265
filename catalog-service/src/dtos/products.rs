use crate::models::Product;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

/// Create payload. Required fields are modeled as `Option` so an absent
/// field reaches the validator (and yields a 400) instead of a serde
/// rejection.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(required, length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(required, length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    pub description_detail: Option<String>,
    pub rating: Option<f64>,
    #[validate(required)]
    pub price: Option<f64>,
    #[validate(required, length(min = 1, message = "imgSrc must not be empty"))]
    pub img_src: Option<String>,
}

impl CreateProductRequest {
    /// Validates the payload and builds the product to insert.
    /// `rating` defaults to 0 when omitted; the id stays unset until the
    /// store assigns one.
    pub fn into_product(self) -> Result<Product, AppError> {
        self.validate()?;

        let (Some(name), Some(description), Some(price), Some(img_src)) =
            (self.name, self.description, self.price, self.img_src)
        else {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Missing required fields"
            )));
        };

        Ok(Product {
            id: None,
            name,
            description,
            description_detail: self.description_detail,
            rating: self.rating.unwrap_or(0.0),
            price,
            img_src,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_detail: Option<String>,
    pub rating: f64,
    pub price: f64,
    pub img_src: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: product.name,
            description: product.description,
            description_detail: product.description_detail,
            rating: product.rating,
            price: product.price,
            img_src: product.img_src,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub message: String,
    pub product: ProductResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
