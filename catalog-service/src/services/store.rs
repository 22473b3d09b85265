use crate::models::Product;
use crate::services::MongoDb;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use service_core::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Single-document access to the product collection. Handlers only see this
/// trait; the store behind it is constructed once at startup with a live
/// connection, so no request can observe an unconnected state.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Every product in the collection, in the store's natural order.
    async fn list(&self) -> Result<Vec<Product>, AppError>;

    /// Inserts one product and returns it with its store-assigned id.
    async fn insert(&self, product: Product) -> Result<Product, AppError>;

    /// Deletes at most one product matching `id`. A malformed id is a
    /// `BadRequest`, not a store failure.
    async fn delete_by_id(&self, id: &str) -> Result<DeleteOutcome, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

pub struct MongoProductStore {
    db: MongoDb,
}

impl MongoProductStore {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid product id: {}", id)))
}

#[async_trait]
impl ProductStore for MongoProductStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let mut cursor = self
            .db
            .products()
            .find(doc! {}, None)
            .await
            .map_err(AppError::from)?;

        let mut products = Vec::new();
        while let Some(product) = cursor.try_next().await.map_err(AppError::from)? {
            products.push(product);
        }
        Ok(products)
    }

    async fn insert(&self, mut product: Product) -> Result<Product, AppError> {
        let result = self
            .db
            .products()
            .insert_one(&product, None)
            .await
            .map_err(AppError::from)?;

        product.id = result.inserted_id.as_object_id();
        if product.id.is_none() {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "Store returned a non-ObjectId identifier on insert"
            )));
        }
        Ok(product)
    }

    async fn delete_by_id(&self, id: &str) -> Result<DeleteOutcome, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self
            .db
            .products()
            .delete_one(doc! { "_id": object_id }, None)
            .await
            .map_err(AppError::from)?;

        if result.deleted_count == 0 {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}
