use async_trait::async_trait;
use catalog_service::config::{CatalogConfig, MongoConfig};
use catalog_service::models::Product;
use catalog_service::services::{DeleteOutcome, ProductStore};
use catalog_service::startup::Application;
use mongodb::bson::oid::ObjectId;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the MongoDB-backed store. Assigns ObjectIds on
/// insert and mirrors the real store's malformed-id handling, so the full
/// HTTP surface can be exercised without a running database.
#[derive(Default)]
pub struct MemoryProductStore {
    products: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn insert(&self, mut product: Product) -> Result<Product, AppError> {
        product.id = Some(ObjectId::new());
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: &str) -> Result<DeleteOutcome, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid product id: {}", id)))?;

        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != Some(object_id));
        if products.len() == before {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store double whose every operation fails, for exercising the store-error
/// responses without a database to break.
pub struct FailingProductStore;

impl FailingProductStore {
    fn error() -> AppError {
        AppError::DatabaseError(anyhow::anyhow!("connection reset by store"))
    }
}

#[async_trait]
impl ProductStore for FailingProductStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        Err(Self::error())
    }

    async fn insert(&self, _product: Product) -> Result<Product, AppError> {
        Err(Self::error())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<DeleteOutcome, AppError> {
        Err(Self::error())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(Self::error())
    }
}

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(MemoryProductStore::default())).await
    }

    pub async fn spawn_with_store(store: Arc<dyn ProductStore>) -> Self {
        let config = CatalogConfig {
            common: CoreConfig { port: 0 },
            mongodb: MongoConfig {
                uri: "mongodb://localhost:27017".to_string(),
                database: "catalog_test".to_string(),
            },
        };

        let app = Application::with_store(config, store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept requests
        let client = reqwest::Client::new();
        let liveness_url = format!("{}/", address);
        for _ in 0..50 {
            if client.get(&liveness_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}
