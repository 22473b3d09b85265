use crate::config::CatalogConfig;
use crate::handlers;
use crate::services::{MongoDb, MongoProductStore, ProductStore};
use axum::{
    http::{header, Method},
    routing::{delete, get},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub config: CatalogConfig,
    pub store: Arc<dyn ProductStore>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Connects to MongoDB and binds the listener. The store is constructed
    /// from a live connection before any route is served, so a connection
    /// failure aborts startup instead of surfacing later inside a handler.
    pub async fn build(config: CatalogConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        let store: Arc<dyn ProductStore> = Arc::new(MongoProductStore::new(db));
        Self::with_store(config, store).await
    }

    /// Same as [`build`](Self::build) with an injected store. Tests use this
    /// to run the full HTTP surface against an in-memory store.
    pub async fn with_store(
        config: CatalogConfig,
        store: Arc<dyn ProductStore>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store,
        };

        let app = Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health_check))
            .route(
                "/api/products",
                get(handlers::list_products).post(handlers::create_product),
            )
            .route("/api/products/:id", delete(handlers::delete_product))
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE]),
            )
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
