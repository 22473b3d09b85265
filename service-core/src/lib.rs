//! service-core: Shared infrastructure for the catalog services.
pub mod config;
pub mod error;
pub mod observability;

pub use axum;
pub use mongodb;
pub use serde;
pub use validator;
