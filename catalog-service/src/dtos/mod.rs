pub mod products;

pub use products::{CreateProductRequest, CreateProductResponse, MessageResponse, ProductResponse};
