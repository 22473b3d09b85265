pub mod health;
pub mod products;

pub use health::{health_check, root};
pub use products::{create_product, delete_product, list_products};
