use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A catalog product as stored in the `products` collection.
///
/// `id` is `None` until the store assigns an `_id` on insert; it is never
/// set by clients. Fields are immutable after creation (no update path).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_detail: Option<String>,
    #[serde(default)]
    pub rating: f64,
    pub price: f64,
    pub img_src: String,
}
