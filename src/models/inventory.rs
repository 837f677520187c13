use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Inventory table row, as returned by the write operations.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct InventoryModel {
    pub inv_id: i32,
    pub inv_make: String,
    pub inv_model: String,
    pub inv_description: String,
    pub inv_image: String,
    pub inv_thumbnail: String,
    pub inv_price: f64,
    pub inv_year: i32,
    pub inv_miles: i32,
    pub inv_color: String,
    pub classification_id: i32,
}

/// Inventory row joined with its classification, as returned by the reads.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct InventoryDetail {
    pub inv_id: i32,
    pub inv_make: String,
    pub inv_model: String,
    pub inv_description: String,
    pub inv_image: String,
    pub inv_thumbnail: String,
    pub inv_price: f64,
    pub inv_year: i32,
    pub inv_miles: i32,
    pub inv_color: String,
    pub classification_id: i32,
    pub classification_name: String,
}

/// Column values for creating an inventory row, or replacing all mutable
/// columns of an existing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInventory {
    pub make: String,
    pub model: String,
    pub description: String,
    pub image: String,
    pub thumbnail: String,
    pub price: f64,
    pub year: i32,
    pub miles: i32,
    pub color: String,
    pub classification_id: i32,
}
