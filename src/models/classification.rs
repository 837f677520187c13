use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ClassificationModel {
    pub classification_id: i32,
    pub classification_name: String,
}
