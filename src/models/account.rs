use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account row. The password is stored exactly as supplied; hashing is the
/// caller's responsibility, before the value ever reaches this layer.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AccountModel {
    pub account_id: i32,
    pub account_firstname: String,
    pub account_lastname: String,
    pub account_email: String,
    pub account_password: String,
    pub account_type: String,
}
