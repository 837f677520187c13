pub mod config;
pub mod db;
pub mod diag;
pub mod error;
pub mod models;
pub mod stores;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use stores::{AccountStore, InventoryStore};
