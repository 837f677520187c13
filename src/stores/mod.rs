pub mod account_store;
pub mod inventory_store;

pub use account_store::AccountStore;
pub use inventory_store::InventoryStore;
