pub mod account;
pub mod classification;
pub mod inventory;

pub use account::*;
pub use classification::*;
pub use inventory::*;
