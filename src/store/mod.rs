//! Remote product collection client and the local mirror it feeds.

mod error;
mod inventory;
mod product;
mod remote;

pub use error::StoreError;
pub use inventory::Inventory;
pub use product::{Product, ProductPayload};
pub use remote::RemoteStore;
