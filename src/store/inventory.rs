//! Local mirror of the remote collection.
//!
//! The mirror changes only after the corresponding remote call resolves
//! successfully; there are no optimistic updates and no automatic retries,
//! so it never diverges from a committed server state.

use crate::store::error::StoreError;
use crate::store::product::{Product, ProductPayload};
use crate::store::remote::RemoteStore;

/// Owns the local collection and reconciles every mutation through the
/// remote store. Constructed once per application lifetime.
pub struct Inventory {
    remote: RemoteStore,
    products: Vec<Product>,
}

impl Inventory {
    pub fn new(remote: RemoteStore) -> Self {
        Self {
            remote,
            products: Vec::new(),
        }
    }

    /// The mirrored collection: server order on load, append order for
    /// records created afterwards.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Fetch the full collection and replace the mirror with it.
    ///
    /// Runs once at startup, single attempt. On failure the mirror is left
    /// empty and the caller surfaces the error.
    pub async fn load_all(&mut self) -> Result<(), StoreError> {
        let products = self.remote.list().await?;
        tracing::info!(count = products.len(), "loaded collection");
        self.products = products;
        Ok(())
    }

    /// Insert a record remotely, then append it locally with the id the
    /// store assigned.
    pub async fn create(&mut self, payload: ProductPayload) -> Result<(), StoreError> {
        let id = self.remote.insert(&payload).await?;
        tracing::info!(%id, name = %payload.name, "created product");
        self.products.push(Product::from_payload(id, payload));
        Ok(())
    }

    /// Replace a record remotely, then mirror the new field values in
    /// place. Position and identifier are preserved.
    pub async fn update(&mut self, id: &str, payload: ProductPayload) -> Result<(), StoreError> {
        self.remote.replace(id, &payload).await?;
        tracing::info!(%id, "updated product");
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            product.apply(payload);
        }
        Ok(())
    }

    /// Remove a record remotely, then drop it from the mirror.
    pub async fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.remote.remove(id).await?;
        tracing::info!(%id, "deleted product");
        self.products.retain(|p| p.id != id);
        Ok(())
    }
}
