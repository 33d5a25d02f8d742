//! In-memory product store.

use super::{InventoryError, Product, ProductDraft, ProductId};
use chrono::{SecondsFormat, Utc};
use log::*;

/// Holds the product collection for the session.
///
/// Ids are derived from the millisecond clock and always increase, so every
/// record added through the store has a unique id. Creation timestamps never
/// go backwards either.
///
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    last_id: u64,
    last_created_at: String,
}

impl ProductStore {
    /// Return a new empty store.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Create a product from `draft`, assigning its id and creation time.
    ///
    pub fn add(&mut self, draft: ProductDraft) -> Product {
        let product = Product::from_draft(self.next_id(), self.next_timestamp(), draft);
        debug!("Adding product {} ({})", product.id, product.name);
        self.products.push(product.clone());
        product
    }

    /// Replace the product with the same id. The stored creation time is kept
    /// regardless of what `product` carries.
    ///
    pub fn update(&mut self, mut product: Product) -> Result<Product, InventoryError> {
        let existing = self
            .products
            .iter_mut()
            .find(|existing| existing.id == product.id)
            .ok_or(InventoryError::ProductNotFound { id: product.id })?;
        product.created_at = existing.created_at.clone();
        *existing = product.clone();
        debug!("Updated product {} ({})", product.id, product.name);
        Ok(product)
    }

    /// Delete the product with the given id, returning it.
    ///
    pub fn remove(&mut self, id: ProductId) -> Result<Product, InventoryError> {
        let index = self
            .products
            .iter()
            .position(|product| product.id == id)
            .ok_or(InventoryError::ProductNotFound { id })?;
        let removed = self.products.remove(index);
        debug!("Removed product {} ({})", removed.id, removed.name);
        Ok(removed)
    }

    /// Append a copy of `product` with a fresh id and creation time and the
    /// copy suffix on its name.
    ///
    pub fn duplicate(&mut self, product: &Product) -> Product {
        let mut draft = product.draft();
        draft.name = product.copy_name();
        self.add(draft)
    }

    /// Load existing records, e.g. from an import file. Records whose id is
    /// missing or already taken get a new one; records without a creation time
    /// get the current time. Returns the number of records added.
    ///
    pub fn extend<I>(&mut self, products: I) -> usize
    where
        I: IntoIterator<Item = Product>,
    {
        let mut added = 0;
        for mut product in products {
            if product.id.0 == 0 || self.get(product.id).is_some() {
                product.id = self.next_id();
            } else {
                self.last_id = self.last_id.max(product.id.0);
            }
            if product.created_at.is_empty() {
                product.created_at = self.next_timestamp();
            }
            self.products.push(product);
            added += 1;
        }
        added
    }

    fn next_id(&mut self) -> ProductId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last_id = now.max(self.last_id + 1);
        ProductId(self.last_id)
    }

    fn next_timestamp(&mut self) -> String {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        if now > self.last_created_at {
            self.last_created_at = now;
        }
        self.last_created_at.clone()
    }
}
