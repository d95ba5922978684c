// ABOUTME: The record store: an in-memory product index mirrored to a flat JSON file.
// ABOUTME: Every mutation validates, updates the index, and flushes the full snapshot to disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use catalogd_core::{Product, ValidationReport, validate};
use serde_json::Value;
use thiserror::Error;

use crate::file::{self, PersistError};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The candidate failed validation; the report carries per-field detail.
    #[error("invalid product")]
    Validation(ValidationReport),

    #[error("product {0} not found")]
    NotFound(u64),

    #[error("failed to load catalog: {0}")]
    Load(#[source] PersistError),

    #[error("failed to write catalog: {0}")]
    Write(#[source] PersistError),
}

/// Owns the authoritative in-memory product index and mirrors it to the
/// durable file. Mutations are validate, mutate in memory, flush the full
/// snapshot; a failed flush rolls the index back so the two never diverge
/// after an operation returns.
#[derive(Debug)]
pub struct ProductStore {
    index: BTreeMap<u64, Product>,
    path: PathBuf,
}

impl ProductStore {
    /// Open a store backed by the given file. A missing file is a valid
    /// empty catalog (first run); an existing file must parse.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let mut store = Self {
            index: BTreeMap::new(),
            path: path.into(),
        };
        if store.path.exists() {
            store.load()?;
        }
        Ok(store)
    }

    /// Path to the durable file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the durable file and replace the index wholesale.
    /// After a failed load the index is best-effort; callers must not
    /// assume post-failure consistency.
    pub fn load(&mut self) -> Result<(), StoreError> {
        self.index.clear();
        let products = file::read_products(&self.path).map_err(|e| {
            tracing::error!("failed to load catalog from {}: {}", self.path.display(), e);
            StoreError::Load(e)
        })?;
        for product in products {
            self.index.insert(product.id, product);
        }
        Ok(())
    }

    /// Snapshot of all products in ascending id order.
    pub fn get_all(&self) -> Vec<Product> {
        self.index.values().cloned().collect()
    }

    /// Look up one product by id.
    pub fn get(&self, id: u64) -> Result<Product, StoreError> {
        self.index.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Number of products currently indexed.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Validate and insert a candidate. A candidate without an id gets a
    /// generated one; a supplied id is honored, replacing any existing
    /// record under it. Returns the stored product.
    pub fn create(&mut self, candidate: &Value) -> Result<Product, StoreError> {
        let valid = validate(candidate).map_err(StoreError::Validation)?;
        let id = valid.id.unwrap_or_else(|| self.next_id());
        self.put(valid.into_product(id))
    }

    /// Validate and upsert a candidate under its own id. The candidate must
    /// carry an id; there is no prior-existence check. Returns the stored
    /// product.
    pub fn update(&mut self, candidate: &Value) -> Result<Product, StoreError> {
        let valid = validate(candidate).map_err(StoreError::Validation)?;
        let Some(id) = valid.id else {
            let report = ValidationReport {
                main_msg: "Product id is required.".to_string(),
                ..ValidationReport::default()
            };
            return Err(StoreError::Validation(report));
        };
        self.put(valid.into_product(id))
    }

    /// Remove a product. Fails with NotFound, leaving the durable file
    /// untouched, when the id is absent.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let Some(removed) = self.index.remove(&id) else {
            return Err(StoreError::NotFound(id));
        };
        if let Err(e) = self.flush() {
            self.index.insert(id, removed);
            return Err(e);
        }
        Ok(())
    }

    /// Insert into the index and flush; on a failed flush the previous
    /// entry (or absence) is restored before the error is returned.
    fn put(&mut self, product: Product) -> Result<Product, StoreError> {
        let id = product.id;
        let previous = self.index.insert(id, product.clone());
        if let Err(e) = self.flush() {
            match previous {
                Some(prev) => self.index.insert(id, prev),
                None => self.index.remove(&id),
            };
            return Err(e);
        }
        Ok(product)
    }

    /// Next generated id: one past the highest id in the index, 0 when the
    /// store is empty.
    fn next_id(&self) -> u64 {
        self.index.keys().next_back().map_or(0, |max| max + 1)
    }

    fn flush(&self) -> Result<(), StoreError> {
        let products: Vec<Product> = self.index.values().cloned().collect();
        file::write_products(&self.path, &products).map_err(|e| {
            tracing::error!("failed to write catalog to {}: {}", self.path.display(), e);
            StoreError::Write(e)
        })
    }
}
