// ABOUTME: Flat-file codec for the product catalog: one pretty-printed JSON array of products.
// ABOUTME: Writes go to a temp file, fsync, then atomic rename so readers never see partial data.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use catalogd_core::Product;
use thiserror::Error;

/// Errors raised while reading or writing the catalog file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read the durable file and parse it as an ordered sequence of products.
pub fn read_products(path: &Path) -> Result<Vec<Product>, PersistError> {
    let contents = fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&contents)?;
    Ok(products)
}

/// Write the full product snapshot as a pretty-printed JSON array.
/// Creates parent directories if needed, writes to a temp file, fsyncs,
/// and renames over the target.
pub fn write_products(path: &Path, products: &[Product]) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(products)?;

    let tmp_path = path.with_extension("json.tmp");
    let mut file = File::create(&tmp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp_path, path)?;

    Ok(())
}
