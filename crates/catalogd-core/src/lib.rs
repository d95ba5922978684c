// ABOUTME: Core library for catalogd, containing the product domain model and validator.
// ABOUTME: This crate defines the shared data model used across all catalogd components.

pub mod product;
pub mod validate;

pub use product::{Methodology, Product, ValidatedProduct};
pub use validate::{MAX_DEVELOPERS, ValidationReport, validate};
