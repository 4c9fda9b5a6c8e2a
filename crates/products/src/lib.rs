//! Products domain module (in-memory catalog).
//!
//! This crate holds the product record, the tab-separated catalog source
//! format, and the [`Catalog`] store that loads and queries it. Everything here
//! is synchronous and single-owner: the caller constructs a `Catalog`, fills it
//! once, and queries it afterwards.

pub mod catalog;
pub mod error;
pub mod field;
pub mod product;
pub mod source;

pub use catalog::Catalog;
pub use distributor_core::ProductId;
pub use error::CatalogError;
pub use field::ProductField;
pub use product::{Product, ProductClass};
