//! Inventory domain module.
//!
//! This module contains everything that operates on product records, independent
//! of the terminal interface:
//! - `Product` and `ProductDraft` records
//! - The in-memory `ProductStore`
//! - The filter/sort/paginate pipeline deriving what the list shows
//! - Import of product files and generation of demo data

mod error;
mod import;
mod pipeline;
mod product;
mod seed;
mod store;

pub use error::InventoryError;
pub use import::{load_products, parse_products, ImportFormat};
pub use pipeline::{
    derive, filter, numeric_or_zero, sort, FilterCriteria, Listing, Pager, SortBy, SortOrder,
    DEFAULT_PAGE_SIZE, PAGE_SIZES,
};
pub use product::{Product, ProductDraft, ProductId, COPY_SUFFIX, MAX_DESCRIPTION_LENGTH};
pub use seed::demo_products;
pub use store::ProductStore;
