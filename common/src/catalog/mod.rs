//! Catalog pipeline: talking to the product API, loading the catalog with the
//! seed fallback, and grouping products into display sections.

pub mod api;
pub mod group;
pub mod loader;

pub use api::{check_status, decode_products, CatalogApi};
pub use group::{group_by_category, CategoryGroups, DISPLAY_ORDER};
pub use loader::{load_catalog, LoadStep, LoadedCatalog};
