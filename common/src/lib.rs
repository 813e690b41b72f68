//! Platform-independent core of the storefront: the product model, the
//! category grouper, the catalog loader and the store reducer the UI drives.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
