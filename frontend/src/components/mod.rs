pub mod collections;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod product_card;
