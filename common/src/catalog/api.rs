use crate::error::CatalogError;
use crate::model::product::Product;

/// Access to the backend product endpoints.
///
/// The frontend implements this over `gloo-net`; tests implement it with
/// scripted responses. Futures are not required to be `Send` since the
/// browser runs everything on one event loop.
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    /// `GET /api/products`. An empty vector is a valid answer.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// `POST /api/products/seed`. Only the side effect on the backend matters.
    async fn seed_products(&self) -> Result<(), CatalogError>;
}

/// Accepts 2xx statuses; anything else is `CatalogError::Status`.
pub fn check_status(status: u16) -> Result<(), CatalogError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(CatalogError::Status(status))
    }
}

/// Parses a `GET /api/products` body. Anything but a JSON array of products
/// is `CatalogError::Decode`.
pub fn decode_products(body: &[u8]) -> Result<Vec<Product>, CatalogError> {
    serde_json::from_slice(body).map_err(|e| CatalogError::Decode(e.to_string()))
}
