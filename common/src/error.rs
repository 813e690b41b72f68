use thiserror::Error;

/// Why a catalog request did not produce a product list.
///
/// An empty catalog is not an error: it is a successful load with no
/// products. These variants cover the cases where the backend could not be
/// asked or did not answer usefully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("backend answered with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed product list: {0}")]
    Decode(String),
}
