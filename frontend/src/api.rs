//! Browser implementation of [`CatalogApi`] on top of `gloo-net`.
//!
//! Status and body checks are the shared ones from `common::catalog`; this
//! module only moves bytes.

use common::catalog::{check_status, decode_products, CatalogApi};
use common::config::StorefrontConfig;
use common::error::CatalogError;
use common::model::product::Product;
use gloo_net::http::Request;

pub struct HttpCatalogApi {
    products_url: String,
    seed_url: String,
}

impl HttpCatalogApi {
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            products_url: config.products_url(),
            seed_url: config.seed_url(),
        }
    }
}

impl CatalogApi for HttpCatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let resp = Request::get(&self.products_url)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(resp.status())?;

        let body = resp.binary().await.map_err(transport_error)?;
        decode_products(&body)
    }

    async fn seed_products(&self) -> Result<(), CatalogError> {
        let resp = Request::post(&self.seed_url)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(resp.status())
    }
}

fn transport_error(e: gloo_net::Error) -> CatalogError {
    CatalogError::Transport(e.to_string())
}
