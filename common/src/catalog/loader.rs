//! Catalog loading with the empty-store seed fallback.
//!
//! A load is a short, fixed sequence of steps. Each step starts only after the
//! previous one has completed:
//!
//! 1. [`LoadStep::FetchProducts`]: ask for the product list. A non-empty list
//!    ends the load.
//! 2. [`LoadStep::SeedCatalog`]: the list was empty, so ask the backend to seed
//!    its store. A failed seed is logged, kept in
//!    [`LoadedCatalog::seed_error`], and the load carries on.
//! 3. [`LoadStep::Refetch`]: ask for the list once more and take whatever comes
//!    back, even if it is still empty.
//!
//! Failures of a fetch step end the load with the [`CatalogError`]; whether to
//! show it is the caller's choice.

use log::{debug, warn};

use super::api::CatalogApi;
use crate::error::CatalogError;
use crate::model::product::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStep {
    FetchProducts,
    SeedCatalog,
    Refetch,
}

/// Result of a completed load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog {
    pub products: Vec<Product>,
    /// Whether the seed fallback ran during this load.
    pub seeded: bool,
    /// Why the seed request failed, when it ran and did.
    pub seed_error: Option<CatalogError>,
}

pub async fn load_catalog<A: CatalogApi>(api: &A) -> Result<LoadedCatalog, CatalogError> {
    let mut step = LoadStep::FetchProducts;
    let mut seed_error = None;
    loop {
        debug!("catalog load: {:?}", step);
        step = match step {
            LoadStep::FetchProducts => {
                let products = api
                    .list_products()
                    .await
                    .inspect_err(|e| warn!("catalog load failed fetching products: {}", e))?;
                if !products.is_empty() {
                    return Ok(LoadedCatalog {
                        products,
                        seeded: false,
                        seed_error: None,
                    });
                }
                LoadStep::SeedCatalog
            }
            LoadStep::SeedCatalog => {
                if let Err(e) = api.seed_products().await {
                    warn!("seeding the empty catalog failed, refetching anyway: {}", e);
                    seed_error = Some(e);
                }
                LoadStep::Refetch
            }
            LoadStep::Refetch => {
                let products = api
                    .list_products()
                    .await
                    .inspect_err(|e| warn!("catalog load failed refetching after seed: {}", e))?;
                return Ok(LoadedCatalog {
                    products,
                    seeded: true,
                    seed_error,
                });
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        List,
        Seed,
    }

    /// Plays back canned answers and records the order of calls.
    struct ScriptedApi {
        lists: RefCell<VecDeque<Result<Vec<Product>, CatalogError>>>,
        seed: Result<(), CatalogError>,
        calls: RefCell<Vec<Call>>,
    }

    impl ScriptedApi {
        fn new(lists: Vec<Result<Vec<Product>, CatalogError>>) -> Self {
            Self {
                lists: RefCell::new(lists.into()),
                seed: Ok(()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn with_seed(mut self, seed: Result<(), CatalogError>) -> Self {
            self.seed = seed;
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl CatalogApi for ScriptedApi {
        async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
            self.calls.borrow_mut().push(Call::List);
            self.lists
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(CatalogError::Transport("no scripted answer".into())))
        }

        async fn seed_products(&self) -> Result<(), CatalogError> {
            self.calls.borrow_mut().push(Call::Seed);
            self.seed.clone()
        }
    }

    fn item(title: &str) -> Product {
        Product {
            id: Some(title.to_lowercase()),
            alt_id: None,
            title: title.to_string(),
            category: "Baby".to_string(),
            price_bdt: 650.0,
            images: None,
            rating: None,
        }
    }

    #[tokio::test]
    async fn non_empty_catalog_is_used_without_seeding() {
        let api = ScriptedApi::new(vec![Ok(vec![item("Romper"), item("Bib")])]);

        let loaded = load_catalog(&api).await.unwrap();

        assert_eq!(loaded.products, vec![item("Romper"), item("Bib")]);
        assert!(!loaded.seeded);
        assert_eq!(api.calls(), [Call::List]);
    }

    #[tokio::test]
    async fn empty_catalog_is_seeded_once_then_refetched() {
        let api = ScriptedApi::new(vec![Ok(vec![]), Ok(vec![item("Romper")])]);

        let loaded = load_catalog(&api).await.unwrap();

        assert_eq!(loaded.products, vec![item("Romper")]);
        assert!(loaded.seeded);
        assert_eq!(loaded.seed_error, None);
        assert_eq!(api.calls(), [Call::List, Call::Seed, Call::List]);
    }

    #[tokio::test]
    async fn refetch_result_is_final_even_when_still_empty() {
        let api = ScriptedApi::new(vec![Ok(vec![]), Ok(vec![]), Ok(vec![item("Extra")])]);

        let loaded = load_catalog(&api).await.unwrap();

        assert!(loaded.products.is_empty());
        assert!(loaded.seeded);
        assert_eq!(api.calls(), [Call::List, Call::Seed, Call::List]);
    }

    #[tokio::test]
    async fn failed_seed_does_not_stop_the_refetch() {
        let api = ScriptedApi::new(vec![Ok(vec![]), Ok(vec![item("Romper")])])
            .with_seed(Err(CatalogError::Status(500)));

        let loaded = load_catalog(&api).await.unwrap();

        assert_eq!(loaded.products.len(), 1);
        assert!(loaded.seeded);
        assert_eq!(loaded.seed_error, Some(CatalogError::Status(500)));
        assert_eq!(api.calls(), [Call::List, Call::Seed, Call::List]);
    }

    #[tokio::test]
    async fn error_status_on_first_fetch_ends_the_load() {
        let api = ScriptedApi::new(vec![Err(CatalogError::Status(503))]);

        let err = load_catalog(&api).await.unwrap_err();

        assert_eq!(err, CatalogError::Status(503));
        assert_eq!(api.calls(), [Call::List]);
    }

    #[tokio::test]
    async fn transport_failure_on_refetch_is_reported() {
        let api = ScriptedApi::new(vec![
            Ok(vec![]),
            Err(CatalogError::Transport("connection reset".into())),
        ]);

        let err = load_catalog(&api).await.unwrap_err();

        assert_eq!(err, CatalogError::Transport("connection reset".into()));
        assert_eq!(api.calls(), [Call::List, Call::Seed, Call::List]);
    }
}
