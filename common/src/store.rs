//! Page state and the reducer that changes it.
//!
//! `StorefrontState` is owned by the app root. Nothing outside this module
//! writes its fields. A load starts with [`StorefrontState::begin_load`], which
//! hands out the ticket its result must carry; every other change is a
//! [`StoreAction`] passed to [`StorefrontState::apply`], which reports whether
//! the page needs to be re-rendered.

use crate::catalog::loader::LoadedCatalog;
use crate::config::OverlapPolicy;
use crate::error::CatalogError;
use crate::model::product::Product;

/// Identifies one catalog load. Only the newest load may write its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    LoadFinished {
        ticket: LoadTicket,
        result: Result<LoadedCatalog, CatalogError>,
    },
    AddToCart(Product),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontState {
    products: Vec<Product>,
    loading: bool,
    cart_count: u32,
    last_error: Option<CatalogError>,
    generation: u64,
}

impl StorefrontState {
    /// Initial state: nothing loaded yet and the loading indicator on, so the
    /// first paint shows the loading message instead of an empty catalog.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            cart_count: 0,
            last_error: None,
            generation: 0,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn cart_count(&self) -> u32 {
        self.cart_count
    }

    /// Error of the most recent load, if it failed.
    pub fn last_error(&self) -> Option<&CatalogError> {
        self.last_error.as_ref()
    }

    /// Starts a load unless `policy` forbids it, returning the ticket the
    /// result must be delivered with.
    ///
    /// The very first load is always allowed even though the state starts out
    /// with `loading` set.
    pub fn begin_load(&mut self, policy: OverlapPolicy) -> Option<LoadTicket> {
        let in_flight = self.loading && self.generation > 0;
        if in_flight && policy == OverlapPolicy::Reject {
            return None;
        }
        self.generation += 1;
        self.loading = true;
        Some(LoadTicket(self.generation))
    }

    pub fn apply(&mut self, action: StoreAction) -> bool {
        match action {
            StoreAction::LoadFinished { ticket, result } => {
                if ticket.0 != self.generation {
                    return false;
                }
                match result {
                    Ok(loaded) => {
                        self.products = loaded.products;
                        self.last_error = None;
                    }
                    Err(e) => {
                        self.products = Vec::new();
                        self.last_error = Some(e);
                    }
                }
                self.loading = false;
                true
            }
            StoreAction::AddToCart(_) => {
                self.cart_count = self.cart_count.saturating_add(1);
                true
            }
        }
    }
}

impl Default for StorefrontState {
    fn default() -> Self {
        Self::new()
    }
}
