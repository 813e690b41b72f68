//! Message handling for the storefront root.
//!
//! State changes are delegated to the `StorefrontState` reducer; this module
//! only adds the side effects: spawning the catalog load and logging its
//! outcome to the browser console.

use common::catalog::{load_catalog, LoadedCatalog};
use common::store::StoreAction;
use gloo_console::{error, log};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::App;
use crate::api::HttpCatalogApi;

pub fn update(app: &mut App, ctx: &Context<App>, msg: Msg) -> bool {
    match msg {
        Msg::LoadCatalog => {
            let Some(ticket) = app.state.begin_load(app.config.overlap) else {
                log!("Catalog load already in progress, trigger ignored.");
                return false;
            };

            let api = HttpCatalogApi::new(&app.config);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = load_catalog(&api).await;
                link.send_message(Msg::CatalogLoaded(ticket, result));
            });
            true
        }
        Msg::CatalogLoaded(ticket, result) => {
            if let Ok(LoadedCatalog {
                seed_error: Some(e),
                ..
            }) = &result
            {
                error!(format!("Seeding the empty catalog failed: {}", e));
            }
            match &result {
                Ok(loaded) if loaded.seeded => log!(format!(
                    "Catalog was empty; seeded and loaded {} products.",
                    loaded.products.len()
                )),
                Ok(loaded) => log!(format!("Loaded {} products.", loaded.products.len())),
                Err(e) => error!(format!("Could not load products: {}", e)),
            }
            app.state.apply(StoreAction::LoadFinished { ticket, result })
        }
        Msg::AddToCart(product) => app.state.apply(StoreAction::AddToCart(product)),
    }
}
