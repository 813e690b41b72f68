//! Storefront root component.
//!
//! Owns the page state (`StorefrontState`) and the configuration, loads the
//! catalog once after the first render, and composes the page: navbar, hero,
//! the catalog (or a loading message) and the footer.
//!
//! Update logic lives in `update`, markup in `view`, following the Elm-style
//! split used by the other components.

use common::config::{OverlapPolicy, StorefrontConfig};
use common::store::StorefrontState;
use yew::prelude::*;

mod messages;
mod update;
mod view;

use messages::Msg;

pub struct App {
    state: StorefrontState,
    config: StorefrontConfig,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: StorefrontState::new(),
            config: StorefrontConfig::from_backend_url(option_env!("BACKEND_URL"))
                .with_overlap(OverlapPolicy::from_setting(option_env!("CATALOG_OVERLAP"))),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::LoadCatalog);
        }
    }
}
