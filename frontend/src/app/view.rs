use yew::prelude::*;

use super::messages::Msg;
use super::App;
use crate::components::collections::Collections;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;

pub fn view(app: &App, ctx: &Context<App>) -> Html {
    html! {
        <div class="min-h-screen bg-white text-gray-900">
            <Navbar cart_count={app.state.cart_count()} />
            <Hero />
            <main>
                { build_main(app, ctx) }
            </main>
            <Footer />
        </div>
    }
}

/// Loading message while a load is running, the catalog otherwise. A failed
/// load renders as an empty catalog.
fn build_main(app: &App, ctx: &Context<App>) -> Html {
    if app.state.is_loading() {
        return html! {
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 text-center">
                {"Loading products..."}
            </div>
        };
    }

    html! {
        <Collections
            products={app.state.products().to_vec()}
            on_add={ctx.link().callback(Msg::AddToCart)}
        />
    }
}
