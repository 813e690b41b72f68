//! Sticky top bar: brand, search box, quick links and the cart button.
//!
//! The search box and links are presentational; only the cart badge reflects
//! state.

use yew::{classes, html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Items added to the cart so far. The badge is hidden at zero.
    pub cart_count: u32,
}

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cart_count = ctx.props().cart_count;

        html! {
            <header class="sticky top-0 z-40 backdrop-blur bg-white/75 border-b border-gray-100">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <button class="p-2 rounded-md hover:bg-gray-100 sm:hidden" title="Menu">
                            <i class="material-icons">{"menu"}</i>
                        </button>
                        <a href="/" class="text-xl font-extrabold tracking-tight">
                            <span class="text-pink-600">{"Kidz"}</span>
                            <span class="text-gray-900">{"Bazaar"}</span>
                        </a>
                    </div>
                    { search_box() }
                    <div class="flex items-center gap-4">
                        <a href="#" class="hidden sm:inline text-sm text-gray-700 hover:text-gray-900">{"Offers"}</a>
                        <a href="#" class="hidden sm:inline text-sm text-gray-700 hover:text-gray-900">{"New In"}</a>
                        <button class="relative p-2 rounded-md hover:bg-gray-100" title="Cart">
                            <i class="material-icons">{"shopping_cart"}</i>
                            { cart_badge(cart_count) }
                        </button>
                    </div>
                </div>
            </header>
        }
    }
}

fn search_box() -> Html {
    html! {
        <div class="hidden sm:flex items-center gap-2 w-full max-w-xl mx-6">
            <div class="relative flex-1">
                <i class={classes!("material-icons", "absolute", "left-3", "top-1/2", "-translate-y-1/2", "text-gray-400", "text-base")}>
                    {"search"}
                </i>
                <input
                    placeholder="Search for tees, frocks, shoes..."
                    class="w-full pl-9 pr-3 py-2 rounded-lg border border-gray-200 focus:outline-none focus:ring-2 focus:ring-pink-500/30 focus:border-pink-400"
                />
            </div>
            <button class="px-4 py-2 bg-pink-600 hover:bg-pink-700 text-white rounded-lg">{"Search"}</button>
        </div>
    }
}

fn cart_badge(count: u32) -> Html {
    if count == 0 {
        return html! {};
    }
    html! {
        <span class="absolute -top-1 -right-1 bg-pink-600 text-white text-xs rounded-full px-1.5 py-0.5">
            { count.to_string() }
        </span>
    }
}
