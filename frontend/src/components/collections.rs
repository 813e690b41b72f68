//! Catalog body: one titled section per displayed category, each a grid of
//! product cards.
//!
//! Sections come from `CategoryGroups::sections`, so they appear in the fixed
//! display order and categories outside it are skipped.

use common::catalog::group_by_category;
use common::model::product::{unique_display_keys, Product};
use yew::{html, Callback, Component, Context, Html, Properties};

use super::product_card::ProductCard;

#[derive(Properties, PartialEq)]
pub struct CollectionsProps {
    pub products: Vec<Product>,
    pub on_add: Callback<Product>,
}

pub struct Collections;

impl Component for Collections {
    type Message = ();
    type Properties = CollectionsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Collections
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let groups = group_by_category(&props.products);

        html! {
            <section id="collections" class="py-12 sm:py-16 bg-gradient-to-b from-white to-pink-50/40">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    { for groups.sections().map(|(category, products)| category_section(category, products, &props.on_add)) }
                </div>
            </section>
        }
    }
}

fn category_section(category: &'static str, products: &[Product], on_add: &Callback<Product>) -> Html {
    let keys = unique_display_keys(products);

    html! {
        <div key={category} class="mb-10">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-2xl font-bold">{ category }</h2>
                <a href="#" class="text-pink-600 hover:text-pink-700 text-sm">{"View all"}</a>
            </div>
            <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4">
                { for products.iter().zip(keys).map(|(product, key)| html! {
                    <ProductCard key={key} product={product.clone()} on_add={on_add.clone()} />
                }) }
            </div>
        </div>
    }
}
