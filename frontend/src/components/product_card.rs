use common::model::product::Product;
use yew::{html, Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    /// Receives the card's product when "Add to cart" is clicked.
    pub on_add: Callback<Product>,
}

/// Catalog tile: picture, category, title, price, rating and an add button.
pub struct ProductCard;

impl Component for ProductCard {
    type Message = ();
    type Properties = ProductCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProductCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let product = &props.product;
        let onclick = {
            let on_add = props.on_add.clone();
            let product = product.clone();
            Callback::from(move |_| on_add.emit(product.clone()))
        };

        html! {
            <div class="group bg-white rounded-xl border border-gray-100 shadow-sm hover:shadow-md overflow-hidden transition-all">
                <div class="aspect-[4/3] bg-gray-50 overflow-hidden">
                    <img
                        src={product.primary_image().to_string()}
                        alt={product.title.clone()}
                        class="w-full h-full object-cover group-hover:scale-105 transition-transform"
                    />
                </div>
                <div class="p-4">
                    <div class="text-sm text-pink-600 font-medium">{ product.category.clone() }</div>
                    <h3 class="mt-1 font-semibold text-gray-900 line-clamp-1">{ product.title.clone() }</h3>
                    <div class="mt-2 flex items-center justify-between">
                        <div class="text-lg font-bold">{ product.price_label() }</div>
                        <div class="flex items-center gap-1 text-amber-500 text-sm">
                            <i class="material-icons text-base">{"star"}</i>
                            { product.display_rating().to_string() }
                        </div>
                    </div>
                    <button
                        {onclick}
                        class="mt-3 w-full px-4 py-2 bg-pink-600 hover:bg-pink-700 text-white rounded-lg"
                    >
                        {"Add to cart"}
                    </button>
                </div>
            </div>
        }
    }
}
