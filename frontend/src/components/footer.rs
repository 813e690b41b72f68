use yew::{html, Component, Context, Html};

/// Site footer: brand blurb, customer-care links, payment methods and the
/// copyright line for the current year.
pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Footer
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let year = js_sys::Date::new_0().get_full_year();

        html! {
            <footer class="border-t border-gray-100 bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10 grid sm:grid-cols-3 gap-8">
                    <div>
                        <div class="text-xl font-extrabold">
                            <span class="text-pink-600">{"Kidz"}</span>{"Bazaar"}
                        </div>
                        <p class="mt-2 text-sm text-gray-600">
                            {"Trendy kidswear, delivered across Bangladesh. Cash on delivery available."}
                        </p>
                    </div>
                    <div>
                        <div class="font-semibold text-gray-900">{"Customer Care"}</div>
                        <ul class="mt-3 space-y-2 text-sm text-gray-600">
                            <li>{"Shipping & Delivery"}</li>
                            <li>{"Return & Exchange"}</li>
                            <li>{"Size Guide"}</li>
                            <li>{"Contact: 01XXXXXXXXX"}</li>
                        </ul>
                    </div>
                    <div>
                        <div class="font-semibold text-gray-900">{"We accept"}</div>
                        <div class="mt-3 flex items-center gap-2 text-sm text-gray-600">
                            { for ["COD", "bKash", "Nagad"].into_iter().map(payment_badge) }
                        </div>
                    </div>
                </div>
                <div class="text-center text-xs text-gray-500 pb-6">
                    { format!("© {} KidzBazaar. All rights reserved.", year) }
                </div>
            </footer>
        }
    }
}

fn payment_badge(method: &'static str) -> Html {
    html! { <span class="px-2 py-1 rounded border">{ method }</span> }
}
