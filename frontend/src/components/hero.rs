use yew::{html, Component, Context, Html};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1611428813653-aa606c998586?ixlib=rb-4.1.0&w=1600&auto=format&fit=crop&q=80";

/// Landing banner with the headline, calls to action and a hero photo.
pub struct Hero;

impl Component for Hero {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Hero
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="bg-gradient-to-br from-pink-50 via-rose-50 to-amber-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 sm:py-16 lg:py-20 grid md:grid-cols-2 gap-10 items-center">
                    <div>
                        <h1 class="text-4xl sm:text-5xl font-extrabold leading-tight text-gray-900">
                            {"Fashion for Little Stars in Bangladesh"}
                        </h1>
                        <p class="mt-4 text-gray-700 text-lg">
                            {"Trendy, comfy and affordable outfits for babies, boys and girls. Cash on Delivery all over Bangladesh."}
                        </p>
                        <div class="mt-6 flex flex-wrap gap-3">
                            <a href="#collections" class="px-5 py-3 bg-pink-600 hover:bg-pink-700 text-white rounded-lg">
                                {"Shop Collections"}
                            </a>
                            <a href="#winter" class="px-5 py-3 bg-white border border-pink-200 hover:border-pink-300 text-pink-700 rounded-lg">
                                {"Winter Wear"}
                            </a>
                        </div>
                        <div class="mt-6 flex items-center gap-4 text-sm text-gray-600">
                            <div class="flex items-center gap-1 text-amber-500">
                                <i class="material-icons text-base">{"star"}</i>
                                {"4.8 rating"}
                            </div>
                            <span>{"•"}</span>
                            <div>{"Free Size Exchange"}</div>
                            <span>{"•"}</span>
                            <div>{"COD Nationwide"}</div>
                        </div>
                    </div>
                    <div class="relative">
                        <img class="rounded-2xl shadow-xl w-full object-cover" src={HERO_IMAGE} alt="Kids fashion" />
                        <div class="absolute -bottom-4 -left-4 bg-white/90 backdrop-blur rounded-xl shadow-md p-4 hidden sm:block">
                            <div class="font-semibold">{"Eid Collection"}</div>
                            <div class="text-sm text-gray-600">
                                {"Shop festive looks "}
                                <i class="material-icons text-base align-middle">{"chevron_right"}</i>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        }
    }
}
