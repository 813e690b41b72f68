use crate::app::App;

mod api;
mod app;
mod components;

fn main() {
    // Surfaces the catalog loader's `log` records in the browser console.
    _ = console_log::init_with_level(log::Level::Debug);

    yew::Renderer::<App>::new().render();
}
