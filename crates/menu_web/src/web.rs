use leptos::prelude::*;

mod config;
mod logging;
mod menu;
mod reveal_dom;
mod video;

use menu::MenuSection;

pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = config::load();
    mount_to_body(move || view! { <MenuSection config=config /> });
}
