// Trunk binary for the menu page. Outside `wasm32` + `web` there is nothing
// to mount, so `main` returns straight away.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    khmer_menu_web::start();
}
