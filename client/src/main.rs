use std::rc::Rc;

use client::app::{App, AppProps};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let table = Rc::new(route_table::build());
    log::info!("{} routes, {:?} mode", table.len(), table.mode());

    yew::Renderer::<App>::with_props(AppProps { table }).render();
}
