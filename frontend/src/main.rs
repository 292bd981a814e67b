use log::info;
use wasm_bindgen_futures::spawn_local;

mod app;
mod browser;
mod config;
mod content;
mod hydrator;
mod interactions;
mod components {
    pub mod footer;
    pub mod form_message;
    pub mod load_error;
    pub mod navigation;
    pub mod sections;
}
#[cfg(test)]
mod testing;

use config::SiteConfig;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting site");
    spawn_local(app::run(SiteConfig::default()));
}
