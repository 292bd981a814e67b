use log::{debug, info, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::Reflect;
use web_sys::{Document, Event, Window};

use super::listen;

/// Registers the offline service worker once the page has finished loading.
pub fn register(window: &Window, document: &Document, url: &'static str) {
    let navigator = window.navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false) {
        debug!("Service workers unsupported, skipping registration");
        return;
    }

    // The wasm module can start after `load` has already fired.
    if document.ready_state() == "complete" {
        spawn_local(register_now(window.clone(), url));
    } else {
        let win = window.clone();
        listen(window, "load", move |_: Event| {
            spawn_local(register_now(win.clone(), url));
        });
    }
}

async fn register_now(window: Window, url: &'static str) {
    let promise = window.navigator().service_worker().register(url);
    match JsFuture::from(promise).await {
        Ok(_) => info!("Service Worker registered successfully"),
        Err(e) => warn!("Service Worker registration failed: {:?}", e),
    }
}
