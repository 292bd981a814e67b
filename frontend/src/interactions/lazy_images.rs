use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, Window};

use super::query_all;

const LAZY_SELECTOR: &str = "img[data-src]";

fn reveal(img: &Element) {
    if let Some(src) = img.get_attribute("data-src") {
        let _ = img.set_attribute("src", &src);
        let _ = img.remove_attribute("data-src");
    }
}

/// Swaps `data-src` into `src` when an image first scrolls into view.
///
/// Browsers without `IntersectionObserver` get every image right away.
pub fn observe(window: &Window, document: &Document) {
    let images = query_all(document, LAZY_SELECTOR);
    if images.is_empty() {
        return;
    }

    let supported =
        Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    if !supported {
        debug!("IntersectionObserver unavailable, loading {} images eagerly", images.len());
        images.iter().for_each(reveal);
        return;
    }

    let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let img = entry.target();
                reveal(&img);
                observer.unobserve(&img);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            for img in &images {
                observer.observe(img);
            }
            callback.forget();
        }
        Err(e) => {
            warn!("Could not create image observer: {:?}", e);
            images.iter().for_each(reveal);
        }
    }
}
