use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use super::{listen, query_all};

/// Selector of the in-page target for `href`, if it points inside the page at all.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

pub fn scroll_destination(target_offset_top: f64, anchor_offset: f64) -> f64 {
    target_offset_top - anchor_offset
}

/// Smooth-scrolls same-page anchor links, leaving room for the fixed nav.
pub fn attach(window: &Window, document: &Document, anchor_offset: f64) {
    for anchor in query_all(document, r##"a[href^="#"]"##) {
        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |e: MouseEvent| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            // Ids that are not valid selectors make query_selector throw; treat them as missing.
            let Some(target) = document
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };

            e.prevent_default();
            let options = ScrollToOptions::new();
            options.set_top(scroll_destination(f64::from(target.offset_top()), anchor_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
}
