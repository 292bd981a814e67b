//! Page chrome that runs next to the hydrated content.
//!
//! Every behavior owns the elements it works on and attaches its own listeners.
//! Listeners live for the whole page, so their closures are leaked on purpose.
//! Behaviors that act on hydrated markup wait for [`HYDRATED_EVENT`].

pub mod anchors;
pub mod contact;
pub mod dropdowns;
pub mod lazy_images;
pub mod menu;
pub mod scroll;
pub mod service_worker;
pub mod tilt;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, CustomEvent, Document, Element, EventTarget, Window};

use crate::config::SiteConfig;

/// Dispatched on the document once every region has been written.
pub const HYDRATED_EVENT: &str = "content-hydrated";

pub(crate) fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) =
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
    {
        warn!("Could not listen for {}: {:?}", event, e);
    }
    callback.forget();
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn announce_hydrated(document: &Document) -> Result<(), JsValue> {
    let event = CustomEvent::new(HYDRATED_EVENT)?;
    document.dispatch_event(&event)?;
    Ok(())
}

pub struct Interactions {
    window: Window,
    document: Document,
    config: SiteConfig,
}

impl Interactions {
    pub fn new(window: Window, document: Document, config: SiteConfig) -> Self {
        Self {
            window,
            document,
            config,
        }
    }

    /// Attaches everything. Must run before hydration so the hydrated-event
    /// listener is in place when the event fires.
    pub fn install(self) {
        if let Some(menu) = menu::MobileMenu::find(&self.document) {
            menu.attach();
        }
        if let Some(nav) = scroll::StickyNav::find(&self.document, self.config.sticky_threshold) {
            nav.attach(&self.window);
        }
        if let Some(bar) = scroll::ScrollProgress::find(&self.document) {
            bar.attach(&self.window);
        }
        if let Some(hero) = scroll::Parallax::find(&self.document, self.config.parallax_speed) {
            hero.attach(&self.window);
        }
        if let Some(video) = scroll::HeroVideo::find(&self.document) {
            video.attach(&self.window);
        }
        tilt::attach_all(&self.document);
        lazy_images::observe(&self.window, &self.document);
        if let Some(form) = contact::ContactForm::find(&self.document, &self.config) {
            form.attach();
        }
        service_worker::register(&self.window, &self.document, self.config.service_worker_url);

        when_hydrated(&self.window, &self.document, self.config.anchor_offset);
    }
}

/// Attaches the listeners that need hydrated markup the first time
/// [`HYDRATED_EVENT`] fires. Later announcements are ignored.
pub(crate) fn when_hydrated(window: &Window, document: &Document, anchor_offset: f64) {
    let doc = document.clone();
    let win = window.clone();
    let on_hydrated = Closure::once_into_js(move || {
        debug!("Content hydrated, attaching navigation listeners");
        dropdowns::attach(&doc);
        anchors::attach(&win, &doc, anchor_offset);
    });

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(e) = document.add_event_listener_with_callback_and_add_event_listener_options(
        HYDRATED_EVENT,
        on_hydrated.unchecked_ref(),
        &options,
    ) {
        warn!("Could not wait for hydration: {:?}", e);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::testing::{blank_document, click};

    wasm_bindgen_test_configure!(run_in_browser);

    const NAV: &str = r#"
        <li class="nav-item-dropdown">
          <a href="/services" class="nav-link-with-dropdown" id="parent">Services</a>
          <div class="dropdown-menu" id="menu"><a href="/survey" class="dropdown-item">Survey</a></div>
        </li>
    "#;

    fn menu_open(document: &Document) -> bool {
        document.get_element_by_id("menu").unwrap().class_list().contains("active")
    }

    #[wasm_bindgen_test]
    fn navigation_listeners_wait_for_hydration() {
        let window = web_sys::window().unwrap();
        let document = blank_document(NAV);
        when_hydrated(&window, &document, 80.0);
        let parent = document.get_element_by_id("parent").unwrap();

        assert!(click(&parent), "nothing listens before hydration");
        assert!(!menu_open(&document));

        announce_hydrated(&document).unwrap();
        assert!(!click(&parent));
        assert!(menu_open(&document));
    }

    #[wasm_bindgen_test]
    fn repeated_announcements_attach_once() {
        let window = web_sys::window().unwrap();
        let document = blank_document(NAV);
        when_hydrated(&window, &document, 80.0);

        announce_hydrated(&document).unwrap();
        announce_hydrated(&document).unwrap();

        // A second listener would toggle the menu straight back closed.
        click(&document.get_element_by_id("parent").unwrap());
        assert!(menu_open(&document));
    }
}
