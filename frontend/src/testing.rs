#[cfg(not(target_arch = "wasm32"))]
pub use native::*;
#[cfg(target_arch = "wasm32")]
pub use browser::*;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use yew::{BaseComponent, ServerRenderer};

    /// Static HTML of `C` rendered with `props`, without hydration markers.
    pub async fn render_html<C>(props: C::Properties) -> String
    where
        C: BaseComponent,
        C::Properties: Send + 'static,
    {
        ServerRenderer::<C>::with_props(move || props)
            .hydratable(false)
            .render()
            .await
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use gloo_timers::future::TimeoutFuture;
    use web_sys::{Document, Element, Event, EventInit};

    /// A detached HTML document whose body holds `body`, so listeners from
    /// one test never see another test's clicks.
    pub fn blank_document(body: &str) -> Document {
        let document = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .implementation()
            .unwrap()
            .create_html_document()
            .unwrap();
        document.body().unwrap().set_inner_html(body);
        document
    }

    /// Dispatches a bubbling, cancelable click. Returns false when a listener
    /// prevented the default action.
    pub fn click(target: &Element) -> bool {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("click", &init).unwrap();
        target.dispatch_event(&event).unwrap()
    }

    /// Lets Yew's scheduler run the renders queued so far.
    pub async fn next_tick() {
        TimeoutFuture::new(0).await;
    }
}
