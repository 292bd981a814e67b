use web_sys::Element;
use yew::prelude::*;

pub const LOAD_ERROR_MESSAGE: &str = "Error loading content. Please refresh the page.";

/// Full-page replacement shown when the content document cannot be used.
#[function_component(LoadErrorScreen)]
pub fn load_error_screen() -> Html {
    html! {
        <div class="loading">{ LOAD_ERROR_MESSAGE }</div>
    }
}

/// Clears the body and mounts [`LoadErrorScreen`] as its only child.
pub fn show(document: &web_sys::Document) {
    let Some(body) = document.body() else {
        log::error!("Page has no body to show the error in");
        return;
    };
    replace_contents(body.into());
}

fn replace_contents(root: Element) {
    root.set_inner_html("");
    yew::Renderer::<LoadErrorScreen>::with_root(root).render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::testing::next_tick;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn error_screen_replaces_everything() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(r#"<nav id="nav-links"></nav><main><h1 id="hero-title"></h1></main>"#);
        document.body().unwrap().append_child(&root).unwrap();

        replace_contents(root.clone());
        next_tick().await;

        assert_eq!(root.child_element_count(), 1);
        let screen = root.first_element_child().unwrap();
        assert_eq!(screen.class_name(), "loading");
        assert_eq!(screen.text_content().as_deref(), Some(LOAD_ERROR_MESSAGE));
        root.remove();
    }
}
