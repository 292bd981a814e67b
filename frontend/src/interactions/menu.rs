use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, MouseEvent};

use super::listen;

const ACTIVE: &str = "active";

/// Slide-in menu for narrow screens, opened by the burger button.
pub struct MobileMenu {
    toggle: Element,
    menu: Element,
    overlay: Option<Element>,
    body: Option<HtmlElement>,
}

impl MobileMenu {
    pub fn find(document: &Document) -> Option<Self> {
        Some(Self {
            toggle: document.get_element_by_id("mobile-menu-toggle")?,
            menu: document.get_element_by_id("mobile-menu")?,
            overlay: document.get_element_by_id("menu-overlay"),
            body: document.body(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.menu.class_list().contains(ACTIVE)
    }

    fn set_open(&self, open: bool) {
        let _ = self.menu.class_list().toggle_with_force(ACTIVE, open);
        if let Some(overlay) = &self.overlay {
            let _ = overlay.class_list().toggle_with_force(ACTIVE, open);
        }
        // Lock page scrolling behind the open menu.
        if let Some(body) = &self.body {
            let style = body.style();
            let _ = if open {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
        }
    }

    pub fn attach(self) {
        let menu = Rc::new(self);

        {
            let toggle = menu.toggle.clone();
            let menu = menu.clone();
            listen(&toggle, "click", move |_: MouseEvent| {
                menu.set_open(!menu.is_open());
            });
        }

        if let Some(overlay) = menu.overlay.clone() {
            let menu = menu.clone();
            listen(&overlay, "click", move |_: MouseEvent| menu.set_open(false));
        }
    }
}
