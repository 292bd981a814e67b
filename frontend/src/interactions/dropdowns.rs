use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use super::{listen, query_all};

const ACTIVE: &str = "active";
const DESKTOP_ITEM: &str = ".nav-item-dropdown";
const DESKTOP_PARENT: &str = ".nav-link-with-dropdown";
const DESKTOP_MENU: &str = ".dropdown-menu";
const MOBILE_PARENT: &str = ".mobile-nav-parent";

/// Click-toggled submenus of the hydrated navigation, desktop and mobile.
///
/// One listener on the document handles every parent, so it keeps working when
/// the navigation is rendered again.
pub fn attach(document: &Document) {
    let doc = document.clone();
    listen(document, "click", move |e: Event| {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        if let Some(parent) = closest(&target, DESKTOP_PARENT) {
            e.prevent_default();
            toggle_desktop(&doc, &parent);
        } else if let Some(parent) = closest(&target, MOBILE_PARENT) {
            toggle_mobile(&parent);
        } else if closest(&target, DESKTOP_ITEM).is_none() {
            close_all(&doc);
        }
    });
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Opens the parent's menu, or closes it if it was open. Other menus always close.
fn toggle_desktop(document: &Document, parent: &Element) {
    let Some(menu) = parent
        .next_element_sibling()
        .filter(|sibling| sibling.matches(DESKTOP_MENU).unwrap_or(false))
    else {
        return;
    };
    let was_open = menu.class_list().contains(ACTIVE);
    close_all(document);
    if !was_open {
        let _ = menu.class_list().add_1(ACTIVE);
    }
}

fn toggle_mobile(parent: &Element) {
    let _ = parent.class_list().toggle(ACTIVE);
    if let Some(submenu) = parent.next_element_sibling() {
        let _ = submenu.class_list().toggle(ACTIVE);
    }
}

fn close_all(document: &Document) {
    for menu in query_all(document, DESKTOP_MENU) {
        let _ = menu.class_list().remove_1(ACTIVE);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::testing::{blank_document, click};

    wasm_bindgen_test_configure!(run_in_browser);

    const NAV: &str = r##"
        <ul>
          <li class="nav-item-dropdown">
            <a href="/services" class="nav-link-with-dropdown">Services</a>
            <div class="dropdown-menu" id="services"><a href="/survey" class="dropdown-item">Survey</a></div>
          </li>
          <li class="nav-item-dropdown">
            <a href="/about" class="nav-link-with-dropdown">About</a>
            <div class="dropdown-menu" id="about"><a href="/team" class="dropdown-item">Team</a></div>
          </li>
        </ul>
        <ul>
          <li class="mobile-nav-item-dropdown">
            <div class="mobile-nav-parent" id="mobile-parent">Services</div>
            <ul class="mobile-submenu" id="mobile-submenu"><li><a href="/services">View Services</a></li></ul>
          </li>
        </ul>
        <p id="elsewhere">text</p>
    "##;

    fn by_id(document: &Document, id: &str) -> Element {
        document.get_element_by_id(id).unwrap()
    }

    fn is_active(document: &Document, id: &str) -> bool {
        by_id(document, id).class_list().contains(ACTIVE)
    }

    fn parent_link(document: &Document, menu: &str) -> Element {
        by_id(document, menu).previous_element_sibling().unwrap()
    }

    #[wasm_bindgen_test]
    fn desktop_parent_toggles_its_menu_without_navigating() {
        let document = blank_document(NAV);
        attach(&document);

        let services = parent_link(&document, "services");
        assert!(!click(&services), "navigation should be prevented");
        assert!(is_active(&document, "services"));

        assert!(!click(&services));
        assert!(!is_active(&document, "services"));
    }

    #[wasm_bindgen_test]
    fn opening_one_menu_closes_the_others() {
        let document = blank_document(NAV);
        attach(&document);

        click(&parent_link(&document, "services"));
        click(&parent_link(&document, "about"));
        assert!(!is_active(&document, "services"));
        assert!(is_active(&document, "about"));

        click(&by_id(&document, "elsewhere"));
        assert!(!is_active(&document, "about"));
    }

    #[wasm_bindgen_test]
    fn mobile_parent_toggles_label_and_submenu() {
        let document = blank_document(NAV);
        attach(&document);

        click(&by_id(&document, "mobile-parent"));
        assert!(is_active(&document, "mobile-parent"));
        assert!(is_active(&document, "mobile-submenu"));

        click(&by_id(&document, "mobile-parent"));
        assert!(!is_active(&document, "mobile-parent"));
        assert!(!is_active(&document, "mobile-submenu"));
    }

    #[wasm_bindgen_test]
    fn dropdown_items_navigate_normally() {
        let document = blank_document(NAV);
        attach(&document);

        let item = by_id(&document, "services").first_element_child().unwrap();
        assert!(click(&item));
        assert!(!is_active(&document, "services"));
    }
}
