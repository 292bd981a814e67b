use yew::prelude::*;

use crate::content::NavItem;

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct NavLinksProps {
    pub items: Vec<NavItem>,
}

/// Desktop menu entries. Dropdown items get a hidden `.dropdown-menu` next to their link.
#[function_component(DesktopNavLinks)]
pub fn desktop_nav_links(props: &NavLinksProps) -> Html {
    html! {
        <>{ for props.items.iter().map(desktop_item) }</>
    }
}

fn desktop_item(item: &NavItem) -> Html {
    let Some(subpages) = item.dropdown() else {
        return plain_item(&item.url, &item.name);
    };

    html! {
        <li class="nav-item-dropdown">
            <a href={item.url.clone()} class="nav-link-with-dropdown">{ item.name.clone() }</a>
            <div class="dropdown-menu">
                {
                    for subpages.iter().map(|sub| html! {
                        <a href={sub.url.clone()} class="dropdown-item">{ sub.name.clone() }</a>
                    })
                }
            </div>
        </li>
    }
}

#[function_component(MobileNavLinks)]
pub fn mobile_nav_links(props: &NavLinksProps) -> Html {
    html! {
        <>{ for props.items.iter().map(mobile_item) }</>
    }
}

fn mobile_item(item: &NavItem) -> Html {
    let Some(subpages) = item.dropdown() else {
        return plain_item(&item.url, &item.name);
    };

    // The parent label only toggles the submenu, so its own page goes first in the list.
    html! {
        <li class="mobile-nav-item-dropdown">
            <div class="mobile-nav-parent">{ item.name.clone() }</div>
            <ul class="mobile-submenu">
                { plain_item(&item.url, &format!("View {}", item.name)) }
                { for subpages.iter().map(|sub| plain_item(&sub.url, &sub.name)) }
            </ul>
        </li>
    }
}

fn plain_item(url: &str, label: &str) -> Html {
    html! {
        <li><a href={url.to_string()}>{ label.to_string() }</a></li>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::testing::render_html;

    fn items() -> Vec<NavItem> {
        serde_json::from_str(
            r#"[
                {"name": "Home", "url": "/"},
                {"name": "Services", "url": "/services", "hasDropdown": true,
                 "subpages": [{"name": "Survey", "url": "/survey"}, {"name": "Radar", "url": "/radar"}]},
                {"name": "Contact", "url": "/contact", "hasDropdown": true, "subpages": []}
            ]"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn desktop_links_expand_dropdown_items() {
        let html = render_html::<DesktopNavLinks>(NavLinksProps { items: items() }).await;
        assert_eq!(
            html,
            concat!(
                r#"<li><a href="/">Home</a></li>"#,
                r#"<li class="nav-item-dropdown">"#,
                r#"<a href="/services" class="nav-link-with-dropdown">Services</a>"#,
                r#"<div class="dropdown-menu">"#,
                r#"<a href="/survey" class="dropdown-item">Survey</a>"#,
                r#"<a href="/radar" class="dropdown-item">Radar</a>"#,
                r#"</div></li>"#,
                r#"<li><a href="/contact">Contact</a></li>"#,
            )
        );
    }

    #[tokio::test]
    async fn mobile_submenu_starts_with_the_parent_page() {
        let html = render_html::<MobileNavLinks>(NavLinksProps { items: items() }).await;
        assert_eq!(
            html,
            concat!(
                r#"<li><a href="/">Home</a></li>"#,
                r#"<li class="mobile-nav-item-dropdown">"#,
                r#"<div class="mobile-nav-parent">Services</div>"#,
                r#"<ul class="mobile-submenu">"#,
                r#"<li><a href="/services">View Services</a></li>"#,
                r#"<li><a href="/survey">Survey</a></li>"#,
                r#"<li><a href="/radar">Radar</a></li>"#,
                r#"</ul></li>"#,
                r#"<li><a href="/contact">Contact</a></li>"#,
            )
        );
    }

    #[tokio::test]
    async fn empty_navigation_renders_nothing() {
        let html = render_html::<DesktopNavLinks>(NavLinksProps { items: Vec::new() }).await;
        assert_eq!(html, "");
    }
}
