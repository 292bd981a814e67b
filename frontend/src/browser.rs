use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};
use yew::BaseComponent;

use crate::components::footer::FooterSections;
use crate::components::navigation::{DesktopNavLinks, MobileNavLinks};
use crate::components::sections::{
    ClientsGrid, ContentSections, Paragraphs, SurveyGrid, WhyChooseGrid,
};
use crate::hydrator::{Fill, HydrationError, MountRoot, RegionView};

type Unmount = Box<dyn FnOnce()>;

fn mount<C: BaseComponent>(host: Element, props: C::Properties) -> Unmount {
    let app = yew::Renderer::<C>::with_root_and_props(host, props).render();
    Box::new(move || app.destroy())
}

fn mount_view(host: Element, view: RegionView) -> Unmount {
    match view {
        RegionView::DesktopNav(props) => mount::<DesktopNavLinks>(host, props),
        RegionView::MobileNav(props) => mount::<MobileNavLinks>(host, props),
        RegionView::ContentSections(props) => mount::<ContentSections>(host, props),
        RegionView::SurveyGrid(props) => mount::<SurveyGrid>(host, props),
        RegionView::AboutParagraphs(props) => mount::<Paragraphs>(host, props),
        RegionView::WhyChooseGrid(props) => mount::<WhyChooseGrid>(host, props),
        RegionView::ClientsGrid(props) => mount::<ClientsGrid>(host, props),
        RegionView::Footer(props) => mount::<FooterSections>(host, props),
    }
}

/// Mount points of the live page, looked up with `getElementById`.
///
/// Container regions become Yew apps rooted at their mount point. Yew renders
/// them on the next tick, so callers wait a tick before reading the markup.
pub struct DocumentMounts {
    document: Document,
    apps: HashMap<&'static str, Unmount>,
}

impl DocumentMounts {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            apps: HashMap::new(),
        }
    }
}

impl MountRoot for DocumentMounts {
    fn has_mount(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn fill(&mut self, id: &'static str, fill: &Fill) -> Result<(), HydrationError> {
        let target = self
            .document
            .get_element_by_id(id)
            .ok_or(HydrationError::MissingMountPoint(id))?;
        if let Some(unmount) = self.apps.remove(id) {
            unmount();
        }

        match fill {
            Fill::Text(text) => target.set_text_content(Some(text)),
            Fill::Link { text, href } => {
                target.set_text_content(Some(text));
                target
                    .set_attribute("href", href)
                    .map_err(|e: JsValue| HydrationError::Dom {
                        id,
                        reason: format!("{:?}", e),
                    })?;
            }
            Fill::View(view) => {
                self.apps.insert(id, mount_view(target, view.clone()));
            }
            Fill::Clear => target.set_text_content(None),
        }
        Ok(())
    }
}
