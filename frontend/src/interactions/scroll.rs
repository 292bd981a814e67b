use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, Event, HtmlElement, HtmlVideoElement, Window};

use super::listen;

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Percentage of the page scrolled, 0 when the page is shorter than the viewport.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Hero offset for the parallax effect; `None` once the hero has left the viewport.
pub fn parallax_offset(scroll_y: f64, inner_height: f64, speed: f64) -> Option<f64> {
    (scroll_y < inner_height).then(|| scroll_y * speed)
}

pub fn is_out_of_view(top: f64, bottom: f64, inner_height: f64) -> bool {
    bottom < 0.0 || top > inner_height
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn inner_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Adds `scrolled` to the top nav once the page moves past the threshold.
pub struct StickyNav {
    nav: Element,
    threshold: f64,
}

impl StickyNav {
    pub fn find(document: &Document, threshold: f64) -> Option<Self> {
        let nav = document.query_selector("nav").ok().flatten()?;
        Some(Self { nav, threshold })
    }

    pub fn attach(self, window: &Window) {
        let win = window.clone();
        listen(window, "scroll", move |_: Event| {
            let scrolled = is_scrolled(scroll_y(&win), self.threshold);
            let _ = self.nav.class_list().toggle_with_force("scrolled", scrolled);
        });
    }
}

pub struct ScrollProgress {
    bar: HtmlElement,
    root: Element,
}

impl ScrollProgress {
    pub fn find(document: &Document) -> Option<Self> {
        let bar: HtmlElement = document.get_element_by_id("scroll-progress")?.dyn_into().ok()?;
        let root = document.document_element()?;
        Some(Self { bar, root })
    }

    pub fn attach(self, window: &Window) {
        let win = window.clone();
        listen(window, "scroll", move |_: Event| {
            let percent = scroll_progress(
                scroll_y(&win),
                f64::from(self.root.scroll_height()),
                f64::from(self.root.client_height()),
            );
            let _ = self.bar.style().set_property("width", &format!("{}%", percent));
        });
    }
}

pub struct Parallax {
    hero: HtmlElement,
    speed: f64,
}

impl Parallax {
    pub fn find(document: &Document, speed: f64) -> Option<Self> {
        let hero: HtmlElement = document
            .query_selector(".hero-section")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;
        Some(Self { hero, speed })
    }

    pub fn attach(self, window: &Window) {
        let win = window.clone();
        listen(window, "scroll", move |_: Event| {
            if let Some(offset) = parallax_offset(scroll_y(&win), inner_height(&win), self.speed) {
                let _ = self
                    .hero
                    .style()
                    .set_property("transform", &format!("translateY({}px)", offset));
            }
        });
    }
}

/// Pauses the background video while it is scrolled out of sight.
pub struct HeroVideo {
    video: HtmlVideoElement,
}

impl HeroVideo {
    pub fn find(document: &Document) -> Option<Self> {
        let video: HtmlVideoElement = document
            .query_selector(".hero-video")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;
        Some(Self { video })
    }

    pub fn attach(self, window: &Window) {
        let win = window.clone();
        listen(window, "scroll", move |_: Event| {
            let rect = self.video.get_bounding_client_rect();
            if is_out_of_view(rect.top(), rect.bottom(), inner_height(&win)) {
                let _ = self.video.pause();
            } else if self.video.paused() {
                if let Ok(promise) = self.video.play() {
                    // Autoplay may be refused; nothing to do about it.
                    spawn_local(async move {
                        let _ = JsFuture::from(promise).await;
                    });
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, false)]
    #[case(100.0, false)]
    #[case(100.5, true)]
    #[case(2400.0, true)]
    fn sticky_threshold(#[case] scroll_y: f64, #[case] scrolled: bool) {
        assert_eq!(is_scrolled(scroll_y, 100.0), scrolled);
    }

    #[rstest]
    #[case(0.0, 2000.0, 1000.0, 0.0)]
    #[case(500.0, 2000.0, 1000.0, 50.0)]
    #[case(1000.0, 2000.0, 1000.0, 100.0)]
    #[case(1200.0, 2000.0, 1000.0, 100.0)]
    #[case(10.0, 800.0, 800.0, 0.0)]
    fn progress_percentage(
        #[case] scroll_y: f64,
        #[case] scroll_height: f64,
        #[case] client_height: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(scroll_progress(scroll_y, scroll_height, client_height), expected);
    }

    #[test]
    fn parallax_stops_below_the_fold() {
        assert_eq!(parallax_offset(200.0, 900.0, 0.5), Some(100.0));
        assert_eq!(parallax_offset(900.0, 900.0, 0.5), None);
    }

    #[test]
    fn video_visibility() {
        assert!(is_out_of_view(-500.0, -1.0, 800.0));
        assert!(is_out_of_view(801.0, 1200.0, 800.0));
        assert!(!is_out_of_view(-100.0, 300.0, 800.0));
    }
}
