use log::Level;
use serde::Serialize;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Options handed to `AOS.init` once the page has been hydrated.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
    pub offset: u32,
    pub delay: u32,
    pub anchor_placement: &'static str,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: 800,
            easing: "ease-out-cubic",
            once: true,
            offset: 100,
            delay: 100,
            anchor_placement: "top-bottom",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Relative path of the content document.
    pub content_url: &'static str,
    pub service_worker_url: &'static str,
    /// Scroll offset (px) after which the nav gets the `scrolled` class.
    pub sticky_threshold: f64,
    pub parallax_speed: f64,
    /// Space left above an anchor target for the fixed nav.
    pub anchor_offset: f64,
    pub form_message_ms: u32,
    pub form_message_exit_ms: u32,
    pub animation: AnimationConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_url: "content.json",
            service_worker_url: "/sw.js",
            sticky_threshold: 100.0,
            parallax_speed: 0.5,
            anchor_offset: 80.0,
            form_message_ms: 5_000,
            form_message_exit_ms: 400,
            animation: AnimationConfig::default(),
        }
    }
}
