use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{error, info, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{window, Document};

use crate::browser::DocumentMounts;
use crate::components::load_error;
use crate::config::{AnimationConfig, SiteConfig};
use crate::content::{ContentDocument, ContentError};
use crate::hydrator::{self, HydrationError, HydrationReport};
use crate::interactions::{self, Interactions};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = AOS, js_name = init, catch)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;
}

#[derive(Debug, Error)]
pub enum BootError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("content request returned HTTP {0}")]
    Status(u16),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Hydration(#[from] HydrationError),
}

async fn fetch_content(url: &str) -> Result<ContentDocument, BootError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(BootError::Status(response.status()));
    }
    let body = response.text().await?;
    Ok(ContentDocument::parse(&body)?)
}

async fn load_and_hydrate(
    document: &Document,
    config: &SiteConfig,
) -> Result<HydrationReport, BootError> {
    let content = fetch_content(config.content_url).await?;
    let mut mounts = DocumentMounts::new(document.clone());
    let report = hydrator::hydrate(&mut mounts, &content)?;
    // Region components render on the next tick. Animations and listeners need their markup.
    TimeoutFuture::new(0).await;
    Ok(report)
}

fn start_animations(config: &AnimationConfig) {
    let options = match serde_wasm_bindgen::to_value(config) {
        Ok(options) => options,
        Err(e) => {
            warn!("Could not encode animation options: {}", e);
            return;
        }
    };
    if let Err(e) = aos_init(&options) {
        warn!("Animation library unavailable: {:?}", e);
    }
}

/// Boots the page: listeners, one content fetch, hydration, animations.
pub async fn run(config: SiteConfig) {
    let Some(window) = window() else {
        error!("No window available");
        return;
    };
    let Some(document) = window.document() else {
        error!("No document available");
        return;
    };

    Interactions::new(window, document.clone(), config.clone()).install();

    match load_and_hydrate(&document, &config).await {
        Ok(report) => {
            info!(
                "Content loaded: {} regions rendered, {} skipped",
                report.rendered.len(),
                report.skipped.len()
            );
            if !report.is_complete() {
                warn!("Some regions were left blank, check content.json");
            }
            start_animations(&config.animation);
            if let Err(e) = interactions::announce_hydrated(&document) {
                warn!("Could not announce hydration: {:?}", e);
            }
        }
        Err(err) => {
            error!("Error loading content: {}", err);
            load_error::show(&document);
        }
    }
}
