use std::sync::OnceLock;

use log::{error, info, warn};
use regex::Regex;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, FormData, HtmlFormElement};

use super::listen;
use crate::components::form_message::{self, MessageKind, MessageSlot};
use crate::config::SiteConfig;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter a valid name")]
    Name,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Please enter a message (at least 10 characters)")]
    Message,
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                error!("Invalid email pattern: {}", e);
                None
            }
        })
        .as_ref()
}

/// Checks every field and reports each rule that fails, in form order.
pub fn validate(name: &str, email: &str, message: &str) -> Result<(), Vec<ContactError>> {
    let mut errors = Vec::new();
    if name.trim().chars().count() < 2 {
        errors.push(ContactError::Name);
    }
    if !email_pattern().map_or(false, |re| re.is_match(email)) {
        errors.push(ContactError::Email);
    }
    if message.trim().chars().count() < 10 {
        errors.push(ContactError::Message);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub struct ContactForm {
    form: HtmlFormElement,
    message: MessageSlot,
    visible_ms: u32,
    exit_ms: u32,
}

impl ContactForm {
    pub fn find(document: &Document, config: &SiteConfig) -> Option<Self> {
        let form: HtmlFormElement = document.get_element_by_id("contact-form")?.dyn_into().ok()?;
        Some(Self {
            form,
            message: MessageSlot::default(),
            visible_ms: config.form_message_ms,
            exit_ms: config.form_message_exit_ms,
        })
    }

    fn field(data: &FormData, name: &str) -> String {
        data.get(name).as_string().unwrap_or_default()
    }

    pub fn attach(self) {
        let form = self.form.clone();
        listen(&form, "submit", move |e: Event| {
            e.prevent_default();
            let Ok(data) = FormData::new_with_form(&self.form) else {
                warn!("Could not read contact form");
                return;
            };

            let result = validate(
                &Self::field(&data, "name"),
                &Self::field(&data, "email"),
                &Self::field(&data, "message"),
            );
            let shown = match result {
                Ok(()) => {
                    info!("Contact form passed validation");
                    self.form.reset();
                    form_message::show(
                        &self.form,
                        &self.message,
                        MessageKind::Success,
                        vec![SUCCESS_MESSAGE.to_string()],
                        self.visible_ms,
                        self.exit_ms,
                    )
                }
                Err(errors) => form_message::show(
                    &self.form,
                    &self.message,
                    MessageKind::Error,
                    errors.iter().map(ToString::to_string).collect(),
                    self.visible_ms,
                    self.exit_ms,
                ),
            };
            if let Err(e) = shown {
                warn!("Could not show form message: {:?}", e);
            }
        });
    }
}
