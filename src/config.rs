//! Site configuration.
//!
//! Every element id, text, and threshold the features bind to lives in
//! [`SiteConfig`]. Defaults describe the stock portfolio page; a page can
//! override any field with a JSON document embedded as
//! `<script type="application/json" id="folio-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    BACK_TO_TOP_THRESHOLD_PX, CONFIG_ELEMENT_ID, COPY_FAILURE_TEXT, COPY_SUCCESS_TEXT, DEFAULT_EMAIL, NAV_LINK_SELECTOR,
    THEME_STORAGE_KEY, TOAST_LIFETIME_MS,
};
use crate::dom::{Element, Page};
use crate::error::PageError;

/// Ids of the optional page elements the features attach to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementIds {
    pub theme_toggle: String,
    pub back_to_top: String,
    pub copy_email: Vec<String>,
    pub name_input: String,
    pub message_input: String,
    pub send_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            theme_toggle: "theme-toggle".into(),
            back_to_top: "back-to-top".into(),
            copy_email: vec!["copy-email".into(), "copy-email-2".into()],
            name_input: "name".into(),
            message_input: "message".into(),
            send_button: "contact-send".into(),
        }
    }
}

/// Runtime configuration for [`crate::init`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Address written to the clipboard by the copy controls.
    pub email: String,
    pub theme_storage_key: String,
    pub nav_link_selector: String,
    pub back_to_top_threshold_px: f64,
    pub toast_lifetime_ms: u32,
    pub copy_success_text: String,
    pub copy_failure_text: String,
    pub ids: ElementIds,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.into(),
            theme_storage_key: THEME_STORAGE_KEY.into(),
            nav_link_selector: NAV_LINK_SELECTOR.into(),
            back_to_top_threshold_px: BACK_TO_TOP_THRESHOLD_PX,
            toast_lifetime_ms: TOAST_LIFETIME_MS,
            copy_success_text: COPY_SUCCESS_TEXT.into(),
            copy_failure_text: COPY_FAILURE_TEXT.into(),
            ids: ElementIds::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override document. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load the config embedded in `page`, falling back to defaults when the
    /// element is absent, empty, or invalid.
    pub fn load<P: Page>(page: &P) -> Self {
        let Some(raw) = page.element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text()) else {
            return Self::default();
        };
        if raw.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("config: ignoring #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }
}
