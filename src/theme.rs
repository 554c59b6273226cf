//! Light/dark theme with persistence.
//!
//! The theme lives as a `light` class on the document root; its absence means
//! dark. The class is the session state, so the toggle keeps working when the
//! preference store is unavailable and only persistence is lost.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use crate::consts::LIGHT_CLASS;
use crate::dom::{Element, Page};

/// Display mode chosen by the visitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Value written to the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Only `"light"` selects the light theme.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

pub struct ThemeManager<P: Page> {
    page: Rc<P>,
    root: P::Element,
    storage_key: String,
}

impl<P: Page> ThemeManager<P> {
    /// Bind to the document root and apply the saved preference.
    ///
    /// Returns `None` only if the document has no root element.
    pub fn new(page: Rc<P>, storage_key: &str) -> Option<Self> {
        let root = page.root()?;
        let manager = Self { page, root, storage_key: storage_key.to_owned() };
        if manager.saved() == Theme::Light {
            manager.root.add_class(LIGHT_CLASS);
        }
        Some(manager)
    }

    /// Theme currently shown on the page.
    pub fn current(&self) -> Theme {
        if self.root.has_class(LIGHT_CLASS) { Theme::Light } else { Theme::Dark }
    }

    /// Flip the theme and persist it. Returns the theme now shown.
    pub fn toggle(&self) -> Theme {
        let theme = if self.root.toggle_class(LIGHT_CLASS) { Theme::Light } else { Theme::Dark };
        if let Err(err) = self.page.save_preference(&self.storage_key, theme.as_str()) {
            log::warn!("theme: keeping {} for this session only: {err}", theme.as_str());
        }
        theme
    }

    fn saved(&self) -> Theme {
        match self.page.load_preference(&self.storage_key) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(err) => {
                log::warn!("theme: cannot read saved preference: {err}");
                Theme::default()
            }
        }
    }
}

/// Apply the saved theme and bind the toggle control, if the page has one.
///
/// Returns whether a toggle control was wired.
pub fn install<P: Page>(page: &Rc<P>, storage_key: &str, toggle_id: &str) -> bool {
    let Some(manager) = ThemeManager::new(Rc::clone(page), storage_key) else {
        log::debug!("theme: document has no root element");
        return false;
    };
    let Some(control) = page.element_by_id(toggle_id) else {
        log::debug!("theme: no #{toggle_id} control");
        return false;
    };
    page.listen(
        &control,
        "click",
        Box::new(move || {
            manager.toggle();
        }),
    );
    true
}
