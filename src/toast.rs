//! Transient status notifications.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::consts::{TOAST_CLASS, TOAST_STYLE};
use crate::dom::{Element, Page};

/// Show `text` in a floating status element, removed after `lifetime_ms`.
///
/// Toasts are announced to assistive technology via `role="status"`. Several
/// may be on screen at once. Returns the element, or `None` if the page could
/// not host it.
pub fn show<P: Page>(page: &P, text: &str, lifetime_ms: u32) -> Option<P::Element> {
    let toast = page.create_element("div")?;
    toast.add_class(TOAST_CLASS);
    toast.set_attribute("role", "status");
    toast.set_text(text);
    for (property, value) in TOAST_STYLE {
        toast.set_style(property, value);
    }
    if !page.append_to_body(&toast) {
        log::warn!("toast: document has no body, dropping {text:?}");
        return None;
    }

    let expiring = toast.clone();
    page.set_timeout(lifetime_ms, Box::new(move || expiring.remove()));
    Some(toast)
}
