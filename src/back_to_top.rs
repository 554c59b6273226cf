//! Floating back-to-top control.

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

use std::rc::Rc;

use crate::dom::{Element, Page};

/// The control shows strictly above the threshold.
#[must_use]
pub fn visible_for_offset(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// CSS `display` value for the control.
#[must_use]
pub fn display_value(visible: bool) -> &'static str {
    if visible { "flex" } else { "none" }
}

pub struct BackToTop<P: Page> {
    page: Rc<P>,
    control: P::Element,
    threshold: f64,
}

impl<P: Page> BackToTop<P> {
    pub fn new(page: Rc<P>, control: P::Element, threshold: f64) -> Self {
        Self { page, control, threshold }
    }

    /// Show or hide the control for the current scroll offset.
    pub fn refresh(&self) -> bool {
        let visible = visible_for_offset(self.page.scroll_y(), self.threshold);
        self.control.set_style("display", display_value(visible));
        visible
    }

    pub fn scroll_to_top(&self) {
        self.page.scroll_to_top();
    }
}

/// Wire the control if present. Without it no scroll listener is registered.
pub fn install<P: Page>(page: &Rc<P>, control_id: &str, threshold: f64) -> bool {
    let Some(control) = page.element_by_id(control_id) else {
        log::debug!("back_to_top: no #{control_id} control");
        return false;
    };
    let watcher = Rc::new(BackToTop::new(Rc::clone(page), control.clone(), threshold));
    watcher.refresh();

    let on_scroll = Rc::clone(&watcher);
    page.listen_window(
        "scroll",
        Box::new(move || {
            on_scroll.refresh();
        }),
    );
    page.listen(&control, "click", Box::new(move || watcher.scroll_to_top()));
    true
}
