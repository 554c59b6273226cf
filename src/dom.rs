//! Browser platform seam.
//!
//! Features talk to the page only through [`Page`] and [`Element`], so their
//! logic runs unchanged against the real DOM (`browser::BrowserPage`) and the
//! in-memory fake used by the tests.
//!
//! Every lookup returns an `Option`: a missing element disables the feature
//! that wanted it and nothing else. Mutating calls on [`Element`] are
//! infallible from the caller's view; implementations log DOM exceptions.

#[cfg(test)]
#[path = "dom_test.rs"]
pub(crate) mod dom_test;

use futures::future::LocalBoxFuture;

use crate::error::PageError;

/// Event handler registered through [`Page::listen`].
pub type Handler = Box<dyn FnMut()>;

/// Callback receiving one batch of visibility notifications.
pub type IntersectionHandler = Box<dyn FnMut(Vec<IntersectionEntry>)>;

/// One visibility notification for an observed section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionEntry {
    /// Id of the observed element.
    pub target_id: String,
    /// Whether the element currently intersects the trigger band.
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target_id: impl Into<String>, is_intersecting: bool) -> Self {
        Self { target_id: target_id.into(), is_intersecting }
    }
}

/// Handle to a DOM element.
pub trait Element: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Flip `class`, returning whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;
    fn has_class(&self, class: &str) -> bool;

    /// Set an inline style property, in CSS (kebab-case) naming.
    fn set_style(&self, property: &str, value: &str);

    fn text(&self) -> Option<String>;
    fn set_text(&self, text: &str);

    /// Current value of a form control, `None` for other elements.
    fn value(&self) -> Option<String>;
    fn set_disabled(&self, disabled: bool);

    /// Detach the element from the document.
    fn remove(&self);
}

/// The page a set of features is installed on.
pub trait Page: 'static {
    type Element: Element;

    // --- Structure ---

    /// The document root (`<html>`).
    fn root(&self) -> Option<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn create_element(&self, tag: &str) -> Option<Self::Element>;
    /// Append `element` to `<body>`; returns `false` if there is no body.
    fn append_to_body(&self, element: &Self::Element) -> bool;

    // --- Events ---

    fn listen(&self, target: &Self::Element, event: &str, handler: Handler);
    fn listen_window(&self, event: &str, handler: Handler);

    /// Observe `targets` against the viewport shrunk by `root_margin`.
    ///
    /// Returns `false` when the platform has no visibility observer; the
    /// handler is then never called.
    fn observe_intersections(&self, targets: &[Self::Element], root_margin: &str, handler: IntersectionHandler)
    -> bool;

    // --- Viewport ---

    fn scroll_y(&self) -> f64;
    fn scroll_to_top(&self);

    // --- Storage ---

    fn load_preference(&self, key: &str) -> Result<Option<String>, PageError>;
    fn save_preference(&self, key: &str, value: &str) -> Result<(), PageError>;

    // --- Async ---

    fn write_clipboard(&self, text: &str) -> LocalBoxFuture<'static, Result<(), PageError>>;
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}
