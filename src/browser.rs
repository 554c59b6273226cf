//! `web-sys` implementation of [`Page`] and the WASM entry point.
//!
//! Event closures are leaked with `Closure::forget`: every listener lives as
//! long as the page.

use futures::future::LocalBoxFuture;
use js_sys::Array;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, HtmlElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use crate::config::SiteConfig;
use crate::dom::{Element, Handler, IntersectionEntry, IntersectionHandler, Page};
use crate::error::PageError;

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{}", PageError::Dom(format!("{what}: {}", describe(&err))));
            None
        }
    }
}

/// A DOM element handle.
#[derive(Clone, Debug)]
pub struct BrowserElement(web_sys::Element);

impl BrowserElement {
    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl Element for BrowserElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        warn_on_err("set_attribute", self.0.set_attribute(name, value));
    }

    fn add_class(&self, class: &str) {
        warn_on_err("classList.add", self.0.class_list().add_1(class));
    }

    fn remove_class(&self, class: &str) {
        warn_on_err("classList.remove", self.0.class_list().remove_1(class));
    }

    fn toggle_class(&self, class: &str) -> bool {
        warn_on_err("classList.toggle", self.0.class_list().toggle(class)).unwrap_or_else(|| self.has_class(class))
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.html() {
            warn_on_err("style.setProperty", html.style().set_property(property, value));
        }
    }

    fn text(&self) -> Option<String> {
        self.0.text_content()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn value(&self) -> Option<String> {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        self.0.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
    }

    fn set_disabled(&self, disabled: bool) {
        warn_on_err("toggleAttribute", self.0.toggle_attribute_with_force("disabled", disabled));
    }

    fn remove(&self) {
        self.0.remove();
    }
}

/// The live browser document.
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    /// Bind to the global window, if running in a browser with a document.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn has_global(&self, name: &str) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str(name)).unwrap_or(false)
    }

    fn add_listener(target: &web_sys::EventTarget, event: &str, mut handler: Handler) {
        let cb = Closure::wrap(Box::new(move |_event: web_sys::Event| handler()) as Box<dyn FnMut(web_sys::Event)>);
        if warn_on_err("addEventListener", target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()))
            .is_some()
        {
            cb.forget();
        }
    }

    fn storage(&self) -> Result<web_sys::Storage, PageError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(PageError::StorageUnavailable),
            Err(err) => Err(PageError::Storage(describe(&err))),
        }
    }
}

impl Page for BrowserPage {
    type Element = BrowserElement;

    fn root(&self) -> Option<BrowserElement> {
        self.document.document_element().map(BrowserElement)
    }

    fn element_by_id(&self, id: &str) -> Option<BrowserElement> {
        self.document.get_element_by_id(id).map(BrowserElement)
    }

    fn query_all(&self, selector: &str) -> Vec<BrowserElement> {
        let Some(nodes) = warn_on_err("querySelectorAll", self.document.query_selector_all(selector)) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_ref::<web_sys::Element>().cloned().map(BrowserElement))
            .collect()
    }

    fn create_element(&self, tag: &str) -> Option<BrowserElement> {
        warn_on_err("createElement", self.document.create_element(tag)).map(BrowserElement)
    }

    fn append_to_body(&self, element: &BrowserElement) -> bool {
        let Some(body) = self.document.body() else {
            return false;
        };
        warn_on_err("appendChild", body.append_child(&element.0)).is_some()
    }

    fn listen(&self, target: &BrowserElement, event: &str, handler: Handler) {
        Self::add_listener(&target.0, event, handler);
    }

    fn listen_window(&self, event: &str, handler: Handler) {
        Self::add_listener(&self.window, event, handler);
    }

    fn observe_intersections(
        &self,
        targets: &[BrowserElement],
        root_margin: &str,
        mut handler: IntersectionHandler,
    ) -> bool {
        if !self.has_global("IntersectionObserver") {
            return false;
        }
        let cb = Closure::wrap(Box::new(move |entries: Array| {
            let batch = entries
                .iter()
                .filter_map(|entry| {
                    let entry = entry.dyn_ref::<IntersectionObserverEntry>()?;
                    Some(IntersectionEntry::new(entry.target().id(), entry.is_intersecting()))
                })
                .collect::<Vec<_>>();
            handler(batch);
        }) as Box<dyn FnMut(Array)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&JsValue::from_f64(0.0));
        let Some(observer) =
            warn_on_err("IntersectionObserver", IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init))
        else {
            return false;
        };
        for target in targets {
            observer.observe(&target.0);
        }
        cb.forget();
        true
    }

    fn scroll_y(&self) -> f64 {
        warn_on_err("scrollY", self.window.scroll_y()).unwrap_or(0.0)
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn load_preference(&self, key: &str) -> Result<Option<String>, PageError> {
        self.storage()?.get_item(key).map_err(|err| PageError::Storage(describe(&err)))
    }

    fn save_preference(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.storage()?.set_item(key, value).map_err(|err| PageError::Storage(describe(&err)))
    }

    fn write_clipboard(&self, text: &str) -> LocalBoxFuture<'static, Result<(), PageError>> {
        let navigator = self.window.navigator();
        let text = text.to_owned();
        Box::pin(async move {
            let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
                .map_err(|err| PageError::Clipboard(describe(&err)))?;
            if clipboard.is_undefined() || clipboard.is_null() {
                return Err(PageError::ClipboardUnavailable);
            }
            let clipboard = clipboard.unchecked_into::<web_sys::Clipboard>();
            JsFuture::from(clipboard.write_text(&text))
                .await
                .map(|_| ())
                .map_err(|err| PageError::Clipboard(describe(&err)))
        })
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, callback).forget();
    }
}

fn run(page: BrowserPage) {
    let page = Rc::new(page);
    let config = SiteConfig::load(page.as_ref());
    crate::init(page, &config);
}

/// WASM entry point: set up logging, then install the features once the
/// document has been parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("folio: logger already set: {err}")));
    }

    let Some(page) = BrowserPage::new() else {
        log::warn!("folio: no window/document, nothing to enhance");
        return;
    };
    if page.document.ready_state() != "loading" {
        run(page);
        return;
    }

    let document = page.document.clone();
    let mut pending = Some(page);
    let cb = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(page) = pending.take() {
            run(page);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    if warn_on_err(
        "addEventListener",
        document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref()),
    )
    .is_some()
    {
        cb.forget();
    }
}
