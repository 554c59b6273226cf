//! Page enhancements for a static portfolio site, compiled to WebAssembly.
//!
//! Five independent features are installed once the document is ready:
//! persisted light/dark theme, active nav link highlighting, copy-email
//! controls with a status toast, a back-to-top control, and a contact form
//! send gate. Each feature looks up its own elements and silently stays off
//! when they are missing; none depends on another.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark theme toggle and persistence |
//! | [`scroll_spy`] | Active nav link tracking via a visibility observer |
//! | [`clipboard`] | Copy-email controls |
//! | [`toast`] | Transient status notifications |
//! | [`back_to_top`] | Scroll-offset driven floating control |
//! | [`form_gate`] | Send button enablement |
//! | [`dom`] | [`dom::Page`] / [`dom::Element`] platform seam |
//! | [`config`] | [`config::SiteConfig`] element ids, texts, thresholds |
//! | [`consts`] | Shared constants |
//! | [`error`] | [`error::PageError`] |
//! | `browser` | `web-sys` implementation and WASM entry point (feature `browser`) |


pub mod back_to_top;
#[cfg(feature = "browser")]
pub mod browser;
pub mod clipboard;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod form_gate;
pub mod scroll_spy;
pub mod theme;
pub mod toast;

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::dom::{Element, Page};

/// Which features found their elements during [`init`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Activated {
    pub theme_toggle: bool,
    pub scroll_spy: bool,
    pub copy_controls: usize,
    pub back_to_top: bool,
    pub form_gate: bool,
}

/// Install every feature on `page`.
///
/// Handlers own the state they need, so nothing has to be kept alive by the
/// caller. Missing elements only switch off the feature that wanted them.
pub fn init<P: Page>(page: Rc<P>, config: &SiteConfig) -> Activated {
    if let Some(root) = page.root() {
        root.set_style("scroll-behavior", "smooth");
    }

    let activated = Activated {
        theme_toggle: theme::install(&page, &config.theme_storage_key, &config.ids.theme_toggle),
        scroll_spy: scroll_spy::install(&page, &config.nav_link_selector),
        copy_controls: clipboard::install(&page, config),
        back_to_top: back_to_top::install(&page, &config.ids.back_to_top, config.back_to_top_threshold_px),
        form_gate: form_gate::install(&page, &config.ids),
    };
    log::debug!("folio: initialized {activated:?}");
    activated
}
