//! Shared constants for the page enhancements.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class placed on the document root while the light theme is active.
pub const LIGHT_CLASS: &str = "light";

// ── Scroll spy ──────────────────────────────────────────────────

/// Selector for the navigation links tracked by the scroll spy.
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";

/// Class marking the navigation link of the section currently in view.
pub const ACTIVE_CLASS: &str = "active";

/// Shrinks the observer root to the vertical middle 20% of the viewport.
pub const TRIGGER_BAND_ROOT_MARGIN: &str = "-40% 0px -40% 0px";

// ── Back to top ─────────────────────────────────────────────────

/// Scroll offset in CSS pixels above which the back-to-top control shows.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

// ── Toasts ──────────────────────────────────────────────────────

/// How long a toast stays on the page.
pub const TOAST_LIFETIME_MS: u32 = 1_800;

/// Class applied to every toast element.
pub const TOAST_CLASS: &str = "tmp-toast";

/// Inline style applied to every toast, as CSS property/value pairs.
pub const TOAST_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("right", "18px"),
    ("bottom", "80px"),
    ("background", "#111"),
    ("color", "#fff"),
    ("padding", "10px 12px"),
    ("border-radius", "8px"),
    ("z-index", "80"),
];

// ── Clipboard ───────────────────────────────────────────────────

/// Address the copy controls write when the page does not configure one.
pub const DEFAULT_EMAIL: &str = "wendeelmarinho@gmail.com";

pub const COPY_SUCCESS_TEXT: &str = "Copied email to clipboard";
pub const COPY_FAILURE_TEXT: &str = "Copy failed — use mailto";

// ── Page structure ──────────────────────────────────────────────

/// Id of the `<script type="application/json">` element carrying config overrides.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";
