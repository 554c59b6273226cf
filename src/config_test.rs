use super::*;
use crate::dom::dom_test::FakePage;

fn embed(page: &FakePage, raw: &str) {
    page.add("script", CONFIG_ELEMENT_ID).set_text(raw);
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_stock_page() {
    let config = SiteConfig::default();
    assert_eq!(config.email, "wendeelmarinho@gmail.com");
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.nav_link_selector, ".nav-links a");
    assert_eq!(config.toast_lifetime_ms, 1_800);
    assert!((config.back_to_top_threshold_px - 300.0).abs() < f64::EPSILON);
    assert_eq!(config.ids.copy_email, ["copy-email", "copy-email-2"]);
    assert_eq!(config.ids.send_button, "contact-send");
    assert_eq!(config.ids.theme_toggle, "theme-toggle");
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_overrides_only_given_fields() {
    let config = SiteConfig::from_json(r#"{"email":"ada@example.com","ids":{"send_button":"send"}}"#).unwrap();
    assert_eq!(config.email, "ada@example.com");
    assert_eq!(config.ids.send_button, "send");
    assert_eq!(config.ids.name_input, "name");
    assert_eq!(config.toast_lifetime_ms, 1_800);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = SiteConfig::from_json(r#"{"emial":"typo@example.com"}"#).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn from_json_rejects_malformed_documents() {
    assert!(SiteConfig::from_json("{not json").is_err());
    assert!(SiteConfig::from_json(r#"{"toast_lifetime_ms":"long"}"#).is_err());
}

// =============================================================
// load
// =============================================================

#[test]
fn load_without_element_uses_defaults() {
    let page = FakePage::new();
    assert_eq!(SiteConfig::load(&page), SiteConfig::default());
}

#[test]
fn load_reads_embedded_document() {
    let page = FakePage::new();
    embed(&page, r#"{"email":"ada@example.com","back_to_top_threshold_px":120}"#);
    let config = SiteConfig::load(&page);
    assert_eq!(config.email, "ada@example.com");
    assert!((config.back_to_top_threshold_px - 120.0).abs() < f64::EPSILON);
}

#[test]
fn load_falls_back_on_invalid_document() {
    let page = FakePage::new();
    embed(&page, "{oops");
    assert_eq!(SiteConfig::load(&page), SiteConfig::default());
}

#[test]
fn load_treats_blank_element_as_absent() {
    let page = FakePage::new();
    embed(&page, "  \n ");
    assert_eq!(SiteConfig::load(&page), SiteConfig::default());
}
