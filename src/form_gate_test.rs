use std::rc::Rc;

use super::*;
use crate::dom::dom_test::FakePage;

// =============================================================
// fields_complete
// =============================================================

#[test]
fn both_fields_required() {
    assert!(!fields_complete(Some(""), Some("")));
    assert!(!fields_complete(Some("Ada"), Some("")));
    assert!(!fields_complete(Some(""), Some("Hello")));
    assert!(fields_complete(Some("Ada"), Some("Hello")));
}

#[test]
fn whitespace_only_counts_as_empty() {
    assert!(!fields_complete(Some("   "), Some("Hello")));
    assert!(!fields_complete(Some("Ada"), Some("\n\t ")));
    assert!(fields_complete(Some("  Ada "), Some(" Hello\n")));
}

#[test]
fn missing_field_keeps_gate_closed() {
    assert!(!fields_complete(None, Some("Hello")));
    assert!(!fields_complete(Some("Ada"), None));
    assert!(!fields_complete(None, None));
}

// =============================================================
// install
// =============================================================

#[test]
fn send_enables_only_when_both_fields_filled() {
    let page = Rc::new(FakePage::portfolio());
    assert!(install(&page, &ElementIds::default()));
    let send = page.get("contact-send");
    assert!(send.is_disabled());

    page.type_into("name", "Ada");
    assert!(send.is_disabled());

    page.type_into("message", "   ");
    assert!(send.is_disabled());

    page.type_into("message", "Hello");
    assert!(!send.is_disabled());

    page.type_into("name", "");
    assert!(send.is_disabled());
}

#[test]
fn missing_message_field_keeps_send_disabled() {
    let page = Rc::new(FakePage::portfolio());
    page.detach("message");
    assert!(install(&page, &ElementIds::default()));
    page.type_into("name", "Ada");
    assert!(page.get("contact-send").is_disabled());
    assert_eq!(page.listener_count("input"), 1);
}

#[test]
fn missing_send_control_is_noop() {
    let page = Rc::new(FakePage::portfolio());
    page.detach("contact-send");
    assert!(!install(&page, &ElementIds::default()));
    assert_eq!(page.listener_count("input"), 0);
    page.type_into("name", "Ada");
}
