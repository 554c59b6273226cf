use std::rc::Rc;

use super::*;
use crate::consts::NAV_LINK_SELECTOR;
use crate::dom::dom_test::FakePage;

fn active_hrefs(page: &FakePage) -> Vec<String> {
    page.links(NAV_LINK_SELECTOR)
        .iter()
        .filter(|link| link.has_class(ACTIVE_CLASS))
        .filter_map(|link| link.attribute("href"))
        .collect()
}

// =============================================================
// fragment_target
// =============================================================

#[test]
fn fragment_target_strips_hash() {
    assert_eq!(fragment_target("#about"), Some("about"));
}

#[test]
fn fragment_target_rejects_non_fragments() {
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target(""), None);
    assert_eq!(fragment_target("/blog"), None);
    assert_eq!(fragment_target("https://example.com/#about"), None);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_pairs_links_with_sections_in_order() {
    let page = FakePage::portfolio();
    let spy = ScrollSpy::resolve(&page, NAV_LINK_SELECTOR);
    let ids = spy.links().iter().map(|nav| nav.target_id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, ["about", "projects", "contact"]);
    assert_eq!(spy.links()[0].section.id(), "about");
}

#[test]
fn resolve_drops_unresolvable_links() {
    let page = FakePage::portfolio();
    page.add_link(NAV_LINK_SELECTOR, "#missing");
    page.add_link(NAV_LINK_SELECTOR, "/resume.pdf");
    page.add_link(NAV_LINK_SELECTOR, "#");
    let spy = ScrollSpy::resolve(&page, NAV_LINK_SELECTOR);
    assert_eq!(spy.links().len(), 3);
}

// =============================================================
// apply
// =============================================================

#[test]
fn intersecting_section_marks_exactly_its_link() {
    let page = FakePage::portfolio();
    let spy = ScrollSpy::resolve(&page, NAV_LINK_SELECTOR);
    let active = spy.apply(&[IntersectionEntry::new("about", true)]);
    assert_eq!(active.as_deref(), Some("about"));
    assert_eq!(active_hrefs(&page), ["#about"]);
}

#[test]
fn last_intersecting_entry_in_batch_wins() {
    let page = FakePage::portfolio();
    let spy = ScrollSpy::resolve(&page, NAV_LINK_SELECTOR);
    spy.apply(&[
        IntersectionEntry::new("about", true),
        IntersectionEntry::new("contact", true),
        IntersectionEntry::new("projects", false),
    ]);
    assert_eq!(active_hrefs(&page), ["#contact"]);
}

#[test]
fn non_intersecting_batch_keeps_previous_state() {
    let page = FakePage::portfolio();
    let spy = ScrollSpy::resolve(&page, NAV_LINK_SELECTOR);
    spy.apply(&[IntersectionEntry::new("projects", true)]);
    let active = spy.apply(&[IntersectionEntry::new("projects", false)]);
    assert_eq!(active, None);
    assert_eq!(active_hrefs(&page), ["#projects"]);
}

#[test]
fn moving_between_sections_moves_highlight() {
    let page = FakePage::portfolio();
    let spy = ScrollSpy::resolve(&page, NAV_LINK_SELECTOR);
    spy.apply(&[IntersectionEntry::new("about", true)]);
    spy.apply(&[IntersectionEntry::new("about", false), IntersectionEntry::new("projects", true)]);
    assert_eq!(active_hrefs(&page), ["#projects"]);
}

// =============================================================
// install
// =============================================================

#[test]
fn install_observes_sections_with_trigger_band() {
    let page = Rc::new(FakePage::portfolio());
    assert!(install(&page, NAV_LINK_SELECTOR));
    assert_eq!(
        page.observed_targets(),
        Some(vec!["about".to_owned(), "projects".to_owned(), "contact".to_owned()])
    );
    assert_eq!(page.observed_root_margin().as_deref(), Some("-40% 0px -40% 0px"));

    page.notify(vec![IntersectionEntry::new("contact", true)]);
    assert_eq!(active_hrefs(&page), ["#contact"]);
}

#[test]
fn install_skips_without_observer_support() {
    let page = Rc::new(FakePage::portfolio());
    page.disable_observer();
    assert!(!install(&page, NAV_LINK_SELECTOR));
    assert_eq!(page.observed_targets(), None);
}

#[test]
fn install_skips_when_no_link_resolves() {
    let page = Rc::new(FakePage::new());
    page.add_link(NAV_LINK_SELECTOR, "#nowhere");
    assert!(!install(&page, NAV_LINK_SELECTOR));
    assert_eq!(page.observed_targets(), None);
}
