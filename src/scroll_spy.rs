//! Active navigation link highlighting.
//!
//! Each nav link pointing at an in-page section is paired with that section at
//! startup. Sections are observed against the middle 20% of the viewport; the
//! link of the last section reported entering the band is marked active.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

use std::rc::Rc;

use crate::consts::{ACTIVE_CLASS, TRIGGER_BAND_ROOT_MARGIN};
use crate::dom::{Element, IntersectionEntry, Page};

/// Section id referenced by a same-document `href`, e.g. `"#about"` → `"about"`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// A nav link and the section it scrolls to.
#[derive(Clone, Debug)]
pub struct NavLink<E> {
    pub link: E,
    pub section: E,
    pub target_id: String,
}

pub struct ScrollSpy<E> {
    links: Vec<NavLink<E>>,
}

impl<E: Element> ScrollSpy<E> {
    /// Pair each link matching `selector` with its target section. Links
    /// without a fragment `href` or whose section is missing are dropped.
    pub fn resolve<P: Page<Element = E>>(page: &P, selector: &str) -> Self {
        let links = page
            .query_all(selector)
            .into_iter()
            .filter_map(|link| {
                let href = link.attribute("href")?;
                let Some(target_id) = fragment_target(&href).map(str::to_owned) else {
                    log::debug!("scroll_spy: skipping non-fragment link {href:?}");
                    return None;
                };
                let Some(section) = page.element_by_id(&target_id) else {
                    log::debug!("scroll_spy: no section #{target_id}");
                    return None;
                };
                Some(NavLink { link, section, target_id })
            })
            .collect();
        Self { links }
    }

    pub fn links(&self) -> &[NavLink<E>] {
        &self.links
    }

    /// Apply one notification batch in delivery order.
    ///
    /// Every intersecting entry clears all links and marks the one targeting
    /// its section, so the last intersecting entry wins. Returns the id of the
    /// section whose link ends up active, if this batch changed anything.
    pub fn apply(&self, entries: &[IntersectionEntry]) -> Option<String> {
        let mut active = None;
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            for nav in &self.links {
                nav.link.remove_class(ACTIVE_CLASS);
            }
            active = self.links.iter().find(|nav| nav.target_id == entry.target_id).map(|nav| {
                nav.link.add_class(ACTIVE_CLASS);
                nav.target_id.clone()
            });
        }
        active
    }
}

/// Start observing sections. Returns whether the feature is active.
pub fn install<P: Page>(page: &Rc<P>, selector: &str) -> bool {
    let spy = ScrollSpy::resolve(page.as_ref(), selector);
    if spy.links().is_empty() {
        log::debug!("scroll_spy: no resolvable links for {selector:?}");
        return false;
    }
    let sections = spy.links().iter().map(|nav| nav.section.clone()).collect::<Vec<_>>();
    let observing = page.observe_intersections(
        &sections,
        TRIGGER_BAND_ROOT_MARGIN,
        Box::new(move |entries: Vec<IntersectionEntry>| {
            spy.apply(&entries);
        }),
    );
    if !observing {
        log::info!("scroll_spy: visibility observer unsupported, skipping");
    }
    observing
}
