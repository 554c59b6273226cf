//! Contact form send-button gate.
//!
//! The site is static, so the send control only reflects whether the form is
//! filled in; nothing is submitted from here.

#[cfg(test)]
#[path = "form_gate_test.rs"]
mod form_gate_test;

use std::rc::Rc;

use crate::config::ElementIds;
use crate::dom::{Element, Page};

/// Both fields present and non-blank after trimming.
#[must_use]
pub fn fields_complete(name: Option<&str>, message: Option<&str>) -> bool {
    matches!((name, message), (Some(name), Some(message)) if !name.trim().is_empty() && !message.trim().is_empty())
}

pub struct FormGate<E> {
    name: Option<E>,
    message: Option<E>,
    send: E,
}

impl<E: Element> FormGate<E> {
    pub fn new(name: Option<E>, message: Option<E>, send: E) -> Self {
        Self { name, message, send }
    }

    /// Recompute and apply the send control state. Returns whether it is enabled.
    pub fn refresh(&self) -> bool {
        let name = self.name.as_ref().and_then(Element::value);
        let message = self.message.as_ref().and_then(Element::value);
        let enabled = fields_complete(name.as_deref(), message.as_deref());
        self.send.set_disabled(!enabled);
        enabled
    }
}

/// Wire the gate if the send control exists.
pub fn install<P: Page>(page: &Rc<P>, ids: &ElementIds) -> bool {
    let Some(send) = page.element_by_id(&ids.send_button) else {
        log::debug!("form_gate: no #{} control", ids.send_button);
        return false;
    };
    let name = page.element_by_id(&ids.name_input);
    let message = page.element_by_id(&ids.message_input);
    let fields = [name.clone(), message.clone()];

    let gate = Rc::new(FormGate::new(name, message, send));
    gate.refresh();
    for field in fields.iter().flatten() {
        let gate = Rc::clone(&gate);
        page.listen(
            field,
            "input",
            Box::new(move || {
                gate.refresh();
            }),
        );
    }
    true
}
