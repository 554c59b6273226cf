//! Copy-email controls.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::dom::Page;
use crate::toast;

/// Result of one copy attempt, as reported to the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

pub struct EmailCopier<P: Page> {
    page: Rc<P>,
    email: String,
    success_text: String,
    failure_text: String,
    toast_lifetime_ms: u32,
}

impl<P: Page> EmailCopier<P> {
    pub fn new(page: Rc<P>, config: &SiteConfig) -> Self {
        Self {
            page,
            email: config.email.clone(),
            success_text: config.copy_success_text.clone(),
            failure_text: config.copy_failure_text.clone(),
            toast_lifetime_ms: config.toast_lifetime_ms,
        }
    }

    /// Write the email to the clipboard and report the outcome in a toast.
    ///
    /// Never fails: a rejected write becomes the fallback toast.
    pub async fn copy(&self) -> CopyOutcome {
        let outcome = match self.page.write_clipboard(&self.email).await {
            Ok(()) => CopyOutcome::Copied,
            Err(err) => {
                log::warn!("clipboard: {err}");
                CopyOutcome::Failed
            }
        };
        let text = match outcome {
            CopyOutcome::Copied => &self.success_text,
            CopyOutcome::Failed => &self.failure_text,
        };
        toast::show(self.page.as_ref(), text, self.toast_lifetime_ms);
        outcome
    }
}

/// Bind every configured copy control present on the page.
///
/// Returns the number of controls wired.
pub fn install<P: Page>(page: &Rc<P>, config: &SiteConfig) -> usize {
    let copier = Rc::new(EmailCopier::new(Rc::clone(page), config));
    let mut wired = 0;
    for id in &config.ids.copy_email {
        let Some(control) = page.element_by_id(id) else {
            log::debug!("clipboard: no #{id} control");
            continue;
        };
        let copier = Rc::clone(&copier);
        let spawner = Rc::clone(page);
        page.listen(
            &control,
            "click",
            Box::new(move || {
                let copier = Rc::clone(&copier);
                spawner.spawn_local(Box::pin(async move {
                    copier.copy().await;
                }));
            }),
        );
        wired += 1;
    }
    wired
}
