//! Smooth scrolling for in-page anchor links.
//!
//! A single document-level click listener intercepts clicks on `<a href="#id">`
//! links and scrolls the target into view. The listener is owned by
//! [`SmoothScroll`] and removed when it is dropped.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnchorError {
    #[error("click was not on an anchor")]
    NoAnchor,
    #[error("not an in-page link: {0}")]
    External(String),
    #[error("placeholder link")]
    Placeholder,
    #[error("no element with id '{0}'")]
    MissingTarget(String),
    #[error("couldn't register click listener: {0}")]
    Listener(String),
}

/// A click event as seen by the interceptor.
pub trait AnchorClick {
    /// The `href` of the closest in-page anchor around the click target.
    fn anchor_href(&self) -> Option<String>;
    fn prevent_default(&self);
}

/// The document the listener is attached to.
pub trait ScrollHost {
    type Target;
    type Listener;

    fn find(&self, id: &str) -> Option<Self::Target>;
    /// Smooth scroll, aligning the target to the top of the viewport.
    fn scroll_to(&self, target: &Self::Target);
    /// Registers one click listener that routes clicks through [`intercept`].
    fn listen(&self) -> Result<Self::Listener, AnchorError>;
    fn unlisten(&self, listener: Self::Listener);
}

/// Returns the element id an href points at, `"#skills"` -> `"skills"`.
pub fn fragment_id(href: &str) -> Result<&str, AnchorError> {
    match href.strip_prefix('#') {
        None => Err(AnchorError::External(href.to_string())),
        Some("") => Err(AnchorError::Placeholder),
        Some(id) => Ok(id),
    }
}

/// Whether a link should open in a new browsing context. In-page anchors
/// and `mailto:` links stay in the current one.
pub fn opens_new_context(href: &str) -> bool {
    matches!(fragment_id(href), Err(AnchorError::External(_))) && !href.starts_with("mailto:")
}

/// Handles one click. The default jump is only suppressed when there is
/// something to scroll to.
pub fn intercept<H, C>(host: &H, click: &C) -> Result<(), AnchorError>
where
    H: ScrollHost,
    C: AnchorClick,
{
    let href = click.anchor_href().ok_or(AnchorError::NoAnchor)?;
    let id = fragment_id(&href)?;
    let target = host
        .find(id)
        .ok_or_else(|| AnchorError::MissingTarget(id.to_string()))?;
    click.prevent_default();
    host.scroll_to(&target);
    Ok(())
}

pub struct SmoothScroll<H: ScrollHost> {
    host: H,
    listener: Option<H::Listener>,
}

impl<H: ScrollHost> SmoothScroll<H> {
    pub fn install(host: H) -> Result<Self, AnchorError> {
        let listener = host.listen()?;
        Ok(Self {
            host,
            listener: Some(listener),
        })
    }
}

impl<H: ScrollHost> Drop for SmoothScroll<H> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.unlisten(listener);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    #[derive(Default)]
    struct DocState {
        ids: Vec<&'static str>,
        listeners: usize,
        scrolled: Vec<String>,
    }

    #[derive(Clone, Default)]
    struct FakeDoc(Rc<RefCell<DocState>>);

    impl FakeDoc {
        fn with_ids(ids: &[&'static str]) -> Self {
            let doc = Self::default();
            doc.0.borrow_mut().ids = ids.to_vec();
            doc
        }

        fn listeners(&self) -> usize {
            self.0.borrow().listeners
        }

        fn scrolled(&self) -> Vec<String> {
            self.0.borrow().scrolled.clone()
        }

        // every registered listener sees the click, like the browser would
        fn click(&self, click: &FakeClick) {
            for _ in 0..self.listeners() {
                let _ = intercept(self, click);
            }
        }
    }

    impl ScrollHost for FakeDoc {
        type Target = String;
        type Listener = ();

        fn find(&self, id: &str) -> Option<String> {
            self.0
                .borrow()
                .ids
                .iter()
                .find(|i| **i == id)
                .map(|i| i.to_string())
        }

        fn scroll_to(&self, target: &String) {
            self.0.borrow_mut().scrolled.push(target.clone());
        }

        fn listen(&self) -> Result<(), AnchorError> {
            self.0.borrow_mut().listeners += 1;
            Ok(())
        }

        fn unlisten(&self, _: ()) {
            self.0.borrow_mut().listeners -= 1;
        }
    }

    struct FakeClick {
        href: Option<&'static str>,
        prevented: Cell<bool>,
    }

    impl FakeClick {
        fn on(href: &'static str) -> Self {
            Self {
                href: Some(href),
                prevented: Cell::new(false),
            }
        }

        fn off_anchor() -> Self {
            Self {
                href: None,
                prevented: Cell::new(false),
            }
        }
    }

    impl AnchorClick for FakeClick {
        fn anchor_href(&self) -> Option<String> {
            self.href.map(str::to_string)
        }

        fn prevent_default(&self) {
            self.prevented.set(true);
        }
    }

    struct FailingDoc;

    impl ScrollHost for FailingDoc {
        type Target = ();
        type Listener = ();

        fn find(&self, _: &str) -> Option<()> {
            None
        }

        fn scroll_to(&self, _: &()) {}

        fn listen(&self) -> Result<(), AnchorError> {
            Err(AnchorError::Listener("no document".to_string()))
        }

        fn unlisten(&self, _: ()) {
            panic!("nothing was registered");
        }
    }

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#skills"), Ok("skills"));
        assert_eq!(fragment_id("#"), Err(AnchorError::Placeholder));
        assert_eq!(
            fragment_id("https://github.com"),
            Err(AnchorError::External("https://github.com".to_string()))
        );
        assert!(fragment_id("").is_err());
    }

    #[test]
    fn test_opens_new_context() {
        assert!(opens_new_context("https://www.linkedin.com/in/x"));
        assert!(!opens_new_context("mailto:someone@example.com"));
        assert!(!opens_new_context("#projects"));
        assert!(!opens_new_context("#"));
    }

    #[test]
    fn test_existing_target_scrolls_and_prevents_default() {
        let doc = FakeDoc::with_ids(&["home", "projects"]);
        let click = FakeClick::on("#projects");
        assert_eq!(intercept(&doc, &click), Ok(()));
        assert!(click.prevented.get());
        assert_eq!(doc.scrolled(), vec!["projects".to_string()]);
    }

    #[test]
    fn test_placeholder_and_missing_are_ignored() {
        let doc = FakeDoc::with_ids(&["home"]);
        for (href, err) in [
            ("#", AnchorError::Placeholder),
            ("#nowhere", AnchorError::MissingTarget("nowhere".to_string())),
            ("mailto:a@b.c", AnchorError::External("mailto:a@b.c".to_string())),
        ] {
            let click = FakeClick::on(href);
            assert_eq!(intercept(&doc, &click), Err(err));
            assert!(!click.prevented.get(), "{href} should keep default");
        }
        let click = FakeClick::off_anchor();
        assert_eq!(intercept(&doc, &click), Err(AnchorError::NoAnchor));
        assert!(doc.scrolled().is_empty());
    }

    #[test]
    fn test_teardown_leaves_no_listeners() {
        let doc = FakeDoc::with_ids(&["skills"]);
        {
            let _guard = SmoothScroll::install(doc.clone()).expect("install");
            assert_eq!(doc.listeners(), 1);
            doc.click(&FakeClick::on("#skills"));
            assert_eq!(doc.scrolled().len(), 1);
        }
        assert_eq!(doc.listeners(), 0);
        let click = FakeClick::on("#skills");
        doc.click(&click);
        assert_eq!(doc.scrolled().len(), 1);
        assert!(!click.prevented.get());
    }

    #[test]
    fn test_remount_does_not_duplicate() {
        let doc = FakeDoc::with_ids(&["experience"]);
        for _ in 0..3 {
            let guard = SmoothScroll::install(doc.clone()).expect("install");
            assert_eq!(doc.listeners(), 1);
            drop(guard);
        }
        let _guard = SmoothScroll::install(doc.clone()).expect("install");
        doc.click(&FakeClick::on("#experience"));
        assert_eq!(doc.scrolled(), vec!["experience".to_string()]);
    }

    #[test]
    fn test_failed_install() {
        let res = SmoothScroll::install(FailingDoc);
        assert!(matches!(res, Err(AnchorError::Listener(_))));
    }
}
