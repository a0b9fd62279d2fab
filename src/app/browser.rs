use leptos::prelude::document;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::scroll::{intercept, AnchorClick, AnchorError, ScrollHost};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

#[derive(Clone)]
pub struct BrowserDocument(Document);

impl BrowserDocument {
    pub fn current() -> Self {
        Self(document())
    }
}

struct BrowserClick(Event);

impl AnchorClick for BrowserClick {
    fn anchor_href(&self) -> Option<String> {
        let target = self.0.target()?.dyn_into::<Element>().ok()?;
        let anchor = target.closest(ANCHOR_SELECTOR).ok()??;
        anchor.get_attribute("href")
    }

    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

impl ScrollHost for BrowserDocument {
    type Target = Element;
    type Listener = Closure<dyn Fn(Event)>;

    fn find(&self, id: &str) -> Option<Element> {
        self.0.get_element_by_id(id)
    }

    fn scroll_to(&self, target: &Element) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    }

    fn listen(&self) -> Result<Self::Listener, AnchorError> {
        let host = self.clone();
        let handler = Closure::<dyn Fn(Event)>::new(move |ev: Event| {
            match intercept(&host, &BrowserClick(ev)) {
                Ok(()) => {}
                // most clicks aren't on in-page links
                Err(AnchorError::NoAnchor) => {}
                Err(err) => log::debug!("anchor click ignored: {err}"),
            }
        });
        self.0
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(|e| AnchorError::Listener(format!("{e:?}")))?;
        Ok(handler)
    }

    fn unlisten(&self, listener: Self::Listener) {
        if let Err(e) = self
            .0
            .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        {
            log::warn!("couldn't remove click listener: {e:?}");
        }
    }
}
