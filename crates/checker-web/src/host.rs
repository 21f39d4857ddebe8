//! Browser Adapters
//!
//! Bindings of the workflow's host seams to the DOM and to Leptos signals.

use checker_core::{Browser, ClientError, DefaultAction, Result, ViewState, ViewStore};
use leptos::prelude::*;

/// Page state kept in a signal; every write re-renders
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<ViewState>);

impl ViewStore for SignalStore {
    fn read(&self) -> ViewState {
        self.0.get_untracked()
    }

    fn write(&self, state: ViewState) {
        self.0.set(state);
    }
}

/// The current browsing context
pub struct WebBrowser;

impl Browser for WebBrowser {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn navigate(&self, url: &str) -> Result<()> {
        let window =
            web_sys::window().ok_or_else(|| ClientError::Navigation("no window".into()))?;
        window
            .location()
            .set_href(url)
            .map_err(|e| ClientError::Navigation(format!("{e:?}")))
    }
}

/// A form submission about to be handled
pub struct FormSubmit<'a>(pub &'a web_sys::SubmitEvent);

impl DefaultAction for FormSubmit<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}
