//! Host Seams
//!
//! What the workflow needs from the environment it runs in: somewhere to
//! keep [`ViewState`], a way to alert and navigate, and the triggering
//! event's default action.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::state::ViewState;

/// Holder of the page state
pub trait ViewStore {
    /// Current state
    fn read(&self) -> ViewState;

    /// Replace the state, triggering a render where the host has one
    fn write(&self, state: ViewState);

    /// Read, modify, write back
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let mut state = self.read();
        let out = f(&mut state);
        self.write(state);
        out
    }
}

impl ViewStore for RefCell<ViewState> {
    fn read(&self) -> ViewState {
        self.borrow().clone()
    }

    fn write(&self, state: ViewState) {
        *self.borrow_mut() = state;
    }
}

impl<S: ViewStore> ViewStore for Rc<S> {
    fn read(&self) -> ViewState {
        (**self).read()
    }

    fn write(&self, state: ViewState) {
        (**self).write(state);
    }
}

/// Browsing-context side effects
pub trait Browser {
    /// Blocking user-facing alert
    fn alert(&self, message: &str);

    /// Send the current browsing context to `url` (not a new tab)
    fn navigate(&self, url: &str) -> Result<()>;
}

/// A user event whose default action can be suppressed
pub trait DefaultAction {
    fn prevent_default(&self);
}
