//! Single-threaded cancellation signal shared by a request and its animations.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type CancelHook = Box<dyn FnOnce()>;

#[derive(Default)]
struct CancelInner {
    cancelled: Cell<bool>,
    hooks: RefCell<Vec<CancelHook>>,
}

/// Cloneable handle; every clone observes the same cancellation.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Rc<CancelInner>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Mark the token cancelled and run registered hooks once.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let hooks = std::mem::take(&mut *self.inner.hooks.borrow_mut());
        for hook in hooks {
            hook();
        }
    }

    /// Run `hook` on cancellation, or immediately if already cancelled.
    pub fn on_cancel(&self, hook: impl FnOnce() + 'static) {
        if self.is_cancelled() {
            hook();
            return;
        }
        self.inner.hooks.borrow_mut().push(Box::new(hook));
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .field("hooks", &self.inner.hooks.borrow().len())
            .finish()
    }
}
