//! The slot application code reads "the" storage from.
//!
//! There is one slot per thread. The test harness runs tests on separate
//! threads, so bindings made by one test are never seen by another. Within a
//! thread, a binding stays until it is replaced or removed: either install a
//! fresh store at the start of every test, or hold the guard returned by
//! [`scoped`] for the duration of the test.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::storage::Storage;

thread_local! {
    static GLOBAL: RefCell<Option<Rc<dyn Storage>>> = RefCell::new(None);
}

/// Binds `storage`, returning whatever was bound before.
pub fn install(storage: Rc<dyn Storage>) -> Option<Rc<dyn Storage>> {
    log::debug!("Installing global storage");
    GLOBAL.with(|slot| slot.borrow_mut().replace(storage))
}

/// Removes the current binding, if any.
pub fn uninstall() -> Option<Rc<dyn Storage>> {
    log::debug!("Uninstalling global storage");
    GLOBAL.with(|slot| slot.borrow_mut().take())
}

pub fn is_installed() -> bool {
    GLOBAL.with(|slot| slot.borrow().is_some())
}

/// Returns the bound storage.
pub fn storage() -> Result<Rc<dyn Storage>> {
    GLOBAL
        .with(|slot| slot.borrow().clone())
        .ok_or(Error::NotInstalled)
}

/// Binds `storage` until the returned guard is dropped, then puts the
/// previous binding back.
pub fn scoped(storage: Rc<dyn Storage>) -> GlobalGuard {
    GlobalGuard {
        previous: install(storage),
    }
}

#[must_use = "the binding is undone as soon as the guard is dropped"]
pub struct GlobalGuard {
    previous: Option<Rc<dyn Storage>>,
}

impl Drop for GlobalGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();

        // The slot may already be gone if the thread is shutting down
        let _ = GLOBAL.try_with(|slot| *slot.borrow_mut() = previous);
    }
}
