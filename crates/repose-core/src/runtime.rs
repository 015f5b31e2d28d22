use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
    static RECOMPOSE_REQUESTED: Cell<bool> = const { Cell::new(false) };
}

/// Slot table for one composition tree.
///
/// The thread-local `COMPOSER` is the one `remember*` reads from; `compose`
/// swaps an owned composer in for the length of a pass, so independent trees
/// can share a thread.
#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one composition pass of `f` against this slot table.
    pub fn compose<R>(&mut self, scope: &Scope, f: impl FnOnce() -> R) -> R {
        struct Swap<'a>(&'a mut Composer);
        impl Drop for Swap<'_> {
            fn drop(&mut self) {
                COMPOSER.with(|c| std::mem::swap(&mut *c.borrow_mut(), self.0));
            }
        }

        COMPOSER.with(|c| std::mem::swap(&mut *c.borrow_mut(), self));
        let _swap = Swap(self);

        let guard = ComposeGuard::begin(scope.clone());
        guard.scope().run(f)
    }

    /// Drops every remembered value.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.keyed_slots.clear();
        self.cursor = 0;
    }
}

pub struct ComposeGuard {
    scope: Scope,
}

impl ComposeGuard {
    pub fn begin(scope: Scope) -> Self {
        COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.cursor = 0;
        });

        ComposeGuard { scope }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// Slot-based remember (sequential composition only)
///
/// `init` runs with the slot table released, so it may itself remember.
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    let cursor = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;

        if cursor >= c.slots.len() {
            c.slots.push(Box::new(()));
            return Err(cursor);
        }

        match c.slots[cursor].downcast_ref::<Rc<T>>() {
            Some(rc) => Ok(rc.clone()),
            None => {
                log::warn!(
                    "remember: slot {} type changed; replacing. \
                     If this is due to conditional composition, prefer remember_with_key.",
                    cursor
                );
                Err(cursor)
            }
        }
    });

    match cursor {
        Ok(rc) => rc,
        Err(cursor) => {
            let rc: Rc<T> = Rc::new(init());
            COMPOSER.with(|c| c.borrow_mut().slots[cursor] = Box::new(rc.clone()));
            rc
        }
    }
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    let existing = COMPOSER.with(|c| {
        let c = c.borrow();
        let existing = c.keyed_slots.get(&key)?;
        let rc = existing.downcast_ref::<Rc<T>>();
        if rc.is_none() {
            log::warn!(
                "remember_with_key: key '{}' reused with a different type; replacing.",
                key
            );
        }
        rc.cloned()
    });
    if let Some(rc) = existing {
        return rc;
    }

    let rc: Rc<T> = Rc::new(init());
    COMPOSER.with(|c| c.borrow_mut().keyed_slots.insert(key, Box::new(rc.clone())));
    rc
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

pub fn remember_state_with_key<T: 'static>(
    key: impl Into<String>,
    init: impl FnOnce() -> T,
) -> Rc<RefCell<T>> {
    remember_with_key(key, || RefCell::new(init()))
}

/// Marks the current thread's compositions as stale.
pub fn request_recompose() {
    RECOMPOSE_REQUESTED.with(|r| r.set(true));
}

/// Returns whether a recomposition was requested since the last call, and
/// clears the request.
pub fn take_recompose_request() -> bool {
    RECOMPOSE_REQUESTED.with(|r| r.replace(false))
}
