//! # Composition locals
//!
//! Repose passes values down a composition without threading them through
//! every function by using thread‑local “composition locals”.
//!
//! A `CompositionLocal<T>` is a typed key with a default. `provide` makes a
//! value visible to everything composed inside its closure; `current` reads
//! the innermost provided value, or the default when nothing was provided:
//!
//! ```rust
//! use repose_core::*;
//!
//! let accent = CompositionLocal::new("#34AF82");
//!
//! assert_eq!(*accent.current(), "#34AF82");
//!
//! accent.provide("#0061A4", || {
//!     // all code composed here sees the override
//!     assert_eq!(*accent.current(), "#0061A4");
//! });
//! ```
//!
//! Two locals never collide even when they carry the same `T`: each one is
//! identified by a process‑unique `LocalId`, not by its type.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<LocalId, Rc<dyn Any>>>> = RefCell::new(Vec::new());
}

static NEXT_LOCAL_ID: AtomicU64 = AtomicU64::new(1);

/// Process‑unique identity of a `CompositionLocal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalId(u64);

impl LocalId {
    fn next() -> Self {
        Self(NEXT_LOCAL_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "local#{}", self.0)
    }
}

/// A typed slot that can be provided for a subtree and read by descendants.
///
/// Cloning yields another handle to the same local.
pub struct CompositionLocal<T: 'static> {
    id: LocalId,
    default: Rc<T>,
}

impl<T: 'static> Clone for CompositionLocal<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            default: self.default.clone(),
        }
    }
}

impl<T: 'static> fmt::Debug for CompositionLocal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositionLocal")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> CompositionLocal<T> {
    /// Creates a fresh local. `default` is what `current` returns outside
    /// any `provide`.
    pub fn new(default: T) -> Self {
        Self {
            id: LocalId::next(),
            default: Rc::new(default),
        }
    }

    pub fn id(&self) -> LocalId {
        self.id
    }

    /// Provides `value` for everything composed inside `f`.
    pub fn provide<R>(&self, value: T, f: impl FnOnce() -> R) -> R {
        self.provide_rc(Rc::new(value), f)
    }

    /// Like `provide`, but shares an existing allocation so readers get the
    /// same `Rc` back.
    pub fn provide_rc<R>(&self, value: Rc<T>, f: impl FnOnce() -> R) -> R {
        with_locals_frame(|| {
            set_local(self.id, value);
            f()
        })
    }

    /// Innermost provided value, or the default.
    pub fn current(&self) -> Rc<T> {
        self.lookup().unwrap_or_else(|| self.default.clone())
    }

    /// Innermost provided value, `None` when nothing in scope provided one.
    pub fn lookup(&self) -> Option<Rc<T>> {
        LOCALS_STACK.with(|st| {
            for frame in st.borrow().iter().rev() {
                if let Some(v) = frame.get(&self.id)
                    && let Ok(t) = v.clone().downcast::<T>()
                {
                    return Some(t);
                }
            }
            None
        })
    }
}

/// Number of frames currently pushed on this thread.
pub fn locals_depth() -> usize {
    LOCALS_STACK.with(|st| st.borrow().len())
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local(id: LocalId, v: Rc<dyn Any>) {
    LOCALS_STACK.with(|st| {
        let mut st = st.borrow_mut();
        if let Some(top) = st.last_mut() {
            top.insert(id, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(id, v);
            st.push(m);
        }
    });
}
