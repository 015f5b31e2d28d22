use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{remember_state, request_recompose};

/// Remembered, mutable state that asks for recomposition when written.
///
/// Handles are cheap to clone and all point at the same cell, so a setter
/// can be moved into a callback.
pub struct State<T: 'static> {
    cell: Rc<RefCell<T>>,
}

impl<T: 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&*self.cell.borrow()).finish()
    }
}

impl<T: 'static> State<T> {
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.cell.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.borrow())
    }

    pub fn set(&self, v: T) {
        *self.cell.borrow_mut() = v;
        request_recompose();
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.cell.borrow_mut());
        request_recompose();
    }

    /// True when both handles share one cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

/// Slot-based state hook. `init` runs on the first composition only.
///
/// ```rust
/// use repose_core::*;
///
/// let mut rendered = render_hook(|| {
///     let clicks = use_state(|| 0);
///     (clicks.get(), clicks)
/// });
/// assert_eq!(rendered.result().0, 0);
///
/// rendered.act(|(_, clicks)| clicks.update(|c| *c += 1));
/// assert_eq!(rendered.result().0, 1);
/// ```
pub fn use_state<T: 'static>(init: impl FnOnce() -> T) -> State<T> {
    State {
        cell: remember_state(init),
    }
}
