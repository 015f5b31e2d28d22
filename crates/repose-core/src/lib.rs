//! # Locals, Remembered State, and Scopes
//!
//! Repose composes UI by calling plain functions on every pass. Anything that
//! must outlive a single pass, or flow down the call tree without being passed
//! by hand, goes through this crate:
//!
//! - `CompositionLocal<T>`: a value provided for a subtree and read by
//!   descendants.
//! - `remember*` / `use_state`: lifecycle‑aware storage bound to composition.
//! - `Scope` / `on_unmount`: cleanup when a tree is torn down.
//!
//! ## Locals
//!
//! ```rust
//! use repose_core::*;
//!
//! let user = CompositionLocal::new(String::from("guest"));
//!
//! user.provide("ada".to_string(), || {
//!     assert_eq!(*user.current(), "ada");
//! });
//! assert_eq!(*user.current(), "guest");
//! ```
//!
//! Providing is scoped to the closure: once it returns (or unwinds), readers
//! see the outer value again.
//!
//! ## Remembered state
//!
//! UI state is typically held in `remember_*` slots rather than globals:
//!
//! - `remember` and `remember_state` are order‑based: the Nth call in a
//!   composition always refers to the Nth stored value.
//! - `remember_with_key` and `remember_state_with_key` are key‑based and more
//!   stable across conditional branches.
//! - `use_state` wraps a remembered cell and requests a recomposition on
//!   every write.
//!
//! ## Rendering hooks headlessly
//!
//! `render_hook` runs a hook in its own composition, which is how the
//! workspace tests stateful hooks:
//!
//! ```rust
//! use repose_core::*;
//!
//! let mut rendered = render_hook(|| use_state(|| 1));
//! rendered.act(|s| s.set(2));
//! assert_eq!(rendered.result().get(), 2);
//! ```

pub mod harness;
pub mod locals;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod state;
mod tests;

pub use harness::*;
pub use locals::*;
pub use runtime::*;
pub use scope::*;
pub use state::*;
