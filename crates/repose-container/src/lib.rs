//! # Containers
//!
//! A container shares the result of one stateful hook with a whole subtree.
//! `create_container` takes the hook and returns two handles:
//!
//! - a `Provider`, which runs the hook and publishes its result for
//!   everything composed inside it;
//! - an `Accessor`, which descendants call to read that result.
//!
//! Reading with no provider in scope is not a panic: `Accessor::get` returns
//! a `NoProviderError` that callers can match on or propagate with `?`.
//!
//! ```rust
//! use std::rc::Rc;
//! use repose_core::*;
//! use repose_container::*;
//!
//! struct Counter {
//!     count: i32,
//!     increment: Rc<dyn Fn()>,
//! }
//!
//! fn use_counter_container(initial: Option<i32>) -> Counter {
//!     let count = use_state(|| initial.unwrap_or(0));
//!     Counter {
//!         count: count.get(),
//!         increment: Rc::new(move || count.update(|c| *c += 1)),
//!     }
//! }
//!
//! let (counter_provider, use_counter) = create_container(use_counter_container);
//! counter_provider.set_display_name("CounterProvider");
//!
//! let mut rendered = render_hook_with(
//!     move |content| counter_provider.provide(Some(7), content),
//!     {
//!         let use_counter = use_counter.clone();
//!         move || use_counter.get()
//!     },
//! );
//! let count = |r: &RenderedHook<Result<Rc<Counter>, NoProviderError>>| {
//!     r.result().as_ref().map(|c| c.count).ok()
//! };
//! assert_eq!(count(&rendered), Some(7));
//!
//! rendered.act(|counter| {
//!     if let Ok(counter) = counter {
//!         (counter.increment)();
//!     }
//! });
//! assert_eq!(count(&rendered), Some(8));
//!
//! let err = use_counter.get().err().unwrap();
//! assert_eq!(
//!     err.to_string(),
//!     "Component using this hook must be wrapped in <CounterProvider/>."
//! );
//! ```
//!
//! Each `create_container` call is its own container: providers only satisfy
//! accessors from the same call, and a nested provider shadows an outer one
//! for the subtree it wraps.

mod container;
mod error;

pub use container::*;
pub use error::*;
