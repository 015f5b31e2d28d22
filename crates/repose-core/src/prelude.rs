pub use crate::harness::{RenderedHook, render_hook, render_hook_with};
pub use crate::locals::{CompositionLocal, LocalId};
pub use crate::runtime::{
    ComposeGuard, Composer, remember, remember_state, remember_state_with_key, remember_with_key,
};
pub use crate::scope::{Scope, current_scope, on_unmount};
pub use crate::state::{State, use_state};
