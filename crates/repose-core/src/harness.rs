//! Renders a single hook outside a window, for tests and headless tools.
//!
//! `render_hook` owns its own slot table and scope, so remembered state
//! survives `rerender` and `act` the same way it survives frames in a running
//! app.

use crate::{Composer, Scope, take_recompose_request};

type Wrapper<T> = Box<dyn Fn(&dyn Fn() -> T) -> T>;

pub struct RenderedHook<T: 'static> {
    hook: Box<dyn Fn() -> T>,
    wrapper: Option<Wrapper<T>>,
    composer: Composer,
    scope: Scope,
    current: T,
    renders: usize,
}

/// Composes `hook` once with nothing around it.
pub fn render_hook<T: 'static>(hook: impl Fn() -> T + 'static) -> RenderedHook<T> {
    RenderedHook::mount(Box::new(hook), None)
}

/// Composes `hook` inside `wrapper`, which receives the hook as its content.
///
/// ```rust
/// use repose_core::*;
///
/// let name = CompositionLocal::new("anonymous");
/// let rendered = render_hook_with(
///     {
///         let name = name.clone();
///         move |content| name.provide("repose", content)
///     },
///     move || *name.current(),
/// );
/// assert_eq!(*rendered.result(), "repose");
/// ```
pub fn render_hook_with<T: 'static>(
    wrapper: impl Fn(&dyn Fn() -> T) -> T + 'static,
    hook: impl Fn() -> T + 'static,
) -> RenderedHook<T> {
    RenderedHook::mount(Box::new(hook), Some(Box::new(wrapper)))
}

impl<T: 'static> RenderedHook<T> {
    fn mount(hook: Box<dyn Fn() -> T>, wrapper: Option<Wrapper<T>>) -> Self {
        let mut composer = Composer::new();
        let scope = Scope::new();
        let current = Self::pass(hook.as_ref(), wrapper.as_ref(), &mut composer, &scope);
        Self {
            hook,
            wrapper,
            composer,
            scope,
            current,
            renders: 1,
        }
    }

    fn pass(
        hook: &dyn Fn() -> T,
        wrapper: Option<&Wrapper<T>>,
        composer: &mut Composer,
        scope: &Scope,
    ) -> T {
        composer.compose(scope, || match wrapper {
            Some(wrap) => wrap(hook),
            None => hook(),
        })
    }

    /// Value returned by the latest composition.
    pub fn result(&self) -> &T {
        &self.current
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Composes again, keeping remembered state.
    pub fn rerender(&mut self) {
        self.current = Self::pass(
            self.hook.as_ref(),
            self.wrapper.as_ref(),
            &mut self.composer,
            &self.scope,
        );
        self.renders += 1;
        log::trace!("render_hook: pass {}", self.renders);
    }

    /// Runs `f` against the latest result, then recomposes if `f` wrote any
    /// state.
    pub fn act<R>(&mut self, f: impl FnOnce(&T) -> R) -> R {
        take_recompose_request();
        let out = f(&self.current);
        if take_recompose_request() {
            self.rerender();
        }
        out
    }

    /// Tears the tree down, running every registered `on_unmount`.
    pub fn unmount(self) {
        let RenderedHook {
            scope,
            mut composer,
            current,
            ..
        } = self;
        drop(current);
        scope.dispose();
        composer.clear();
    }
}
