use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use repose_core::{CompositionLocal, LocalId};

use crate::{DEFAULT_PROVIDER_NAME, NoProviderError};

/// Identity of one `create_container` call, shared by its provider, its
/// accessor and every `NoProviderError` the accessor returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContainerId(LocalId);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0.get())
    }
}

// `Unpublished` is the local's default; no `R` can ever compare equal to it.
enum Slot<R> {
    Unpublished,
    Published(Rc<R>),
}

struct Shared<R: 'static> {
    context: CompositionLocal<Slot<R>>,
    display_name: RefCell<Cow<'static, str>>,
}

impl<R: 'static> Shared<R> {
    fn id(&self) -> ContainerId {
        ContainerId(self.context.id())
    }
}

/// Runs the creation hook and publishes its result to a subtree.
///
/// Handles are cheap to clone; clones are the same provider.
pub struct Provider<V: 'static, R: 'static> {
    hook: Rc<dyn Fn(V) -> R>,
    shared: Rc<Shared<R>>,
}

/// Reads the result published by the nearest enclosing provider.
pub struct Accessor<R: 'static> {
    shared: Rc<Shared<R>>,
}

impl<V: 'static, R: 'static> Provider<V, R> {
    /// Calls the creation hook with `value` and makes the result visible to
    /// every accessor of this container composed inside `content`.
    pub fn provide<C>(&self, value: V, content: impl FnOnce() -> C) -> C {
        let result = Rc::new((self.hook)(value));
        log::trace!("{} publishing for {}", self.display_name(), self.id());
        self.shared
            .context
            .provide(Slot::Published(result), content)
    }

    pub fn id(&self) -> ContainerId {
        self.shared.id()
    }

    pub fn display_name(&self) -> String {
        self.shared.display_name.borrow().to_string()
    }

    /// Names the provider in `NoProviderError` messages built from now on.
    pub fn set_display_name(&self, name: impl Into<Cow<'static, str>>) {
        *self.shared.display_name.borrow_mut() = name.into();
    }
}

impl<R: 'static> Provider<(), R> {
    /// Provider for a hook that takes no input.
    pub fn wrap<C>(&self, content: impl FnOnce() -> C) -> C {
        self.provide((), content)
    }
}

impl<T: 'static, R: 'static> Provider<Option<T>, R> {
    /// Provider for a hook with an optional input, called without one.
    pub fn wrap<C>(&self, content: impl FnOnce() -> C) -> C {
        self.provide(None, content)
    }
}

impl<V: 'static, R: 'static> Clone for Provider<V, R> {
    fn clone(&self) -> Self {
        Self {
            hook: self.hook.clone(),
            shared: self.shared.clone(),
        }
    }
}

impl<V: 'static, R: 'static> PartialEq for Provider<V, R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<V: 'static, R: 'static> Eq for Provider<V, R> {}

impl<V: 'static, R: 'static> fmt::Debug for Provider<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("id", &self.id())
            .field("display_name", &self.display_name())
            .finish_non_exhaustive()
    }
}

impl<R: 'static> Accessor<R> {
    /// Result published by the nearest enclosing provider, as the same `Rc`
    /// the provider published.
    pub fn get(&self) -> Result<Rc<R>, NoProviderError> {
        match &*self.shared.context.current() {
            Slot::Published(result) => Ok(result.clone()),
            Slot::Unpublished => {
                let err =
                    NoProviderError::new(self.id(), &self.shared.display_name.borrow());
                log::debug!("{} read outside its provider: {err}", self.id());
                Err(err)
            }
        }
    }

    pub fn id(&self) -> ContainerId {
        self.shared.id()
    }
}

impl<R: 'static> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<R: 'static> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("id", &self.id())
            .finish_non_exhaustive()
    }
}

/// Provider and accessor of one container, kept together.
///
/// Handy as a `thread_local!` so a plain `use_*` function can reach it:
///
/// ```rust
/// use std::rc::Rc;
/// use repose_container::*;
///
/// thread_local! {
///     static GREETING: Container<String, String> =
///         Container::named("GreetingProvider", |name: String| format!("hello, {name}"));
/// }
///
/// fn use_greeting() -> Result<Rc<String>, NoProviderError> {
///     GREETING.with(|c| c.use_container())
/// }
///
/// assert!(use_greeting().is_err());
/// GREETING.with(|c| {
///     c.provider().provide("ada".to_string(), || {
///         assert_eq!(*use_greeting().unwrap(), "hello, ada");
///     })
/// });
/// ```
pub struct Container<V: 'static, R: 'static> {
    provider: Provider<V, R>,
    accessor: Accessor<R>,
}

impl<V: 'static, R: 'static> Container<V, R> {
    pub fn new(hook: impl Fn(V) -> R + 'static) -> Self {
        let shared = Rc::new(Shared {
            context: CompositionLocal::new(Slot::Unpublished),
            display_name: RefCell::new(Cow::Borrowed(DEFAULT_PROVIDER_NAME)),
        });
        log::debug!("created {}", shared.id());
        Self {
            provider: Provider {
                hook: Rc::new(hook),
                shared: shared.clone(),
            },
            accessor: Accessor { shared },
        }
    }

    /// Like `new`, with the provider's display name already set.
    pub fn named(name: impl Into<Cow<'static, str>>, hook: impl Fn(V) -> R + 'static) -> Self {
        let container = Self::new(hook);
        container.provider.set_display_name(name);
        container
    }

    pub fn provider(&self) -> &Provider<V, R> {
        &self.provider
    }

    pub fn accessor(&self) -> &Accessor<R> {
        &self.accessor
    }

    pub fn use_container(&self) -> Result<Rc<R>, NoProviderError> {
        self.accessor.get()
    }

    pub fn id(&self) -> ContainerId {
        self.provider.id()
    }

    pub fn into_parts(self) -> (Provider<V, R>, Accessor<R>) {
        (self.provider, self.accessor)
    }
}

/// Builds a container around `hook` and returns its provider and accessor.
///
/// The hook's input type picks the provider's shape: `()` for no input,
/// `Option<T>` for an optional one (both get `wrap`), anything else for a
/// required one.
pub fn create_container<V: 'static, R: 'static>(
    hook: impl Fn(V) -> R + 'static,
) -> (Provider<V, R>, Accessor<R>) {
    Container::new(hook).into_parts()
}

/// `create_container` with the provider's display name set up front.
pub fn create_container_named<V: 'static, R: 'static>(
    name: impl Into<Cow<'static, str>>,
    hook: impl Fn(V) -> R + 'static,
) -> (Provider<V, R>, Accessor<R>) {
    Container::named(name, hook).into_parts()
}
