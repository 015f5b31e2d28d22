use thiserror::Error;

use crate::{Accessor, ContainerId, Provider};

/// Display name every provider starts with. A provider still carrying it is
/// treated as unnamed.
pub const DEFAULT_PROVIDER_NAME: &str = "Provider";

/// Returned by an accessor when no provider of its container is in scope.
///
/// The message is fixed when the error is built, from the provider's display
/// name at that moment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Component using this hook must be wrapped in {expected}.")]
pub struct NoProviderError {
    container: ContainerId,
    provider_name: Option<String>,
    expected: String,
}

impl NoProviderError {
    pub(crate) fn new(container: ContainerId, display_name: &str) -> Self {
        let provider_name = (!display_name.is_empty() && display_name != DEFAULT_PROVIDER_NAME)
            .then(|| display_name.to_owned());
        let expected = match &provider_name {
            Some(name) => format!("<{name}/>"),
            None => "matching provider".to_owned(),
        };
        Self {
            container,
            provider_name,
            expected,
        }
    }

    /// Container whose provider was missing.
    pub fn container(&self) -> ContainerId {
        self.container
    }

    /// Custom display name of the missing provider, if one had been set.
    pub fn provider_name(&self) -> Option<&str> {
        self.provider_name.as_deref()
    }

    pub fn is_from<V: 'static, R: 'static>(&self, provider: &Provider<V, R>) -> bool {
        self.container == provider.id()
    }

    pub fn is_from_accessor<R: 'static>(&self, accessor: &Accessor<R>) -> bool {
        self.container == accessor.id()
    }
}
