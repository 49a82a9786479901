//! Diagnostic observers for registration and resolution events.
//!
//! Observers are notified synchronously from inside the registration calls.
//! [`LoggingObserver`] forwards everything to `tracing`; custom observers can
//! collect events for tests or metrics.

use std::sync::Arc;

use crate::descriptors::ServiceDescriptor;
use crate::key::Key;

/// Observer trait for registry events.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use ferrous_registry::{Key, RegistryObserver, Service, ServiceDescriptor, ServiceRegistry};
///
/// #[derive(Default)]
/// struct Recorder {
///     names: Mutex<Vec<&'static str>>,
/// }
///
/// impl RegistryObserver for Recorder {
///     fn registered(&self, descriptor: &ServiceDescriptor) {
///         self.names.lock().unwrap().push(descriptor.implementation);
///     }
/// }
///
/// #[derive(Default)]
/// struct Config;
/// impl Service for Config {}
/// impl ferrous_registry::Provides<Config> for Config {
///     fn provide(instance: Arc<Config>) -> Arc<Config> { instance }
/// }
///
/// let recorder = Arc::new(Recorder::default());
/// let mut registry = ServiceRegistry::new();
/// registry.add_observer(recorder.clone());
/// registry.register_direct::<Config, Config>();
///
/// assert_eq!(recorder.names.lock().unwrap().len(), 1);
/// ```
pub trait RegistryObserver: Send + Sync {
    /// Called after an entry has been appended.
    fn registered(&self, descriptor: &ServiceDescriptor);

    /// Called once per factory parameter as it is looked up.
    ///
    /// `found` is false when nothing is registered under `dependency`.
    fn dependency_resolved(&self, owner: &Key, dependency: &Key, found: bool) {
        let _ = (owner, dependency, found);
    }

    /// Called when a factory could not be invoked because a required
    /// dependency was missing. Nothing was registered for `owner`.
    fn factory_skipped(&self, owner: &Key, missing: &Key) {
        let _ = (owner, missing);
    }
}

/// Container for registered observers.
#[derive(Default)]
pub(crate) struct Observers {
    observers: Vec<Arc<dyn RegistryObserver>>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self { observers: Vec::new() }
    }

    pub(crate) fn add(&mut self, observer: Arc<dyn RegistryObserver>) {
        self.observers.push(observer);
    }

    #[inline]
    pub(crate) fn has_observers(&self) -> bool {
        !self.observers.is_empty()
    }

    #[inline]
    pub(crate) fn registered(&self, descriptor: &ServiceDescriptor) {
        for observer in &self.observers {
            observer.registered(descriptor);
        }
    }

    #[inline]
    pub(crate) fn dependency_resolved(&self, owner: &Key, dependency: &Key, found: bool) {
        for observer in &self.observers {
            observer.dependency_resolved(owner, dependency, found);
        }
    }

    #[inline]
    pub(crate) fn factory_skipped(&self, owner: &Key, missing: &Key) {
        for observer in &self.observers {
            observer.factory_skipped(owner, missing);
        }
    }
}

/// Built-in observer that logs events through `tracing`.
///
/// Registrations and lookups are logged at `debug`, skipped factories at
/// `warn`. The prefix is attached to every event as a field.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use ferrous_registry::{LoggingObserver, ServiceRegistry};
///
/// let mut registry = ServiceRegistry::new();
/// registry.add_observer(Arc::new(LoggingObserver::with_prefix("[app]")));
/// ```
pub struct LoggingObserver {
    prefix: String,
}

impl LoggingObserver {
    /// Creates a new logging observer with default prefix.
    pub fn new() -> Self {
        Self {
            prefix: crate::config::DEFAULT_LOG_PREFIX.to_string(),
        }
    }

    /// Creates a new logging observer with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryObserver for LoggingObserver {
    fn registered(&self, descriptor: &ServiceDescriptor) {
        tracing::debug!(
            prefix = %self.prefix,
            service = descriptor.type_name(),
            implementation = descriptor.implementation,
            binding = ?descriptor.binding,
            dependencies = descriptor.dependencies.len(),
            "registered service"
        );
    }

    fn dependency_resolved(&self, owner: &Key, dependency: &Key, found: bool) {
        tracing::debug!(
            prefix = %self.prefix,
            service = owner.display_name(),
            dependency = dependency.display_name(),
            found,
            "resolved dependency"
        );
    }

    fn factory_skipped(&self, owner: &Key, missing: &Key) {
        tracing::warn!(
            prefix = %self.prefix,
            service = owner.display_name(),
            missing = missing.display_name(),
            "factory not invoked"
        );
    }
}
