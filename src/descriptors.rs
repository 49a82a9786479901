//! Service descriptors for introspection and diagnostics.

use crate::key::Key;

/// How an entry was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Default-constructed implementation bound to a capability
    Direct,
    /// Output of the type's creation function, dependencies injected
    Factory,
}

/// Service descriptor for introspection and diagnostics
///
/// Describes one registry entry: the key it is stored under, the concrete
/// type behind it, and, for factory registrations, the dependency keys read
/// off the creation function's signature.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use ferrous_registry::{capability, key_of, Binding, Create, Service, ServiceRegistry};
///
/// trait Clock: Service {}
/// capability!(Clock);
///
/// #[derive(Default)]
/// struct SystemClock;
/// impl Service for SystemClock {}
/// impl Clock for SystemClock {}
///
/// struct Scheduler;
/// impl Service for Scheduler {}
/// impl Create for Scheduler {
///     type Signature = fn(Arc<dyn Clock>) -> Arc<Self>;
///     const CREATE: Self::Signature = |_| Arc::new(Scheduler);
/// }
///
/// let mut registry = ServiceRegistry::new();
/// registry
///     .register_direct::<dyn Clock, SystemClock>()
///     .register_factory::<Scheduler>();
///
/// let descriptors = registry.descriptors();
/// assert_eq!(descriptors[0].binding, Binding::Direct);
/// assert!(descriptors[0].implementation.ends_with("SystemClock"));
/// assert!(descriptors[1].is_factory());
/// assert_eq!(descriptors[1].dependencies, vec![key_of::<dyn Clock>()]);
/// ```
#[derive(Debug, Clone)]
pub struct ServiceDescriptor {
    /// Key the instance is stored under
    pub key: Key,
    /// Type name of the concrete implementation
    pub implementation: &'static str,
    /// Registration mode
    pub binding: Binding,
    /// Capability keys injected into the factory, in parameter order
    pub dependencies: Vec<Key>,
}

impl ServiceDescriptor {
    /// Get the capability or service type name
    pub fn type_name(&self) -> &'static str {
        self.key.display_name()
    }

    /// Whether this entry came from a creation function.
    pub fn is_factory(&self) -> bool {
        self.binding == Binding::Factory
    }
}
