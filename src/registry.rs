//! The service registry.
//!
//! [`ServiceRegistry`] owns the entries and implements both registration
//! modes. Factory registration reads the dependency list off the creation
//! function's type, resolves each dependency from what is already registered,
//! and appends the factory's output under the service's own key.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use crate::config::RegistryConfig;
use crate::descriptors::{Binding, ServiceDescriptor};
use crate::error::{DiError, DiResult};
use crate::factory::{reinterpret, Create, Factory};
use crate::key::{key_of, Key};
use crate::observer::{LoggingObserver, Observers, RegistryObserver};
use crate::registration::{Instance, Registration, Registry};
use crate::service::{Provides, Service};

/// Singleton service container with constructor injection.
///
/// Registration order matters: a factory's dependencies must be registered
/// before the factory itself. Entries are never replaced or removed.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use ferrous_registry::{capability, Create, Service, ServiceRegistry};
///
/// trait Greeting: Service {
///     fn text(&self) -> String;
/// }
/// capability!(Greeting);
///
/// #[derive(Default)]
/// struct Hello;
/// impl Service for Hello {}
/// impl Greeting for Hello {
///     fn text(&self) -> String { "hello".into() }
/// }
///
/// struct Greeter {
///     greeting: Arc<dyn Greeting>,
/// }
/// impl Service for Greeter {}
/// impl Create for Greeter {
///     type Signature = fn(Arc<dyn Greeting>) -> Arc<Self>;
///     const CREATE: Self::Signature = |greeting| Arc::new(Greeter { greeting });
/// }
///
/// let mut registry = ServiceRegistry::new();
/// registry
///     .register_direct::<dyn Greeting, Hello>()
///     .register_factory::<Greeter>();
///
/// let greeter = registry.get::<Greeter>().unwrap();
/// assert_eq!(greeter.greeting.text(), "hello");
/// ```
pub struct ServiceRegistry {
    registry: Registry,
    observers: Observers,
}

impl ServiceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            observers: Observers::new(),
        }
    }

    /// Creates an empty registry with diagnostics set up from `config`.
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut registry = Self::new();
        if config.logging {
            registry.add_observer(Arc::new(LoggingObserver::with_prefix(config.log_prefix)));
        }
        registry
    }

    /// Adds an observer notified of every registration event from now on.
    pub fn add_observer(&mut self, observer: Arc<dyn RegistryObserver>) -> &mut Self {
        self.observers.add(observer);
        self
    }

    // ----- Registration -----

    /// Registers a default-constructed `T` under the capability `C`.
    ///
    /// No dependencies are resolved.
    pub fn register_direct<C, T>(&mut self) -> &mut Self
    where
        C: ?Sized + Service + Provides<T>,
        T: Service + Default,
    {
        let instance: Arc<C> = C::provide(Arc::new(T::default()));
        self.append(
            Arc::new(instance),
            ServiceDescriptor {
                key: key_of::<C>(),
                implementation: type_name::<T>(),
                binding: Binding::Direct,
                dependencies: Vec::new(),
            },
        );
        self
    }

    /// Registers the output of `T`'s creation function under `T`.
    ///
    /// Each parameter of [`Create::Signature`] is resolved from the registry,
    /// in declaration order, and passed positionally to [`Create::CREATE`].
    ///
    /// Unregistered dependencies never fail this call:
    /// - an `Option<Arc<C>>` parameter receives `None`;
    /// - an `Arc<C>` parameter cannot, so the creation function is not called,
    ///   nothing is registered for `T`, and a warning is logged. `get::<T>()`
    ///   then returns `None`.
    ///
    /// Use [`try_register_factory`](Self::try_register_factory) to turn the
    /// second case into an error.
    pub fn register_factory<T: Create>(&mut self) -> &mut Self {
        self.register_with::<T, T::Signature>(T::CREATE)
    }

    /// Like [`register_factory`](Self::register_factory) with an explicit
    /// creation function instead of the designated one.
    pub fn register_with<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: Service,
        F: Factory<T>,
    {
        if let Err(missing) = self.construct::<T, F>(factory) {
            tracing::warn!(
                service = type_name::<T>(),
                missing = missing.display_name(),
                "required dependency not registered, factory not invoked"
            );
            self.observers.factory_skipped(&key_of::<T>(), &missing);
        }
        self
    }

    /// Registers `T` through its creation function, failing when a required
    /// `Arc<C>` dependency is unregistered.
    ///
    /// Nothing is registered on error.
    pub fn try_register_factory<T: Create>(&mut self) -> DiResult<&mut Self> {
        self.try_register_with::<T, T::Signature>(T::CREATE)
    }

    /// Like [`try_register_factory`](Self::try_register_factory) with an
    /// explicit creation function.
    pub fn try_register_with<T, F>(&mut self, factory: F) -> DiResult<&mut Self>
    where
        T: Service,
        F: Factory<T>,
    {
        match self.construct::<T, F>(factory) {
            Ok(()) => Ok(self),
            Err(missing) => {
                self.observers.factory_skipped(&key_of::<T>(), &missing);
                Err(DiError::MissingDependency {
                    service: type_name::<T>(),
                    dependency: missing.display_name(),
                })
            }
        }
    }

    fn construct<T, F>(&mut self, factory: F) -> Result<(), Key>
    where
        T: Service,
        F: Factory<T>,
    {
        let owner = key_of::<T>();
        let service = {
            let mut resolve = |key: &Key| -> Option<Instance> {
                let found = self.resolve(key);
                if self.observers.has_observers() {
                    self.observers.dependency_resolved(&owner, key, found.is_some());
                }
                found
            };
            factory.invoke(&mut resolve)?
        };

        self.append(
            Arc::new(service),
            ServiceDescriptor {
                key: owner,
                implementation: type_name::<T>(),
                binding: Binding::Factory,
                dependencies: F::dependencies(),
            },
        );
        Ok(())
    }

    fn append(&mut self, instance: Instance, descriptor: ServiceDescriptor) {
        self.observers.registered(&descriptor);
        self.registry.push(Registration::new(instance, descriptor));
    }

    // ----- Lookup -----

    /// Resolver used while a factory's arguments are assembled.
    #[inline]
    fn resolve(&self, key: &Key) -> Option<Instance> {
        self.registry.get(key).map(|reg| reg.instance.clone())
    }

    /// Returns the instance registered under `C`, or `None`.
    ///
    /// The handle shares the stored allocation; repeated calls return the
    /// same instance.
    pub fn get<C: ?Sized + Service>(&self) -> Option<Arc<C>> {
        self.registry
            .get(&key_of::<C>())
            .and_then(|reg| reinterpret::<C>(&reg.instance))
    }

    /// Like [`get`](Self::get), with an error naming the missing service.
    pub fn require<C: ?Sized + Service>(&self) -> DiResult<Arc<C>> {
        self.get::<C>().ok_or(DiError::NotFound(type_name::<C>()))
    }

    /// Whether anything is registered under `C`.
    pub fn contains<C: ?Sized + Service>(&self) -> bool {
        self.registry.contains_key(&key_of::<C>())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Descriptors of every entry, in registration order.
    pub fn descriptors(&self) -> Vec<ServiceDescriptor> {
        self.registry.iter().map(|reg| reg.descriptor.clone()).collect()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field(
                "services",
                &self.registry.iter().map(|reg| reg.key().display_name()).collect::<Vec<_>>(),
            )
            .field("observers", &self.observers.has_observers())
            .finish()
    }
}
