//! Factory signature introspection and positional invocation.
//!
//! A service's creation function is named by its function-pointer type. The
//! [`Factory`] impls below read that type at compile time: the parameter list
//! gives the ordered dependency keys, and each parameter's [`Dependency`] impl
//! strips the ownership wrapper to find the capability it asks for.
//!
//! A parameter whose capability is not a [`Service`] does not satisfy the
//! `Factory` bound, so the registration never compiles:
//!
//! ```compile_fail
//! use std::sync::Arc;
//! use ferrous_registry::{Create, Service, ServiceRegistry};
//!
//! struct NotAService;
//!
//! struct Widget;
//! impl Service for Widget {}
//! impl Create for Widget {
//!     type Signature = fn(Arc<NotAService>) -> Arc<Self>;
//!     const CREATE: Self::Signature = |_| Arc::new(Widget);
//! }
//!
//! let mut registry = ServiceRegistry::new();
//! registry.register_factory::<Widget>();
//! ```
//!
//! Bare values are rejected too; dependencies are shared handles:
//!
//! ```compile_fail
//! use std::sync::Arc;
//! use ferrous_registry::{Create, Service};
//!
//! struct Config;
//! impl Service for Config {}
//!
//! struct Widget;
//! impl Service for Widget {}
//! impl Create for Widget {
//!     type Signature = fn(Config) -> Arc<Self>;
//!     const CREATE: Self::Signature = |_| Arc::new(Widget);
//! }
//! ```

use std::sync::Arc;

use crate::key::{key_of, Key};
use crate::registration::Instance;
use crate::service::Service;

/// Lookup callback used while a factory's arguments are assembled.
pub type Resolve<'a> = dyn FnMut(&Key) -> Option<Instance> + 'a;

/// A factory parameter type: a wrapper around a service capability.
///
/// | Parameter          | Capability | Unregistered dependency          |
/// |--------------------|------------|----------------------------------|
/// | `Arc<C>`           | `C`        | slot cannot be filled            |
/// | `Option<Arc<C>>`   | `C`        | `None` is passed to the factory  |
///
/// The capability's key is the same whether `C` is named bare or through
/// either wrapper.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be injected as a factory parameter",
    label = "not an injectable dependency",
    note = "factory parameters must be `Arc<C>` or `Option<Arc<C>>` where `C: Service`"
)]
pub trait Dependency: Sized + 'static {
    /// The capability with the ownership wrapper stripped.
    type Capability: ?Sized + Service;

    /// Builds the argument from a resolved (or missing) instance.
    ///
    /// Returns `None` when the wrapper has no way to represent a missing
    /// instance.
    fn from_resolved(resolved: Option<Arc<Self::Capability>>) -> Option<Self>;
}

impl<C: ?Sized + Service> Dependency for Arc<C> {
    type Capability = C;

    #[inline]
    fn from_resolved(resolved: Option<Arc<C>>) -> Option<Self> {
        resolved
    }
}

impl<C: ?Sized + Service> Dependency for Option<Arc<C>> {
    type Capability = C;

    #[inline]
    fn from_resolved(resolved: Option<Arc<C>>) -> Option<Self> {
        Some(resolved)
    }
}

/// A creation function producing `Arc<T>` from injected dependencies.
///
/// Implemented for `fn(A1, .., An) -> Arc<T>` with `n` up to 12, where every
/// `Ai` is a [`Dependency`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a factory for `{T}`",
    note = "factories are `fn(..) -> Arc<{T}>` pointers taking up to 12 `Arc<C>` / `Option<Arc<C>>` parameters"
)]
pub trait Factory<T: Service>: Copy + Send + Sync + 'static {
    /// Number of declared parameters.
    const ARITY: usize;

    /// Keys of the parameters' capabilities, in declaration order.
    fn dependencies() -> Vec<Key>;

    /// Resolves every parameter in order and calls the factory.
    ///
    /// `resolve` is called exactly once per parameter, first to last, until a
    /// slot cannot be filled; that slot's key is returned as the error and the
    /// factory is not called.
    fn invoke(self, resolve: &mut Resolve<'_>) -> Result<Arc<T>, Key>;
}

/// A service with a designated creation function.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use ferrous_registry::{capability, Create, Factory, Service, key_of};
///
/// trait Store: Service {}
/// capability!(Store);
///
/// struct Cache {
///     store: Arc<dyn Store>,
/// }
/// impl Service for Cache {}
///
/// impl Create for Cache {
///     type Signature = fn(Arc<dyn Store>) -> Arc<Self>;
///     const CREATE: Self::Signature = |store| Arc::new(Cache { store });
/// }
///
/// type Signature = <Cache as Create>::Signature;
/// assert_eq!(<Signature as Factory<Cache>>::ARITY, 1);
/// assert_eq!(<Signature as Factory<Cache>>::dependencies(), vec![key_of::<dyn Store>()]);
/// ```
pub trait Create: Service + Sized {
    /// The creation function's type; its parameters are the dependencies.
    type Signature: Factory<Self>;

    /// The creation function.
    const CREATE: Self::Signature;
}

/// Downcasts a stored instance back to the handle it was stored as.
#[inline]
pub(crate) fn reinterpret<C: ?Sized + Service>(instance: &Instance) -> Option<Arc<C>> {
    instance.downcast_ref::<Arc<C>>().cloned()
}

#[inline]
fn resolve_slot<D: Dependency>(resolve: &mut Resolve<'_>) -> Result<D, Key> {
    let key = key_of::<D::Capability>();
    let resolved = resolve(&key).and_then(|instance| reinterpret::<D::Capability>(&instance));
    D::from_resolved(resolved).ok_or(key)
}

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! impl_factory {
    ($($A:ident),*) => {
        impl<T, $($A,)*> Factory<T> for fn($($A),*) -> Arc<T>
        where
            T: Service,
            $($A: Dependency,)*
        {
            const ARITY: usize = count!($($A)*);

            fn dependencies() -> Vec<Key> {
                vec![$(key_of::<<$A as Dependency>::Capability>()),*]
            }

            #[allow(non_snake_case, unused_variables)]
            fn invoke(self, resolve: &mut Resolve<'_>) -> Result<Arc<T>, Key> {
                $(
                    let $A = resolve_slot::<$A>(resolve)?;
                )*
                Ok((self)($($A),*))
            }
        }
    };
}

impl_factory!();
impl_factory!(A1);
impl_factory!(A1, A2);
impl_factory!(A1, A2, A3);
impl_factory!(A1, A2, A3, A4);
impl_factory!(A1, A2, A3, A4, A5);
impl_factory!(A1, A2, A3, A4, A5, A6);
impl_factory!(A1, A2, A3, A4, A5, A6, A7);
impl_factory!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_factory!(A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_factory!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_factory!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
impl_factory!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);
