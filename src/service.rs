//! The base service capability and capability binding.

use std::sync::Arc;

/// Common base capability of every registrable service.
///
/// Capability traits extend `Service`; the capability type used as a
/// registry key is the trait object (`dyn IFoo`). Concrete services implement
/// it directly so they can be stored and looked up under their own type.
///
/// Factory parameters are checked against this trait at compile time, so a
/// factory that asks for something which is not a service never builds.
///
/// # Examples
///
/// ```rust
/// use ferrous_registry::{capability, Service};
///
/// trait Clock: Service {
///     fn now(&self) -> u64;
/// }
/// capability!(Clock);
///
/// #[derive(Default)]
/// struct FixedClock;
/// impl Service for FixedClock {}
/// impl Clock for FixedClock {
///     fn now(&self) -> u64 { 7 }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a registrable service",
    label = "`{Self}` does not implement `Service`",
    note = "capability traits must extend `ferrous_registry::Service` and concrete services need an `impl Service`"
)]
pub trait Service: Send + Sync + 'static {}

/// Binds a concrete implementation `T` to the capability `Self`.
///
/// Stable Rust cannot express "any `T` coercible to `dyn Trait`" generically,
/// so every capability trait gets one blanket impl of this trait, normally
/// written with the [`capability!`](crate::capability) macro. The conversion is
/// an unsizing coercion of the same `Arc`: no copy, same allocation.
#[diagnostic::on_unimplemented(
    message = "`{T}` cannot be registered as `{Self}`",
    note = "declare the capability with `capability!(Trait)` and make sure `{T}` implements it"
)]
pub trait Provides<T: Service>: Service {
    /// Reinterprets a concrete instance as this capability.
    fn provide(instance: Arc<T>) -> Arc<Self>;
}

/// Declares one or more traits as injectable capabilities.
///
/// Generates `impl<T: Trait> Provides<T> for dyn Trait` for each trait listed.
/// Each trait must extend [`Service`].
#[macro_export]
macro_rules! capability {
    ($($capability:path),+ $(,)?) => {
        $(
            impl<T: $capability> $crate::Provides<T> for dyn $capability {
                #[inline]
                fn provide(instance: ::std::sync::Arc<T>) -> ::std::sync::Arc<Self> {
                    instance
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Service {
        fn greet(&self) -> &'static str;
    }
    crate::capability!(Greeter);

    struct English;
    impl Service for English {}
    impl Greeter for English {
        fn greet(&self) -> &'static str {
            "hello"
        }
    }

    #[test]
    fn provide_keeps_the_same_allocation() {
        let concrete = Arc::new(English);
        let erased = <dyn Greeter as Provides<English>>::provide(concrete.clone());

        assert_eq!(erased.greet(), "hello");
        assert!(std::ptr::eq(
            Arc::as_ptr(&concrete) as *const u8,
            Arc::as_ptr(&erased) as *const u8
        ));
        assert_eq!(Arc::strong_count(&concrete), 2);
    }
}
