//! Service identity keys for the registry.

use std::any::TypeId;

/// Identity of a service capability or concrete service type.
///
/// Keys are the registry's lookup values. Two keys are equal iff they were
/// derived from the same type; the type name is carried only for diagnostics
/// and never takes part in comparison or hashing.
///
/// Keys can be derived for trait-object capabilities as well as for concrete
/// types, since `TypeId::of` accepts unsized types.
///
/// # Examples
///
/// ```rust
/// use ferrous_registry::{key_of, Key};
///
/// trait Logger: Send + Sync {}
///
/// let a = key_of::<dyn Logger>();
/// let b = key_of::<dyn Logger>();
/// let c = key_of::<String>();
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert!(a.display_name().contains("Logger"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Key {
    id: TypeId,
    name: &'static str,
}

impl Key {
    /// Creates a key from a `TypeId` and a display name.
    ///
    /// Prefer [`key_of`]; this exists for tests and diagnostics tooling that
    /// already hold a `TypeId`.
    pub fn new(id: TypeId, name: &'static str) -> Self {
        Self { id, name }
    }

    /// The `TypeId` this key compares by.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Get the type name for display
    ///
    /// Returns the `std::any::type_name` of the type the key was derived from.
    ///
    /// ```rust
    /// use ferrous_registry::key_of;
    ///
    /// assert_eq!(key_of::<String>().display_name(), "alloc::string::String");
    /// ```
    pub fn display_name(&self) -> &'static str {
        self.name
    }
}

// TypeId-only equality: names are diagnostic and may differ across compilers
impl PartialEq for Key {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for Key {
    #[inline(always)]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Derives the key of `T`, which may be a trait object.
#[inline(always)]
pub fn key_of<T: ?Sized + 'static>() -> Key {
    Key::new(TypeId::of::<T>(), std::any::type_name::<T>())
}
