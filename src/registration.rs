//! Registry entry storage.

use std::any::Any;
use std::sync::Arc;

use crate::descriptors::ServiceDescriptor;
use crate::key::Key;

/// Type-erased service handle as stored in the registry.
///
/// Always holds an `Arc<C>` for the capability `C` of the entry's key, so the
/// handle can be downcast back without touching the service itself.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// One registry entry
pub(crate) struct Registration {
    pub(crate) instance: Instance,
    pub(crate) descriptor: ServiceDescriptor,
}

impl Registration {
    pub(crate) fn new(instance: Instance, descriptor: ServiceDescriptor) -> Self {
        Self { instance, descriptor }
    }

    #[inline(always)]
    pub(crate) fn key(&self) -> &Key {
        &self.descriptor.key
    }
}

/// Append-only entry list with first-match linear lookup.
///
/// Registries are small and built once, so a `Vec` scan beats hashing here.
#[derive(Default)]
pub(crate) struct Registry {
    entries: Vec<Registration>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends an entry. Duplicate keys are kept; lookups keep returning the first.
    pub(crate) fn push(&mut self, registration: Registration) {
        self.entries.push(registration);
    }

    /// First registration under `key`, by insertion order.
    #[inline(always)]
    pub(crate) fn get(&self, key: &Key) -> Option<&Registration> {
        self.entries.iter().find(|reg| reg.key() == key)
    }

    #[inline(always)]
    pub(crate) fn contains_key(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::Binding;
    use crate::key::key_of;

    fn entry(key: Key, value: u32) -> Registration {
        Registration::new(
            Arc::new(value),
            ServiceDescriptor {
                key,
                implementation: "u32",
                binding: Binding::Direct,
                dependencies: Vec::new(),
            },
        )
    }

    #[test]
    fn first_match_wins() {
        let mut registry = Registry::new();
        registry.push(entry(key_of::<u32>(), 1));
        registry.push(entry(key_of::<u32>(), 2));

        let found = registry.get(&key_of::<u32>()).unwrap();
        assert_eq!(found.instance.downcast_ref::<u32>(), Some(&1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn missing_key() {
        let mut registry = Registry::new();
        registry.push(entry(key_of::<u32>(), 1));

        assert!(registry.get(&key_of::<u64>()).is_none());
        assert!(!registry.contains_key(&key_of::<u64>()));
        assert!(registry.contains_key(&key_of::<u32>()));
    }
}
