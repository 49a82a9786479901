//! Error types for the service registry.

use std::fmt;

/// Registry errors
///
/// Only the opt-in strict paths produce these. The default registration and
/// lookup calls never fail: an unresolved service surfaces as `None`.
///
/// # Examples
///
/// ```rust
/// use ferrous_registry::{DiError, ServiceRegistry};
///
/// struct Unregistered;
/// impl ferrous_registry::Service for Unregistered {}
///
/// let registry = ServiceRegistry::new();
/// match registry.require::<Unregistered>() {
///     Err(DiError::NotFound(name)) => assert!(name.ends_with("Unregistered")),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiError {
    /// Service not registered
    NotFound(&'static str),
    /// A factory's required dependency was not registered
    MissingDependency {
        service: &'static str,
        dependency: &'static str,
    },
    /// Configuration document could not be read
    Config(String),
}

impl fmt::Display for DiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiError::NotFound(name) => write!(f, "Service not found: {}", name),
            DiError::MissingDependency { service, dependency } => {
                write!(f, "Missing dependency {} for {}", dependency, service)
            }
            DiError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for DiError {}

/// Result type for registry operations
pub type DiResult<T> = Result<T, DiError>;
