//! # ferrous-registry
//!
//! Compile-time checked service registry with constructor injection.
//!
//! Services declare their dependencies as the parameter list of a creation
//! function. The registry reads that list off the function's type, checks at
//! compile time that every parameter is a service capability, resolves each
//! one from the instances already registered, and stores the result.
//!
//! ## Features
//!
//! - **Signature-driven injection**: dependencies come from the factory's
//!   parameter types, no hand-written resolution code
//! - **Static validation**: a parameter that is not a [`Service`] is a compile
//!   error, never a runtime failure
//! - **Shared singletons**: every instance is an `Arc`, shared between the
//!   registry and all consumers
//! - **Explicit container**: no global state; the registry is a value you own
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use ferrous_registry::{capability, Create, Service, ServiceRegistry};
//!
//! trait Database: Service {
//!     fn url(&self) -> &str;
//! }
//! trait Mailer: Service {
//!     fn send(&self, to: &str) -> bool;
//! }
//! capability!(Database, Mailer);
//!
//! #[derive(Default)]
//! struct Postgres;
//! impl Service for Postgres {}
//! impl Database for Postgres {
//!     fn url(&self) -> &str { "postgres://localhost" }
//! }
//!
//! #[derive(Default)]
//! struct Smtp;
//! impl Service for Smtp {}
//! impl Mailer for Smtp {
//!     fn send(&self, _to: &str) -> bool { true }
//! }
//!
//! struct Signup {
//!     db: Arc<dyn Database>,
//!     mailer: Arc<dyn Mailer>,
//! }
//! impl Service for Signup {}
//!
//! impl Signup {
//!     fn create(db: Arc<dyn Database>, mailer: Arc<dyn Mailer>) -> Arc<Self> {
//!         Arc::new(Signup { db, mailer })
//!     }
//! }
//!
//! impl Create for Signup {
//!     type Signature = fn(Arc<dyn Database>, Arc<dyn Mailer>) -> Arc<Self>;
//!     const CREATE: Self::Signature = Signup::create;
//! }
//!
//! let mut registry = ServiceRegistry::new();
//! registry
//!     .register_direct::<dyn Database, Postgres>()
//!     .register_direct::<dyn Mailer, Smtp>()
//!     .register_factory::<Signup>();
//!
//! let signup = registry.get::<Signup>().unwrap();
//! assert_eq!(signup.db.url(), "postgres://localhost");
//! assert!(signup.mailer.send("a@example.com"));
//! ```
//!
//! ## Missing dependencies
//!
//! Registration order is the caller's responsibility. A dependency that is not
//! registered yet does not fail [`ServiceRegistry::register_factory`]:
//! `Option<Arc<C>>` parameters receive `None`, and a factory with an
//! unresolvable `Arc<C>` parameter is skipped with a warning. Use
//! [`ServiceRegistry::try_register_factory`] for a hard error instead.

// Module declarations
pub mod config;
pub mod descriptors;
pub mod error;
pub mod factory;
pub mod key;
pub mod observer;
pub mod registry;
pub mod service;

// Internal modules
mod registration;

// Re-export core types
pub use config::RegistryConfig;
pub use descriptors::{Binding, ServiceDescriptor};
pub use error::{DiError, DiResult};
pub use factory::{Create, Dependency, Factory, Resolve};
pub use key::{key_of, Key};
pub use observer::{LoggingObserver, RegistryObserver};
pub use registration::Instance;
pub use registry::ServiceRegistry;
pub use service::{Provides, Service};
