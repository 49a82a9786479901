use ferrous_registry::{capability, Binding, Create, Service, ServiceRegistry};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

trait IFoo: Service {
    fn do_foo(&self, value: i32);
    fn calls(&self) -> usize;
}

trait IBar: Service {
    fn do_bar(&self, text: &str) -> i32;
    fn calls(&self) -> usize;
}

trait IZoo: Service {
    fn do_zoo(&self, value: f32) -> bool;
}

capability!(IFoo, IBar, IZoo);

#[derive(Default)]
struct Foo {
    calls: AtomicUsize,
}

impl Service for Foo {}

impl IFoo for Foo {
    fn do_foo(&self, _value: i32) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
struct Bar {
    calls: AtomicUsize,
}

impl Service for Bar {}

impl IBar for Bar {
    fn do_bar(&self, _text: &str) -> i32 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        -1
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
struct Zoo;

impl Service for Zoo {}

impl IZoo for Zoo {
    fn do_zoo(&self, _value: f32) -> bool {
        true
    }
}

struct ServiceA {
    foo: Arc<dyn IFoo>,
    bar: Arc<dyn IBar>,
}

impl Service for ServiceA {}

impl ServiceA {
    fn create(foo: Arc<dyn IFoo>, bar: Arc<dyn IBar>) -> Arc<Self> {
        Arc::new(ServiceA { foo, bar })
    }

    fn do_service_work(&self) -> i32 {
        self.foo.do_foo(42);
        self.bar.do_bar("the answer to everything")
    }
}

impl Create for ServiceA {
    type Signature = fn(Arc<dyn IFoo>, Arc<dyn IBar>) -> Arc<Self>;
    const CREATE: Self::Signature = ServiceA::create;
}

#[test]
fn test_direct_round_trip() {
    let mut registry = ServiceRegistry::new();
    registry.register_direct::<dyn IBar, Bar>();

    let bar = registry.get::<dyn IBar>().expect("IBar registered");
    assert_eq!(bar.calls(), 0);
    assert_eq!(bar.do_bar("x"), -1);
    assert_eq!(bar.calls(), 1);
}

#[test]
fn test_repeated_lookup_returns_same_instance() {
    let mut registry = ServiceRegistry::new();
    registry.register_direct::<dyn IFoo, Foo>();

    let a = registry.get::<dyn IFoo>().unwrap();
    let b = registry.get::<dyn IFoo>().unwrap();
    let c = registry.get::<dyn IFoo>().unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&b, &c));

    a.do_foo(1);
    assert_eq!(c.calls(), 1); // Shared state, no re-construction
}

#[test]
fn test_identities_do_not_collide() {
    let mut registry = ServiceRegistry::new();
    registry.register_direct::<dyn IFoo, Foo>();

    assert!(registry.contains::<dyn IFoo>());
    assert!(!registry.contains::<dyn IBar>());
    assert!(registry.get::<dyn IBar>().is_none());
    // Registered under the capability only, not the concrete type
    assert!(registry.get::<Foo>().is_none());
}

#[test]
fn test_end_to_end_scenario() {
    let mut host = ServiceRegistry::new();
    host.register_direct::<dyn IFoo, Foo>()
        .register_direct::<dyn IBar, Bar>()
        .register_direct::<dyn IZoo, Zoo>()
        .register_factory::<ServiceA>();

    assert_eq!(host.len(), 4);

    let service = host.get::<ServiceA>().expect("ServiceA registered");
    assert_eq!(service.do_service_work(), -1);

    let foo = host.get::<dyn IFoo>().unwrap();
    let bar = host.get::<dyn IBar>().unwrap();
    assert!(Arc::ptr_eq(&service.foo, &foo));
    assert!(Arc::ptr_eq(&service.bar, &bar));
    assert_eq!(foo.calls(), 1);
    assert_eq!(bar.calls(), 1);

    assert!(host.get::<dyn IZoo>().unwrap().do_zoo(0.5));
}

#[test]
fn test_duplicate_registration_keeps_first() {
    let mut registry = ServiceRegistry::new();
    registry.register_direct::<dyn IFoo, Foo>();
    let first = registry.get::<dyn IFoo>().unwrap();

    registry.register_direct::<dyn IFoo, Foo>();
    let again = registry.get::<dyn IFoo>().unwrap();

    assert_eq!(registry.len(), 2);
    assert!(Arc::ptr_eq(&first, &again));
}

#[test]
fn test_descriptors_in_registration_order() {
    let mut registry = ServiceRegistry::new();
    registry
        .register_direct::<dyn IFoo, Foo>()
        .register_direct::<dyn IBar, Bar>()
        .register_factory::<ServiceA>();

    let descriptors = registry.descriptors();
    assert_eq!(descriptors.len(), 3);

    assert!(descriptors[0].type_name().contains("IFoo"));
    assert!(descriptors[0].implementation.ends_with("Foo"));
    assert_eq!(descriptors[0].binding, Binding::Direct);
    assert!(descriptors[0].dependencies.is_empty());

    assert!(descriptors[2].is_factory());
    assert!(descriptors[2].type_name().ends_with("ServiceA"));
    let deps: Vec<_> = descriptors[2].dependencies.iter().map(|k| k.display_name()).collect();
    assert_eq!(deps.len(), 2);
    assert!(deps[0].contains("IFoo"));
    assert!(deps[1].contains("IBar"));
}

#[test]
fn test_registry_is_shareable_once_built() {
    let mut registry = ServiceRegistry::new();
    registry.register_direct::<dyn IFoo, Foo>();
    let registry = Arc::new(registry);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || registry.get::<dyn IFoo>().unwrap().do_foo(7))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.get::<dyn IFoo>().unwrap().calls(), 4);
}
