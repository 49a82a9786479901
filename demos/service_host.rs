//! Composition root wiring three directly bound services and one service
//! whose dependencies are injected from its creation function.
//!
//! Run with `FERROUS_REGISTRY_LOG=1 RUST_LOG=debug` to see registry events.

use std::sync::Arc;

use ferrous_registry::{capability, Create, RegistryConfig, Service, ServiceRegistry};
use tracing_subscriber::EnvFilter;

trait IFoo: Service {
    fn do_foo(&self, value: i32);
}

trait IBar: Service {
    fn do_bar(&self, text: &str) -> i32;
}

trait IZoo: Service {
    fn do_zoo(&self, value: f32) -> bool;
}

capability!(IFoo, IBar, IZoo);

#[derive(Default)]
struct Foo;

impl Service for Foo {}

impl IFoo for Foo {
    fn do_foo(&self, value: i32) {
        println!("Foo::do_foo({})", value);
    }
}

#[derive(Default)]
struct Bar;

impl Service for Bar {}

impl IBar for Bar {
    fn do_bar(&self, text: &str) -> i32 {
        println!("Bar::do_bar({:?})", text);
        -1
    }
}

#[derive(Default)]
struct Zoo;

impl Service for Zoo {}

impl IZoo for Zoo {
    fn do_zoo(&self, value: f32) -> bool {
        println!("Zoo::do_zoo({})", value);
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

    fn do_service_work(&self) {
        self.foo.do_foo(42);
        let result = self.bar.do_bar("the answer to everything");
        println!("ServiceA::do_service_work(): bar: {}", result);
    }
}

impl Create for ServiceA {
    type Signature = fn(Arc<dyn IFoo>, Arc<dyn IBar>) -> Arc<Self>;
    const CREATE: Self::Signature = ServiceA::create;
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut host = ServiceRegistry::with_config(RegistryConfig::from_env());

    host.register_direct::<dyn IFoo, Foo>()
        .register_direct::<dyn IBar, Bar>()
        .register_direct::<dyn IZoo, Zoo>()
        .register_factory::<ServiceA>();

    match host.get::<ServiceA>() {
        Some(service) => service.do_service_work(),
        None => eprintln!("ServiceA was not registered"),
    }

    if let Some(zoo) = host.get::<dyn IZoo>() {
        zoo.do_zoo(1.5);
    }
}
