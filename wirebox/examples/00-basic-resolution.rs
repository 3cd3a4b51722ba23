use std::sync::Arc;
use wirebox::{auto_register, Resolve};

trait MessageSource: Send + Sync {
    fn message(&self) -> String;
}

struct StaticSource;

impl MessageSource for StaticSource {
    fn message(&self) -> String {
        "hello from wirebox".to_string()
    }
}

fn static_source() -> Arc<dyn MessageSource> {
    Arc::new(StaticSource)
}

struct Printer {
    source: Arc<dyn MessageSource>,
}

impl Printer {
    fn new(source: Arc<dyn MessageSource>) -> Printer {
        Printer { source }
    }

    fn print(&self) {
        println!("{}", self.source.message());
    }
}

// Every factory input of an auto registration is resolved recursively
// through the container.
#[auto_register(Arc<dyn MessageSource>, static_source)]
#[auto_register(Printer, Arc<dyn MessageSource>, Printer::new)]
struct Dependencies;

fn main() {
    let printer: Printer = Dependencies::resolve();
    printer.print();
}
