use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wirebox::singleton_register;

trait ConnectionPool: Send + Sync {
    fn id(&self) -> usize;
}

struct PostgresPool {
    id: usize,
}

impl ConnectionPool for PostgresPool {
    fn id(&self) -> usize {
        self.id
    }
}

static POOLS_OPENED: AtomicUsize = AtomicUsize::new(0);

fn open_pool() -> Arc<dyn ConnectionPool> {
    Arc::new(PostgresPool {
        id: POOLS_OPENED.fetch_add(1, Ordering::SeqCst),
    })
}

// The factory runs on first resolution only; every later call returns the
// same shared instance for the rest of the process.
#[singleton_register(Arc<dyn ConnectionPool>, open_pool)]
struct Infrastructure;

fn main() {
    let first = Infrastructure::resolve_connection_pool();
    let second = Infrastructure::resolve_connection_pool();

    println!("same pool: {}", Arc::ptr_eq(&first, &second));
    println!("pools opened: {}", POOLS_OPENED.load(Ordering::SeqCst));
}
