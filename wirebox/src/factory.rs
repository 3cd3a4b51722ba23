//! The partial-application thunk returned by generated `factory_of_*` and
//! `lazy_*` accessors.

/// A reusable zero-argument constructor for a resolved type.
///
/// Captures a fully-configured construction path — the container, the
/// registered type and any explicit parameters — so callers can hand out a
/// single value that produces instances on demand without re-stating the
/// wiring at every site.
pub struct LazyFactory<T> {
    thunk: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> LazyFactory<T> {
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            thunk: Box::new(thunk),
        }
    }

    /// Runs the captured construction path.
    pub fn make(&self) -> T {
        (self.thunk)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn makes_a_fresh_value_per_call() {
        let factory = LazyFactory::new(|| vec![1, 2, 3]);
        let first = factory.make();
        let second = factory.make();
        assert_eq!(first, second);
        assert_eq!(first, [1, 2, 3]);
    }

    #[test]
    fn captures_parameters() {
        let side = 4;
        let factory = LazyFactory::new(move || side * side);
        assert_eq!(factory.make(), 16);
    }
}
