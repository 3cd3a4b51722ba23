#[cfg(feature = "macros")]
mod resolve_macro_test {
    use std::sync::Arc;
    use wirebox::{auto_register, factory_register, Resolve, ResolveWith};

    trait Shape: Send + Sync {
        fn name(&self) -> &'static str;
    }

    struct Circle;

    impl Shape for Circle {
        fn name(&self) -> &'static str {
            "circle"
        }
    }

    impl Circle {
        fn create() -> Arc<dyn Shape> {
            Arc::new(Circle)
        }
    }

    #[factory_register(Arc<dyn Shape>, Circle::create)]
    struct Shapes;

    #[test]
    fn resolves_zero_parameter_registration() {
        let shape = Shapes::resolve_shape();
        assert_eq!(shape.name(), "circle");

        let inferred: Arc<dyn Shape> = Shapes::resolve();
        assert_eq!(inferred.name(), "circle");
    }

    #[test]
    fn zero_parameter_factory_object_is_a_thunk() {
        let factory = Shapes::factory_of_shape();
        assert_eq!(factory.make().name(), "circle");
    }

    struct Square {
        side: i64,
    }

    impl Square {
        fn with_side(side: i64) -> Square {
            Square { side }
        }
    }

    #[factory_register(Square, i64, Square::with_side)]
    struct Squares;

    #[test]
    fn forwards_positional_explicit_parameters() {
        let square = Squares::resolve_square(5);
        assert_eq!(square.side, 5);

        let square: Square = Squares::resolve_with(9);
        assert_eq!(square.side, 9);
    }

    trait Theme: Send + Sync {
        fn accent(&self) -> &'static str;
    }

    struct DarkTheme;

    impl Theme for DarkTheme {
        fn accent(&self) -> &'static str {
            "indigo"
        }
    }

    fn dark_theme() -> Arc<dyn Theme> {
        Arc::new(DarkTheme)
    }

    struct Banner {
        accent: &'static str,
        count: i64,
        label: String,
    }

    impl Banner {
        fn assemble(theme: Arc<dyn Theme>, count: i64, label: String) -> Banner {
            Banner {
                accent: theme.accent(),
                count,
                label,
            }
        }
    }

    struct Greeting {
        text: String,
    }

    impl Greeting {
        fn compose(theme: Arc<dyn Theme>) -> Greeting {
            Greeting {
                text: format!("hello in {}", theme.accent()),
            }
        }
    }

    #[auto_register(Arc<dyn Theme>, dark_theme)]
    #[auto_register(Greeting, Arc<dyn Theme>, Greeting::compose)]
    #[factory_register(Banner, resolved(Arc<dyn Theme>), explicit(count: i64), explicit(String), Banner::assemble)]
    struct Ui;

    #[test]
    fn auto_registration_resolves_the_whole_chain() {
        let greeting: Greeting = Ui::resolve();
        assert_eq!(greeting.text, "hello in indigo");
        assert_eq!(Ui::resolve_greeting().text, "hello in indigo");
    }

    #[test]
    fn interleaves_resolved_and_explicit_parameters() {
        let banner = Ui::resolve_banner(3, "hello".to_string());
        assert_eq!(banner.accent, "indigo");
        assert_eq!(banner.count, 3);
        assert_eq!(banner.label, "hello");
    }

    #[test]
    fn convenience_resolver_matches_primary() {
        let primary = Ui::resolve_banner(1, "same".to_string());
        let convenience: Banner = Ui::resolve_with((1, "same".to_string()));
        assert_eq!(primary.count, convenience.count);
        assert_eq!(primary.label, convenience.label);
        assert_eq!(primary.accent, convenience.accent);
    }

    #[test]
    fn factory_object_forwards_to_resolver() {
        let factory = Ui::factory_of_banner();
        let banner = factory.make(2, "via factory".to_string());
        assert_eq!(banner.count, 2);
        assert_eq!(banner.accent, "indigo");

        let lazy = Ui::lazy_banner(8, "captured".to_string());
        let first = lazy.make();
        let second = lazy.make();
        assert_eq!(first.count, 8);
        assert_eq!(second.count, 8);
        assert_eq!(second.label, "captured");
    }
}
