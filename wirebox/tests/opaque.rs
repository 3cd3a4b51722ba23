#[cfg(feature = "macros")]
mod opaque_macro_test {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use wirebox::{
        auto_register, opaque_auto_register, opaque_factory_register, opaque_singleton_register,
    };

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

    trait Notifier {
        fn note(&self) -> String;
    }

    struct EmailNotifier {
        accent: &'static str,
    }

    impl Notifier for EmailNotifier {
        fn note(&self) -> String {
            format!("note in {}", self.accent)
        }
    }

    impl EmailNotifier {
        fn new(theme: Arc<dyn Theme>) -> EmailNotifier {
            EmailNotifier {
                accent: theme.accent(),
            }
        }
    }

    trait Report {
        fn render(&self) -> String;
    }

    struct TextReport {
        accent: &'static str,
        title: String,
    }

    impl Report for TextReport {
        fn render(&self) -> String {
            format!("{} ({})", self.title, self.accent)
        }
    }

    impl TextReport {
        fn new(theme: Arc<dyn Theme>, title: String) -> TextReport {
            TextReport {
                accent: theme.accent(),
                title,
            }
        }
    }

    #[auto_register(Arc<dyn Theme>, dark_theme)]
    #[opaque_auto_register(dyn Notifier, Arc<dyn Theme>, EmailNotifier::new)]
    #[opaque_factory_register(dyn Report, resolved(Arc<dyn Theme>), explicit(title: String), TextReport::new)]
    struct Ui;

    #[test]
    fn opaque_auto_returns_a_capability_handle() {
        let notifier = Ui::resolve_notifier();
        assert_eq!(notifier.note(), "note in indigo");
    }

    #[test]
    fn opaque_factory_exposes_explicit_parameters() {
        let report = Ui::resolve_report("Quarterly".to_string());
        assert_eq!(report.render(), "Quarterly (indigo)");

        let factory = Ui::factory_of_report();
        assert_eq!(factory.make("Weekly".to_string()).render(), "Weekly (indigo)");

        let lazy = Ui::lazy_report("Daily".to_string());
        assert_eq!(lazy.make().render(), "Daily (indigo)");
        assert_eq!(lazy.make().render(), "Daily (indigo)");
    }

    trait Cache: Send + Sync {
        fn tag(&self) -> usize;
    }

    static CACHE_FACTORY_RUNS: AtomicUsize = AtomicUsize::new(0);

    struct MemoryCache {
        tag: usize,
    }

    impl Cache for MemoryCache {
        fn tag(&self) -> usize {
            self.tag
        }
    }

    impl MemoryCache {
        fn new() -> MemoryCache {
            MemoryCache {
                tag: CACHE_FACTORY_RUNS.fetch_add(1, Ordering::SeqCst),
            }
        }
    }

    #[opaque_singleton_register(dyn Cache + Send + Sync, MemoryCache::new)]
    struct Infra;

    #[test]
    fn opaque_singleton_shares_an_erased_handle() {
        let first = Infra::resolve_cache();
        let second = Infra::resolve_cache();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.tag(), 0);
        assert_eq!(CACHE_FACTORY_RUNS.load(Ordering::SeqCst), 1);
    }
}
