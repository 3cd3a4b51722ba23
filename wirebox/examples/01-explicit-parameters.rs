use std::sync::Arc;
use wirebox::{auto_register, factory_register, ResolveWith};

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

// The theme is resolved behind the scenes; count and the label stay with the
// caller. A named explicit entry keeps the factory's parameter name in the
// generated signature, an unnamed one becomes arg0.
#[auto_register(Arc<dyn Theme>, dark_theme)]
#[factory_register(Banner, resolved(Arc<dyn Theme>), explicit(count: i64), explicit(String), Banner::assemble)]
struct Dependencies;

fn main() {
    let banner = Dependencies::resolve_banner(3, "release day".to_string());
    println!("{} x{} [{}]", banner.label, banner.count, banner.accent);

    let banner: Banner = Dependencies::resolve_with((1, "inferred".to_string()));
    println!("{} x{} [{}]", banner.label, banner.count, banner.accent);

    // Partial application: hand out a reusable constructor instead of the
    // container itself.
    let factory = Dependencies::factory_of_banner();
    let banner = factory.make(7, "factored".to_string());
    println!("{} x{} [{}]", banner.label, banner.count, banner.accent);

    let lazy = Dependencies::lazy_banner(2, "captured".to_string());
    println!("{} twice: {}", lazy.make().label, lazy.make().count);
}
