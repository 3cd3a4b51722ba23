//! Compile-time dependency injection through generated static resolvers.
//!
//! Registrations are declared as attributes on a *container* type. Each
//! attribute names the registered type, the factory that constructs it, and
//! the factory's inputs — classified as *resolved* (looked up recursively
//! through the container) or *explicit* (supplied by the caller). Expansion
//! happens entirely at compile time; resolution is a chain of plain function
//! calls with no runtime registry and no type-metadata inspection.
//!
//! ```
//! use std::sync::Arc;
//! use wirebox::{auto_register, factory_register, Resolve, ResolveWith};
//!
//! trait Theme: Send + Sync {
//!     fn accent(&self) -> &'static str;
//! }
//!
//! struct DarkTheme;
//!
//! impl Theme for DarkTheme {
//!     fn accent(&self) -> &'static str {
//!         "indigo"
//!     }
//! }
//!
//! fn dark_theme() -> Arc<dyn Theme> {
//!     Arc::new(DarkTheme)
//! }
//!
//! struct Banner {
//!     accent: &'static str,
//!     label: String,
//! }
//!
//! impl Banner {
//!     fn assemble(theme: Arc<dyn Theme>, label: String) -> Banner {
//!         Banner {
//!             accent: theme.accent(),
//!             label,
//!         }
//!     }
//! }
//!
//! #[auto_register(Arc<dyn Theme>, dark_theme)]
//! #[factory_register(Banner, resolved(Arc<dyn Theme>), explicit(label: String), Banner::assemble)]
//! struct Container;
//!
//! // Primary resolvers are named after the registered type.
//! let banner = Container::resolve_banner("hello".to_string());
//! assert_eq!(banner.accent, "indigo");
//!
//! // Convenience entry points pick the registration from the expected type.
//! let theme: Arc<dyn Theme> = Container::resolve();
//! assert_eq!(theme.accent(), "indigo");
//!
//! let banner: Banner = Container::resolve_with("again".to_string());
//! assert_eq!(banner.label, "again");
//! ```
//!
//! ## Registration kinds
//!
//! * [`macro@auto_register`] - every factory input resolved recursively
//! * [`macro@factory_register`] - inputs exposed to the caller, or mixed via
//!   `resolved(..)`/`explicit(..)` tags
//! * [`macro@singleton_register`] - constructed once per process, shared
//! * `opaque_*` variants of the above - resolvers return `impl Trait`
//!   handles, hiding the concrete implementation from call sites
//!
//! ## Mock overrides
//!
//! Debug builds additionally generate a `mock_*` setter per non-opaque
//! registration. An installed override short-circuits the resolver before
//! any real construction or recursive resolution happens, which makes the
//! whole dependency subgraph below the registered type inert while the
//! override is active.

pub mod cell;
pub mod factory;
pub mod resolve;

pub use cell::{MockCell, SingletonCell};
pub use factory::LazyFactory;
pub use resolve::{Resolve, ResolveWith};

#[cfg(feature = "macros")]
pub use wirebox_macros::{
    auto_register, factory_register, opaque_auto_register, opaque_factory_register,
    opaque_singleton_register, singleton_register,
};
