//! Resolution entry points attached to containers by the registration
//! macros.
//!
//! The primary resolvers generated for a container are inherent functions
//! named after the registered type (`resolve_user_session`). The traits here
//! are the convenience entry points: they select the registered type from
//! the call site's expected return type, so `let theme: Arc<dyn Theme> =
//! Container::resolve();` reads like a declaration rather than a lookup.
//! Every trait impl forwards to the primary resolver, which keeps a single
//! construction path and lets mock overrides intercept both entry points.

/// Resolution of a registered type with no explicit parameters.
pub trait Resolve<T> {
    /// Constructs (or looks up, for singletons) an instance of `T`,
    /// recursively resolving the factory's inputs through this container.
    fn resolve() -> T;
}

/// Resolution of a registered type with explicit parameters.
pub trait ResolveWith<T> {
    /// The caller-supplied inputs, in registration order: the bare type for
    /// a single parameter, a tuple for several.
    type Params;

    /// Constructs an instance of `T`, forwarding `params` to the explicit
    /// slots of the factory and resolving the rest recursively.
    fn resolve_with(params: Self::Params) -> T;
}
