/// Errors raised while building a route table or settling a navigation.
///
/// Denied access is not an error; it is a [`crate::Decision::Redirect`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// A declared route path does not start with `/`.
    #[error("route path must start with '/': {0:?}")]
    InvalidPath(String),
    /// Two route entries normalize to the same path.
    #[error("duplicate route path: {0}")]
    DuplicateRoute(String),
    /// The fallback path is missing from the table or is itself guarded.
    #[error("fallback path {0} must be a declared, unguarded view route")]
    FallbackUnroutable(String),
    /// Redirects kept chaining without reaching a renderable view.
    #[error("navigation to {start} did not settle after {hops} redirects")]
    RedirectLoop { start: String, hops: usize },
}
