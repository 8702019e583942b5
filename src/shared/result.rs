/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures travel inside as `ResolverError` and can be downcast.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
