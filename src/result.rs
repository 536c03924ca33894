use crate::error::Error;

/// Convenience alias for results returned throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
