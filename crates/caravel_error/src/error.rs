//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, IoError, JsonError};

/// Discriminated union of the concern-specific Caravel errors.
///
/// # Examples
///
/// ```
/// use caravel_error::{CaravelError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: CaravelError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CaravelErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Filesystem error
    #[from(IoError)]
    Io(IoError),
}

/// Caravel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use caravel_error::{CaravelResult, ConfigError};
///
/// fn might_fail() -> CaravelResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Caravel Error: {}", _0)]
pub struct CaravelError(Box<CaravelErrorKind>);

impl CaravelError {
    /// Create a new error from a kind.
    pub fn new(kind: CaravelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CaravelErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CaravelErrorKind
impl<T> From<T> for CaravelError
where
    T: Into<CaravelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Caravel operations.
///
/// # Examples
///
/// ```
/// use caravel_error::{CaravelResult, HttpError};
///
/// fn push_asset() -> CaravelResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type CaravelResult<T> = std::result::Result<T, CaravelError>;
