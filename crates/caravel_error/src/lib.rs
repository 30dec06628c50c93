//! Error types for the Caravel bulk media uploader.
//!
//! This crate provides the foundation error types used throughout the
//! Caravel workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the wrapper-struct pattern for clean error handling:
//! - Concern-specific structs (`HttpError`, `JsonError`, ...) carry the
//!   message plus source location
//! - `CaravelErrorKind` discriminates between them
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use caravel_error::{CaravelResult, HttpError};
//!
//! fn push_asset() -> CaravelResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match push_asset() {
//!     Ok(url) => println!("Stored at: {}", url),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod io;
mod json;

pub use config::ConfigError;
pub use error::{CaravelError, CaravelErrorKind, CaravelResult};
pub use http::HttpError;
pub use io::IoError;
pub use json::JsonError;
