//! Signed Cloudinary upload client for the Caravel bulk media uploader.
//!
//! This crate provides the credential configuration, the per-request
//! signature generator, and the single-item uploader that implements
//! the [`caravel_core::Uploader`] seam.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod signature;
mod upload;

pub use config::CloudConfig;
pub use signature::generate_signature;
pub use upload::{CloudinaryClient, TimestampSource};
