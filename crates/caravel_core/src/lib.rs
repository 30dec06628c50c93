//! Core data types and seams for the Caravel bulk media uploader.
//!
//! This crate provides the descriptor/result data model, the
//! [`Uploader`] and [`Pacer`] traits the orchestrator depends on, and
//! manifest loading.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod manifest;
mod media;
mod outcome;
mod pacer;
mod uploader;

pub use manifest::Manifest;
pub use media::{MediaDescriptor, UploadResult};
pub use outcome::UploadOutcome;
pub use pacer::{FixedDelayPacer, Pacer};
pub use uploader::Uploader;
