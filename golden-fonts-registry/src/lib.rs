//! Font registry for golden-fonts.
//!
//! This crate provides:
//! - The `FontRegistry` trait, the seam between the loader and whatever
//!   rendering engine consumes the fonts
//! - `FontData`, raw font bytes validated as TrueType/OpenType (or a collection)
//! - `FontDbRegistry`, a registry backed by a `fontdb::Database` that keeps
//!   faces addressable by the family name they were registered under
//!
//! # Architecture
//!
//! Registration is family-oriented: a loader collects every face of one
//! family and hands them over in a single `register_family` call, which
//! either registers all of them or none.

pub mod error;
pub mod registry;

// Re-export main types for convenience
pub use error::RegistryError;
pub use registry::{FontData, FontDbRegistry, FontRegistry};
