//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: loading a document's text
//! - [`prompt`]: asking the user which score to compute
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod prompt;
