// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod prompt;

pub use filesystem::FsDocumentReader;
pub use prompt::LinePrompt;
