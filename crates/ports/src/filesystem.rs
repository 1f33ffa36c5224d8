// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use readability_shared_kernel::Result;

/// DTO carrying a document loaded by an input port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDto {
    pub path: PathBuf,
    pub text: String,
}

/// Port for loading a document's text.
pub trait DocumentReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<DocumentDto>;
}
