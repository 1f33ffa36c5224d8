// crates/infra/src/filesystem.rs
use std::path::Path;

use readability_ports::filesystem::{DocumentDto, DocumentReader};
use readability_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Reads documents from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDocumentReader;

impl DocumentReader for FsDocumentReader {
    fn read(&self, path: &Path) -> Result<DocumentDto> {
        let text = FileReader::read_text_lossy(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        log::debug!("read {} bytes from {}", text.len(), path.display());
        Ok(DocumentDto { path: path.to_path_buf(), text })
    }
}
