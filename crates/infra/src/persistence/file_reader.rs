use std::{borrow::Cow, fs, path::Path};

/// Reads whole documents, tolerating broken encodings.
pub struct FileReader;

impl FileReader {
    /// Read the file as text. Invalid UTF-8 sequences become U+FFFD.
    pub fn read_text_lossy(path: &Path) -> std::io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(Self::decode(path, bytes))
    }

    fn decode(path: &Path, bytes: Vec<u8>) -> String {
        match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("{} is not valid UTF-8; invalid bytes were replaced", path.display());
                match String::from_utf8_lossy(err.as_bytes()) {
                    Cow::Owned(text) => text,
                    Cow::Borrowed(text) => text.to_owned(),
                }
            }
        }
    }
}
