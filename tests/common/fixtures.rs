//! テストフィクスチャ管理

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

/// Sample prose with known counts: 9 words, 1 sentence, 36 characters.
#[allow(dead_code)]
pub const PANGRAM: &str = "The quick brown fox jumps over the lazy dog.";

/// 一時ディレクトリに置いたテキストファイル
pub struct TextFixture {
    dir: TempDir,
    path: PathBuf,
}

#[allow(dead_code)]
impl TextFixture {
    pub fn new(contents: &str) -> Self {
        Self::with_bytes(contents.as_bytes())
    }

    pub fn with_bytes(contents: &[u8]) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("input.txt");
        fs::write(&path, contents).expect("write fixture");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// The `readability` binary with logging forced quiet.
pub fn readability() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_readability"));
    cmd.env_remove("READABILITY_LOG");
    cmd
}
