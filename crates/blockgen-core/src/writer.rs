//! Artifact writing: directory creation and per-file writes

use crate::error::GenerateError;
use crate::request::{ArtifactFile, TargetDirectory};
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Filesystem capability used by the writer
pub trait Filesystem {
    /// Create `path` and any missing parents; an existing directory is not an error
    fn create_dir_all(&self, path: &Path) -> impl Future<Output = io::Result<()>> + Send;

    /// Create or overwrite a file
    fn write(&self, path: &Path, contents: &str) -> impl Future<Output = io::Result<()>> + Send;
}

/// The real filesystem, via `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path).await
    }

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents).await
    }
}

/// Create the target directory (recursive, idempotent)
pub async fn create_directory<S: Filesystem>(
    fs: &S,
    target: &TargetDirectory,
) -> Result<(), GenerateError> {
    fs.create_dir_all(target.path())
        .await
        .map_err(|source| GenerateError::DirectoryCreation {
            path: target.path().to_path_buf(),
            source,
        })
}

/// Write one artifact into the target directory, returning its path
pub async fn write_artifact<S: Filesystem>(
    fs: &S,
    target: &TargetDirectory,
    file: &ArtifactFile,
) -> Result<PathBuf, GenerateError> {
    let path = target.file(&file.relative_name);
    match fs.write(&path, &file.content).await {
        Ok(()) => Ok(path),
        Err(source) => Err(GenerateError::FileWrite { path, source }),
    }
}
