use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// @module: Per-request temporary file workspace

/// Name of the stored upload inside a workspace
const INPUT_FILE_NAME: &str = "input.srt";

/// Name of the serialized result inside a workspace
pub const OUTPUT_FILE_NAME: &str = "translated.srt";

// @struct: Scoped pair of temporary paths owned by one request
//
// The workspace is a unique temporary directory holding the stored
// upload and the translated output. Dropping the workspace removes the
// directory, so no exit path of the request handler can leak the files;
// `close` does the same removal eagerly and logs any failure instead of
// surfacing it.
#[derive(Debug)]
pub struct RequestWorkspace {
    dir: TempDir,
}

impl RequestWorkspace {
    /// Create a fresh workspace under the given upload root.
    /// The root is created if it does not exist yet.
    pub fn create<P: AsRef<Path>>(upload_root: P) -> Result<Self> {
        let upload_root = upload_root.as_ref();
        std::fs::create_dir_all(upload_root)
            .with_context(|| format!("Failed to create upload root: {}", upload_root.display()))?;

        let dir = tempfile::Builder::new()
            .prefix("srtserve-")
            .tempdir_in(upload_root)
            .context("Failed to create request workspace")?;

        debug!("Created request workspace at {}", dir.path().display());
        Ok(RequestWorkspace { dir })
    }

    /// Path the upload is stored at
    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join(INPUT_FILE_NAME)
    }

    /// Path the translated document is written to
    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join(OUTPUT_FILE_NAME)
    }

    /// Persist the uploaded bytes to the input path
    pub async fn store_input(&self, bytes: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(self.input_path(), bytes).await
    }

    /// Read the stored upload back as UTF-8 text
    pub async fn read_input(&self) -> std::io::Result<String> {
        tokio::fs::read_to_string(self.input_path()).await
    }

    /// Persist the serialized translation to the output path
    pub async fn store_output(&self, content: &str) -> std::io::Result<()> {
        tokio::fs::write(self.output_path(), content).await
    }

    /// Read the translated document's bytes for streaming
    pub async fn read_output(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(self.output_path()).await
    }

    /// Remove the workspace directory and both files inside it.
    /// Cleanup failure is logged, never raised to the caller.
    pub fn close(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            warn!("Failed to clean up workspace {}: {}", path.display(), e);
        } else {
            debug!("Cleaned up request workspace {}", path.display());
        }
    }
}
