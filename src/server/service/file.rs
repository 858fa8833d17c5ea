//! Storage for uploaded client images.
//!
//! Files are kept in a single flat directory. Each upload is prefixed with a random
//! 8-character code so two uploads with the same original name never collide, and the
//! code alone is enough to find the file again for download.

use rand::Rng;
use std::path::{Path, PathBuf};

const FILE_CODE_LENGTH: usize = 8;

/// Name reserved for an upload before its bytes are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFileName {
    /// Random code used in the download URL.
    pub code: String,
    /// `"{code}-{original name}"`, the name on disk and in `imagenCliente`.
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the storage directory if it does not exist yet.
    pub async fn init(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Picks the stored name for an upload without touching the filesystem.
    ///
    /// Only the final path component of `original_name` is kept, so a client cannot
    /// place files outside the storage directory.
    pub fn reserve(&self, original_name: &str) -> StoredFileName {
        let code = generate_file_code();
        let file_name = format!("{}-{}", code, sanitize_file_name(original_name));

        StoredFileName { code, file_name }
    }

    /// Writes the upload under its reserved name.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bytes written
    /// - `Err(io::Error)` - Directory could not be created or file could not be written
    pub async fn save(&self, reserved: &StoredFileName, bytes: &[u8]) -> std::io::Result<u64> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&reserved.file_name), bytes).await?;

        tracing::debug!("Stored upload {} ({} bytes)", reserved.file_name, bytes.len());

        Ok(bytes.len() as u64)
    }

    /// Finds the stored file whose name starts with `file_code`.
    ///
    /// When several files match, the lexicographically smallest name wins.
    ///
    /// # Returns
    /// - `Ok(Some(PathBuf))` - Path of the matching file
    /// - `Ok(None)` - No match, the code is empty or contains path components
    /// - `Err(io::Error)` - Storage directory could not be read
    pub async fn find(&self, file_code: &str) -> std::io::Result<Option<PathBuf>> {
        if file_code.is_empty()
            || file_code.contains('/')
            || file_code.contains('\\')
            || file_code.contains("..")
        {
            return Ok(None);
        }

        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let mut found: Option<String> = None;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(file_code) && found.as_ref().is_none_or(|f| name < *f) {
                found = Some(name);
            }
        }

        Ok(found.map(|name| self.root.join(name)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Final path component of an uploaded file name, `"file"` when nothing is left.
fn sanitize_file_name(original_name: &str) -> String {
    let name = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        "file".to_string()
    } else {
        name.to_string()
    }
}

/// Generates a random alphanumeric file code.
fn generate_file_code() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..FILE_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
