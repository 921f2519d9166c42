//! # Receipt Store
//!
//! Filesystem-backed storage for uploaded receipt files.
//!
//! ## Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Receipt Store                                     │
//! │                                                                         │
//! │  uploads/                        ← fixed root, flat (non-recursive)    │
//! │  ├── invoice-march.pdf           ← one Receipt per file                │
//! │  ├── receipt-001.png                name        = filename             │
//! │  └── note.txt                       upload date = file mtime           │
//! │                                                                         │
//! │  save(name, bytes)  → overwrite; same name = last write wins           │
//! │  open(name)         → sniffed content type + exact length + rewound    │
//! │                       file handle for streaming                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name Hardening
//! The caller-supplied filename is used verbatim as the on-disk name, so it
//! MUST be a single path component: separators, `..`, `.`, empty names and
//! NUL bytes are rejected before any filesystem call. Interrupted writes
//! can leave a truncated file behind; there is no cleanup pass.

pub mod sniff;

use std::io::SeekFrom;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tracing::debug;

use stockroom_core::Receipt;

pub use sniff::detect_content_type;

/// Receipt storage errors.
#[derive(Debug, Error)]
pub enum ReceiptStoreError {
    /// The supplied name is not a plain filename.
    #[error("invalid receipt name: {0}")]
    InvalidName(String),

    /// No file with that name exists in the upload root.
    #[error("receipt not found: {0}")]
    NotFound(String),

    /// Underlying filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// An opened receipt, ready for full-body transfer.
#[derive(Debug)]
pub struct ReceiptFile {
    /// File handle, rewound to offset 0.
    pub file: tokio::fs::File,

    /// Content type sniffed from the file head.
    pub content_type: &'static str,

    /// Exact file length in bytes, for `Content-Length`.
    pub len: u64,
}

/// Filesystem-backed receipt store rooted at a fixed upload directory.
///
/// Stateless façade: all persistent state is the directory itself, so the
/// handle clones freely into application state.
#[derive(Debug, Clone)]
pub struct ReceiptStore {
    root: PathBuf,
}

impl ReceiptStore {
    /// Creates a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(ReceiptStore { root })
    }

    /// Returns the upload root.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Lists all receipts in the upload root, sorted by name.
    ///
    /// Non-recursive; subdirectories are skipped. Sorting is an added
    /// guarantee over raw directory order, which is filesystem-dependent.
    pub async fn list(&self) -> Result<Vec<Receipt>, ReceiptStoreError> {
        let mut receipts = Vec::new();

        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            let modified = metadata.modified()?;
            receipts.push(Receipt {
                name: entry.file_name().to_string_lossy().into_owned(),
                upload_date: DateTime::<Utc>::from(modified),
            });
        }

        receipts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(receipts)
    }

    /// Writes a receipt under the caller-supplied name, overwriting any
    /// existing file with that name.
    pub async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), ReceiptStoreError> {
        validate_name(name)?;

        debug!(name, size = bytes.len(), "Saving receipt");
        tokio::fs::write(self.root.join(name), bytes).await?;
        Ok(())
    }

    /// Opens a receipt for download.
    ///
    /// The content type is sniffed from the first 512 bytes and the handle
    /// is rewound to offset 0 before being returned. An invalid name cannot
    /// exist in the root, so it reports the same way as a missing file.
    pub async fn open(&self, name: &str) -> Result<ReceiptFile, ReceiptStoreError> {
        if validate_name(name).is_err() {
            return Err(ReceiptStoreError::NotFound(name.to_string()));
        }

        let path = self.root.join(name);
        let mut file = match tokio::fs::File::open(&path).await {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ReceiptStoreError::NotFound(name.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        let len = file.metadata().await?.len();

        // Sniff from the head, then rewind for the full-body transfer
        let mut head = [0u8; sniff::SNIFF_LEN];
        let mut filled = 0;
        loop {
            let n = file.read(&mut head[filled..]).await?;
            if n == 0 {
                break;
            }
            filled += n;
            if filled == head.len() {
                break;
            }
        }
        let content_type = detect_content_type(&head[..filled]);
        file.seek(SeekFrom::Start(0)).await?;

        debug!(name, len, content_type, "Opened receipt");
        Ok(ReceiptFile {
            file,
            content_type,
            len,
        })
    }
}

/// A valid receipt name is exactly one normal path component.
fn validate_name(name: &str) -> Result<(), ReceiptStoreError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');

    if invalid {
        return Err(ReceiptStoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> (ReceiptStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = ReceiptStore::new(dir.path()).unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn test_save_then_open_roundtrip() {
        let (store, _dir) = test_store().await;
        let pdf = b"%PDF-1.4\nreceipt body";

        store.save("x.pdf", pdf).await.unwrap();
        let mut opened = store.open("x.pdf").await.unwrap();

        assert_eq!(opened.content_type, "application/pdf");
        assert_eq!(opened.len, pdf.len() as u64);

        // Handle is rewound: reading yields the whole file
        let mut contents = Vec::new();
        opened.file.read_to_end(&mut contents).await.unwrap();
        assert_eq!(contents, pdf);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let (store, _dir) = test_store().await;

        store.save("note.txt", b"first").await.unwrap();
        store.save("note.txt", b"second").await.unwrap();

        let opened = store.open("note.txt").await.unwrap();
        assert_eq!(opened.len, 6);
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_name() {
        let (store, _dir) = test_store().await;
        store.save("b.txt", b"b").await.unwrap();
        store.save("a.txt", b"a").await.unwrap();
        store.save("c.txt", b"c").await.unwrap();

        let receipts = store.list().await.unwrap();
        let names: Vec<&str> = receipts.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[tokio::test]
    async fn test_list_empty_root() {
        let (store, _dir) = test_store().await;
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_rejects_traversal_names() {
        let (store, _dir) = test_store().await;

        for name in ["../escape.txt", "a/b.txt", "..", ".", "", "a\\b", "nul\0name"] {
            let err = store.save(name, b"data").await.unwrap_err();
            assert!(
                matches!(err, ReceiptStoreError::InvalidName(_)),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[tokio::test]
    async fn test_open_invalid_name_reports_not_found() {
        let (store, _dir) = test_store().await;
        let err = store.open("../../etc/passwd").await.unwrap_err();
        assert!(matches!(err, ReceiptStoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_open_missing_file_reports_not_found() {
        let (store, _dir) = test_store().await;
        let err = store.open("nope.pdf").await.unwrap_err();
        assert!(matches!(err, ReceiptStoreError::NotFound(_)));
    }
}
