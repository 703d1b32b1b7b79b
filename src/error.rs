use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for container decoding and index operations.
///
/// Variants split along the propagation policy: `InvalidFormat` and
/// `MalformedHeader` are fatal for the file that produced them,
/// `CorruptData` is fatal for a single sub-container, and
/// `MissingDependency`/`IndexUnavailable` are skip-and-continue conditions
/// that batch operations log rather than raise.
#[derive(Debug, Error)]
pub enum Error {
    /// A magic value did not match the expected container signature.
    #[error("bad magic at 0x{offset:x}: expected {expected:?}, got {actual:?}")]
    InvalidFormat {
        offset: u64,
        expected: [u8; 4],
        actual: [u8; 4],
    },

    /// A size or key field in a container header is out of range.
    #[error("malformed header at 0x{offset:x}: {reason}")]
    MalformedHeader { offset: u64, reason: String },

    /// LZ4 output did not match the size declared by the container.
    #[error("corrupt data at 0x{offset:x}: wrote {actual} bytes, expected {expected}")]
    CorruptData {
        offset: u64,
        expected: usize,
        actual: usize,
    },

    /// A referenced name could not be found in the index or on disk.
    #[error("missing dependency: {0}")]
    MissingDependency(String),

    /// The persisted index is absent or unreadable; a rebuild is required.
    #[error("index unavailable: {path}")]
    IndexUnavailable { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(offset: u64, reason: impl Into<String>) -> Self {
        Error::MalformedHeader {
            offset,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
