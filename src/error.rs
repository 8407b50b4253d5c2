//! Error types for `actfile`

use thiserror::Error;

/// The error type for `actfile` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== ACT Format Errors ====================
    /// The data is not a valid ACT file (missing "AC" magic).
    #[error("invalid ACT magic: expected AC, found {0:?}")]
    InvalidActMagic([u8; 2]),

    /// The ACT version is not supported.
    #[error("unsupported ACT version: {version:#06x} (supported: 0x200-0x205)")]
    UnsupportedActVersion {
        /// The version word found in the file header.
        version: u16,
    },

    /// Decoding the versioned body failed, usually a truncated buffer.
    ///
    /// Carries the version detected in the header so malformed files can be
    /// diagnosed, plus the underlying read error.
    #[error("ACT decode failed (version {version:#06x}): {source}")]
    ActDecodeFailed {
        /// The version word from the file header.
        version: u16,
        /// The low-level read error (typically unexpected EOF).
        #[source]
        source: std::io::Error,
    },

    // ==================== Event Registry Errors ====================
    /// An event name exceeds the fixed 40-byte on-disk slot.
    #[error("event name too long: {len} bytes (maximum 40)")]
    EventNameTooLong {
        /// Byte length of the rejected name.
        len: usize,
    },

    /// The addressed frame does not exist in the animation.
    #[error("frame not found: action {action}, frame {frame}")]
    FrameNotFound {
        /// Index of the action.
        action: usize,
        /// Index of the frame within the action.
        frame: usize,
    },
}

/// A specialized Result type for `actfile` operations.
pub type Result<T> = std::result::Result<T, Error>;
