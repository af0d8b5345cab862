//! Error taxonomy shared across the crate (spec.md §7). Each variant models
//! one failure scenario; the reader's `quitonerror` policy decides whether
//! a `SpartnError` is raised, logged, or swallowed.
use thiserror::Error;

/// Errors raised while reading bits from a byte buffer (spec.md §4.1).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BitCursorError {
    /// Attempted to read past the end of the buffer.
    #[error("bit read out of bounds: asked {asked} bits, {available} available")]
    OutOfBounds { asked: usize, available: usize },
    /// Requested more bits than the target type can hold.
    #[error("cannot read more than {max} bits at once, requested {asked}")]
    TooLongForType { max: u8, asked: u8 },
    /// A byte-slice read was attempted while the cursor sits mid-byte.
    #[error("non byte-aligned cursor at bit {cursor}")]
    NonAligned { cursor: usize },
}

/// Top-level error taxonomy (spec.md §7).
#[derive(Debug, Error)]
pub enum SpartnError {
    /// First byte of a would-be frame was not the SPARTN preamble `0x73`.
    #[error("unknown protocol byte 0x{byte:02x}")]
    UnknownProtocol { byte: u8 },

    /// End of stream reached mid-frame.
    #[error("truncated frame: expected {expected} more bytes, stream ended")]
    TruncatedFrame { expected: usize },

    /// CRC computed over the frame did not match the trailing CRC bytes.
    #[error("invalid CRC: computed 0x{computed:x}, frame carried 0x{expected:x}")]
    InvalidCrc { computed: u32, expected: u32 },

    /// Payload interpreter could not reconcile the schema with the decoded
    /// payload (residual bits, missing predicate field, unknown message
    /// identity, unsupported count-source).
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Decryption could not proceed: missing key, or a key of the wrong
    /// length supplied by the caller.
    #[error("decryption failure: {0}")]
    DecryptionFailure(String),

    /// Invalid construction arguments (e.g. decryption requested with no key).
    #[error("invalid parameter: {0}")]
    ParameterError(String),

    /// Bit-cursor failure surfaced without being reclassified by the caller.
    #[error(transparent)]
    BitCursor(#[from] BitCursorError),

    /// Underlying I/O failure from the byte source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
