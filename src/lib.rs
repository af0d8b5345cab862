//! `spartn-rs`: transport framing and payload decoding for SPARTN
//! (Secure Position Augmentation for Real-Time Navigation) GNSS
//! correction streams.
//!
//! A [`transport::SpartnReader`] pulls frames off any `std::io::Read`
//! source, validates their CRC, optionally decrypts AES-CTR-protected
//! payloads, and hands the result to [`interpreter::decode`] against the
//! declarative schemas in [`schema`] to produce a flat [`core::Record`].

/// Decoded value and record types shared across the codec, schema, and
/// interpreter layers.
pub mod core;
/// Error types for bit-level decoding and frame-level protocol handling.
pub mod error;
/// Bit cursor, CRC, AES-CTR decryption, and the buffered byte-source
/// plumbing the transport layer is built on.
pub mod infra;
/// Recursive-descent interpreter that walks a schema tree against a
/// payload bitstream.
pub mod interpreter;
/// Declarative per-message-family schema trees (OCB, HPAC, GAD, and the
/// still-placeholder BPAC/EAS families).
pub mod schema;
/// Frame header parsing and the stateful `SpartnReader`.
pub mod transport;

pub use core::{FieldAttr, Record, Value};
pub use error::SpartnError;
pub use transport::{RawFrame, SpartnReader, SpartnReaderBuilder};
