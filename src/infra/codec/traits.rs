//! Abstraction over the byte sources a reader can be built on: a `Vec<u8>`
//! held in memory, a file, or a socket. Mirrors the way the teacher's
//! codec layer is kept independent of any particular transport.
use std::io::Read;

use crate::error::SpartnError;

/// A source of SPARTN bytes. Implemented for anything that is `Read`, via
/// the blanket impl below, so callers can hand a `SpartnReader` a file,
/// a TCP stream, or an in-memory cursor interchangeably.
pub trait ByteSource {
    /// Pulls up to `buf.len()` bytes, returning how many were read. `Ok(0)`
    /// signals end of stream.
    fn pull(&mut self, buf: &mut [u8]) -> Result<usize, SpartnError>;
}

impl<R: Read> ByteSource for R {
    fn pull(&mut self, buf: &mut [u8]) -> Result<usize, SpartnError> {
        self.read(buf).map_err(SpartnError::Io)
    }
}
