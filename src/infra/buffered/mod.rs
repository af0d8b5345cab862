//! Bounded read buffer sitting in front of a `ByteSource`, so the reader
//! can resynchronize on the preamble byte and peek ahead for a full frame
//! without re-reading the underlying socket one byte at a time
//! (spec.md §5: streams may deliver partial frames).
use crate::error::SpartnError;
use crate::infra::codec::traits::ByteSource;

/// Default capacity, matching the `bufsize` builder default (spec.md §6.1).
pub const DEFAULT_CAPACITY: usize = 4096;

/// A growable byte queue fed from a `ByteSource`, from which the reader
/// consumes exactly the bytes a frame needs and leaves the rest buffered
/// for the next call.
pub struct ReadBuffer<S: ByteSource> {
    source: S,
    buf: Vec<u8>,
    capacity: usize,
}

impl<S: ByteSource> ReadBuffer<S> {
    pub fn new(source: S) -> Self {
        Self::with_capacity(source, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(source: S, capacity: usize) -> Self {
        Self { source, buf: Vec::with_capacity(capacity), capacity }
    }

    /// Number of bytes currently buffered and unconsumed.
    pub fn available(&self) -> usize {
        self.buf.len()
    }

    /// Returns a view of the buffered bytes without consuming them.
    pub fn peek(&self) -> &[u8] {
        &self.buf
    }

    /// Pulls more bytes from the underlying source into the buffer,
    /// capped at `capacity`. Returns the number of bytes appended; `0`
    /// means the source is exhausted.
    pub fn fill(&mut self) -> Result<usize, SpartnError> {
        let room = self.capacity.saturating_sub(self.buf.len());
        if room == 0 {
            return Ok(0);
        }
        let start = self.buf.len();
        self.buf.resize(start + room, 0);
        let read = self.source.pull(&mut self.buf[start..])?;
        self.buf.truncate(start + read);
        Ok(read)
    }

    /// Drops the first `n` buffered bytes after they have been consumed by
    /// the caller.
    pub fn consume(&mut self, n: usize) {
        self.buf.drain(0..n.min(self.buf.len()));
    }

    /// Discards buffered bytes up to and including the first occurrence of
    /// `marker`, used to resynchronize on the preamble after a CRC
    /// failure or unknown protocol byte (spec.md §7, `quitonerror = false`).
    pub fn resync_to(&mut self, marker: u8) -> bool {
        if let Some(pos) = self.buf.iter().position(|&b| b == marker) {
            self.buf.drain(0..pos);
            true
        } else {
            self.buf.clear();
            false
        }
    }
}
