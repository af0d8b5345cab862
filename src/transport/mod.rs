//! Frame-level transport: header parsing, CRC/decrypt assembly into a
//! `RawFrame`, and the buffered `SpartnReader` state machine built on top
//! of it.
pub mod frame;
pub mod header;
pub mod reader;

pub use frame::RawFrame;
pub use header::FrameHeader;
pub use reader::{SpartnReader, SpartnReaderBuilder};
