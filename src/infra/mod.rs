//! Infrastructure layer: wire-level codecs and the buffered-read plumbing
//! that sits between a transport and the frame/schema layers above it.
pub mod buffered;
pub mod codec;
