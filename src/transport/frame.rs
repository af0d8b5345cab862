//! A fully decoded, CRC-verified, and (if applicable) decrypted SPARTN
//! frame, ready for the payload interpreter (spec.md §4).
use crate::transport::header::FrameHeader;

/// One complete SPARTN frame as it comes off the wire, prior to schema
/// interpretation.
#[derive(Debug, Clone)]
pub struct RawFrame {
    pub header: FrameHeader,
    /// Payload bytes, decrypted in place when the frame carried `eaf = 1`
    /// and a session key was supplied.
    pub payload: Vec<u8>,
    /// Embedded authentication block, if any, also decrypted in place.
    pub emb_auth: Vec<u8>,
    /// Value the frame CRC field carried, for callers that want to
    /// double-check or log it.
    pub frame_crc: u32,
    /// The complete wire bytes of this frame, preamble through the
    /// trailing CRC, exactly as the stream carried them (spec.md §6.2's
    /// `raw_bytes`) — concatenating the `raw_bytes` of consecutive frames
    /// reproduces the original byte stream (property P1).
    pub raw_bytes: Vec<u8>,
}

impl RawFrame {
    pub fn msg_type(&self) -> u8 {
        self.header.msg_type
    }

    pub fn msg_subtype(&self) -> u8 {
        self.header.msg_subtype
    }

    pub fn was_decrypted(&self) -> bool {
        self.header.eaf
    }
}
