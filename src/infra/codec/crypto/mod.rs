//! AES-128 counter-mode decryption of the SPARTN payload + embedded-auth
//! block (spec.md §4.4). The initial counter is assembled from transport
//! header fields rather than transmitted, per the SPARTN specification.
use aes::Aes128;
use ctr::cipher::{KeyIvInit, StreamCipher};

use crate::error::SpartnError;
use crate::transport::header::FrameHeader;

type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// 128-bit AES session key, parsed from the caller-supplied hex string
/// (spec.md §6.1: `key` is a 32-character hex string).
#[derive(Clone)]
pub struct SessionKey([u8; 16]);

impl SessionKey {
    /// Parses a 32-character hex string into a 128-bit key.
    pub fn from_hex(hex_str: &str) -> Result<Self, SpartnError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| SpartnError::DecryptionFailure(format!("invalid hex key: {e}")))?;
        let arr: [u8; 16] = bytes.try_into().map_err(|b: Vec<u8>| {
            SpartnError::DecryptionFailure(format!(
                "key must decode to 16 bytes, got {}",
                b.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

/// Builds the 128-bit initial counter block from the header fields the
/// SPARTN specification mandates: `msgType`, `nData`, `msgSubtype`,
/// `timeTagtype`, `gnssTimeTag` (sign-extended to 32 bits when
/// `timeTagtype == 0`), `encryptionId`, and `encryptionSeq`, left-packed
/// and zero-padded to 128 bits.
fn build_counter(header: &FrameHeader) -> [u8; 16] {
    let mut counter = [0u8; 16];
    let mut cur = BitPacker::new(&mut counter);

    cur.push(header.msg_type as u32, 7);
    cur.push(header.n_data as u32, 10);
    cur.push(header.msg_subtype as u32, 4);
    cur.push(header.time_tag_type as u32, 1);

    // spec.md §4.4: 16-bit time tags are sign-extended to the 32-bit path
    // so the counter layout matches regardless of time-tag width.
    let gnss_time_tag: u32 = if header.time_tag_type == 0 {
        header.gnss_time_tag as i16 as i32 as u32
    } else {
        header.gnss_time_tag
    };
    cur.push(gnss_time_tag, 32);

    let enc = header.encryption.as_ref().expect("counter built only when eaf=1");
    cur.push(enc.encryption_id as u32, 4);
    cur.push(enc.encryption_seq as u32, 6);

    counter
}

/// Bit-packs values MSB-first into a fixed byte buffer; the mirror image of
/// `BitCursor` used when constructing (rather than reading) a bitstream.
struct BitPacker<'a> {
    buffer: &'a mut [u8],
    bit_pos: usize,
}

impl<'a> BitPacker<'a> {
    fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, bit_pos: 0 }
    }

    fn push(&mut self, value: u32, width: u8) {
        for i in (0..width).rev() {
            let bit = (value >> i) & 1;
            let byte_index = self.bit_pos / 8;
            let bit_in_byte = self.bit_pos % 8;
            if bit != 0 {
                self.buffer[byte_index] |= 1 << (7 - bit_in_byte);
            }
            self.bit_pos += 1;
        }
    }
}

/// Decrypts `payload_and_auth` (the payload bytes followed by the embedded
/// auth bytes, treated as one contiguous AES-CTR keystream target) in
/// place and returns the decrypted buffer.
pub fn decrypt(
    header: &FrameHeader,
    payload_and_auth: &[u8],
    key: &SessionKey,
) -> Result<Vec<u8>, SpartnError> {
    let counter = build_counter(header);
    let mut cipher = Aes128Ctr::new((&key.0).into(), (&counter).into());
    let mut buf = payload_and_auth.to_vec();
    cipher.apply_keystream(&mut buf);
    Ok(buf)
}
