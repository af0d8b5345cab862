//! Parses the SPARTN transport header: the generic `frameStart` fields
//! common to every message, followed by the payload-description fields
//! that vary with `timeTagtype` and the encryption-and-authentication
//! flag (spec.md §4.1 / §4.3).
use crate::error::SpartnError;
use crate::infra::codec::bits::BitCursor;

/// Preamble byte that opens every SPARTN frame (spec.md §4.1).
pub const PREAMBLE: u8 = 0x73;

/// Encryption/authentication fields present only when `eaf == true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptionFields {
    pub encryption_id: u8,
    pub encryption_seq: u8,
    pub auth_ind: u8,
    /// Raw 3-bit `embAuthLen` code; use `emb_auth_byte_len` for the decoded
    /// byte count of the embedded authentication block.
    pub emb_auth_len: u8,
}

/// Decodes the `embAuthLen` code into the number of bytes the embedded
/// authentication block occupies (spec.md §4.3 table; 0 when `auth_ind`
/// indicates no embedded block is present, i.e. `auth_ind <= 1`).
pub fn emb_auth_byte_len(code: u8) -> usize {
    match code {
        0 => 8,
        1 => 12,
        2 => 16,
        3 => 32,
        4 => 64,
        _ => 0,
    }
}

/// Parsed `frameStart` + `payDesc` fields: everything needed to know how
/// many payload bytes follow and how to decrypt/verify them, but not the
/// payload itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    pub msg_type: u8,
    pub n_data: u16,
    pub eaf: bool,
    pub crc_type: u8,
    /// 4-bit header checksum closing out `framestart`'s 24 bits (spec.md
    /// §3.1). The original reader reads and discards it
    /// (`spartnreader.py`'s `frameCrc` line is commented out); kept here
    /// only so the bitstream stays aligned going into `payDesc`.
    pub frame_crc: u8,
    pub msg_subtype: u8,
    pub time_tag_type: u8,
    pub gnss_time_tag: u32,
    pub solution_id: u8,
    pub solution_proc_id: u8,
    pub encryption: Option<EncryptionFields>,
}

impl FrameHeader {
    /// Parses the header fields from the bitstream that follows the
    /// preamble byte (not included in `cursor`). Leaves the cursor
    /// positioned at the first payload bit.
    pub fn parse(cursor: &mut BitCursor<'_>) -> Result<Self, SpartnError> {
        let msg_type = cursor.read_u32(7)? as u8;
        let n_data = cursor.read_u32(10)? as u16;
        let eaf = cursor.read_u32(1)? != 0;
        let crc_type = cursor.read_u32(2)? as u8;
        let frame_crc = cursor.read_u32(4)? as u8;
        let msg_subtype = cursor.read_u32(4)? as u8;
        let time_tag_type = cursor.read_u32(1)? as u8;
        let gnss_time_tag = if time_tag_type == 0 {
            cursor.read_u32(16)?
        } else {
            cursor.read_u32(32)?
        };
        let solution_id = cursor.read_u32(7)? as u8;
        let solution_proc_id = cursor.read_u32(4)? as u8;

        let encryption = if eaf {
            let encryption_id = cursor.read_u32(4)? as u8;
            let encryption_seq = cursor.read_u32(6)? as u8;
            let auth_ind = cursor.read_u32(3)? as u8;
            let emb_auth_len = cursor.read_u32(3)? as u8;
            Some(EncryptionFields {
                encryption_id,
                encryption_seq,
                auth_ind,
                emb_auth_len,
            })
        } else {
            None
        };

        Ok(Self {
            msg_type,
            n_data,
            eaf,
            crc_type,
            frame_crc,
            msg_subtype,
            time_tag_type,
            gnss_time_tag,
            solution_id,
            solution_proc_id,
            encryption,
        })
    }

    /// Bytes occupied by the embedded authentication block, if any.
    /// `auth_ind` values 0 and 1 both mean no embedded block is present
    /// (spec.md §4.3; confirmed against the original reader's
    /// `if authInd > 1` gate) — only `auth_ind > 1` carries one.
    pub fn emb_auth_len_bytes(&self) -> usize {
        match self.encryption {
            Some(enc) if enc.auth_ind > 1 => emb_auth_byte_len(enc.emb_auth_len),
            _ => 0,
        }
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod header_tests;
