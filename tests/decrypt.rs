//! End-to-end AES-CTR decryption through the public reader API: an
//! encrypted frame decrypts to the expected plaintext bytes when given
//! the right key (explicitly or via `MQTTKEY`), and a wrong key produces
//! garbage rather than an error (SPARTN has no built-in key-check field).
use spartn_rs::infra::codec::crc::{compute, CrcKind};
use spartn_rs::infra::codec::crypto::{decrypt, SessionKey};
use spartn_rs::transport::header::{EncryptionFields, FrameHeader, PREAMBLE};
use spartn_rs::SpartnReaderBuilder;
use std::io::Cursor;
use std::sync::Mutex;

fn pack_bits(bits: &[(u32, u8)]) -> Vec<u8> {
    let total_bits: usize = bits.iter().map(|(_, w)| *w as usize).sum();
    let mut out = vec![0u8; (total_bits + 7) / 8];
    let mut pos = 0usize;
    for &(value, width) in bits {
        for i in (0..width).rev() {
            if (value >> i) & 1 != 0 {
                out[pos / 8] |= 1 << (7 - pos % 8);
            }
            pos += 1;
        }
    }
    out
}

/// Serializes tests that touch the `MQTTKEY` process environment variable.
static ENV_LOCK: Mutex<()> = Mutex::new(());

struct EncryptedGadFrame {
    bytes: Vec<u8>,
    plaintext: Vec<u8>,
    auth_plain: Vec<u8>,
}

fn build_encrypted_gad_frame(key: &SessionKey) -> EncryptedGadFrame {
    let plaintext = pack_bits(&[
        (1, 5),   // Siou
        (2, 5),   // Aiou
        (0, 1),   // Reserved
        (1, 5),   // AreaCount
        (7, 8),   // AreaId
        (50, 15), // AreaRefLat
        (75, 16), // AreaRefLon
        (1, 5),   // LatGridCount
        (2, 5),   // LonGridCount
        (1, 5),   // LatGridSpacing
        (2, 5),   // LonGridSpacing
    ]);

    let header_fields = [
        (2u32, 7), // msgType = GAD
        (plaintext.len() as u32, 10),
        (1, 1), // eaf = true
        (2, 2), // crcType = CRC-24Q
        (0, 4), // frameCrc (unused)
        (0, 4),
        (0, 1),
        (0, 16),
        (0, 7),
        (0, 4),
        (3, 4), // encryptionId
        (1, 6), // encryptionSeq
        (2, 3), // authInd > 1 -> embedded auth present
        (0, 3), // embAuthLen code = 0 -> 8 bytes
    ];
    let header_bytes = pack_bits(&header_fields);

    let header = FrameHeader {
        msg_type: 2,
        n_data: plaintext.len() as u16,
        eaf: true,
        crc_type: 2,
        frame_crc: 0,
        msg_subtype: 0,
        time_tag_type: 0,
        gnss_time_tag: 0,
        solution_id: 0,
        solution_proc_id: 0,
        encryption: Some(EncryptionFields {
            encryption_id: 3,
            encryption_seq: 1,
            auth_ind: 2,
            emb_auth_len: 0,
        }),
    };

    let auth_plain = vec![0u8; 8];
    let mut combined_plain = plaintext.clone();
    combined_plain.extend_from_slice(&auth_plain);
    let combined_cipher = decrypt(&header, &combined_plain, key).unwrap();

    let mut body = header_bytes;
    body.extend_from_slice(&combined_cipher);
    let crc = compute(CrcKind::Crc24Q, &body);

    let mut bytes = vec![PREAMBLE];
    bytes.extend_from_slice(&body);
    bytes.push(((crc >> 16) & 0xFF) as u8);
    bytes.push(((crc >> 8) & 0xFF) as u8);
    bytes.push((crc & 0xFF) as u8);

    EncryptedGadFrame { bytes, plaintext, auth_plain }
}

#[test]
fn decrypts_an_encrypted_gad_frame_end_to_end() {
    let key_hex = "000102030405060708090a0b0c0d0e0f";
    let key = SessionKey::from_hex(key_hex).unwrap();
    let frame = build_encrypted_gad_frame(&key);

    let mut reader = SpartnReaderBuilder::new(Cursor::new(frame.bytes))
        .decrypt(true)
        .key(key_hex)
        .unwrap()
        .build()
        .unwrap();

    let (decoded_frame, record) = reader.parse().unwrap().expect("one frame");
    assert!(decoded_frame.was_decrypted());
    assert_eq!(decoded_frame.payload, frame.plaintext);
    assert_eq!(decoded_frame.emb_auth, frame.auth_plain);

    let record = record.unwrap();
    assert_eq!(record.get("Area_01_AreaId"), Some(&spartn_rs::Value::Unsigned(7)));
}

#[test]
fn falls_back_to_mqttkey_env_var_when_no_explicit_key_given() {
    let _guard = ENV_LOCK.lock().unwrap();
    let key_hex = "aabbccddeeff00112233445566778899";
    let key = SessionKey::from_hex(key_hex).unwrap();
    let frame = build_encrypted_gad_frame(&key);

    std::env::set_var("MQTTKEY", key_hex);
    let mut reader = SpartnReaderBuilder::new(Cursor::new(frame.bytes)).decrypt(true).build().unwrap();
    std::env::remove_var("MQTTKEY");

    let (decoded_frame, _) = reader.parse().unwrap().expect("one frame");
    assert_eq!(decoded_frame.payload, frame.plaintext);
}

#[test]
fn wrong_key_decrypts_to_different_bytes_without_erroring() {
    let real_key = SessionKey::from_hex("11112222333344445555666677778888").unwrap();
    let frame = build_encrypted_gad_frame(&real_key);

    let mut reader = SpartnReaderBuilder::new(Cursor::new(frame.bytes))
        .decrypt(true)
        .key("99998888777766665555444433332222")
        .unwrap()
        .build()
        .unwrap();

    let (decoded_frame, _) = reader.parse().unwrap().expect("one frame");
    assert_ne!(decoded_frame.payload, frame.plaintext);
}
