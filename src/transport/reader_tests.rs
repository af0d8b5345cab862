use super::*;
use crate::infra::codec::crc::{compute, CrcKind};
use std::io::Cursor;

fn pack_bits(bits: &[(u32, u8)]) -> Vec<u8> {
    let total_bits: usize = bits.iter().map(|(_, w)| *w as usize).sum();
    let mut out = vec![0u8; (total_bits + 7) / 8];
    let mut pos = 0usize;
    for &(value, width) in bits {
        for i in (0..width).rev() {
            let bit = (value >> i) & 1;
            if bit != 0 {
                out[pos / 8] |= 1 << (7 - pos % 8);
            }
            pos += 1;
        }
    }
    out
}

/// A minimal GAD frame: one area, no encryption, CRC-8.
fn build_gad_frame() -> Vec<u8> {
    let payload = pack_bits(&[
        (1, 5),    // Siou
        (2, 5),    // Aiou
        (0, 1),    // Reserved
        (1, 5),    // AreaCount = 1
        (42, 8),   // AreaId
        (100, 15), // AreaRefLat
        (200, 16), // AreaRefLon
        (3, 5),    // LatGridCount
        (4, 5),    // LonGridCount
        (2, 5),    // LatGridSpacing
        (3, 5),    // LonGridSpacing
    ]);
    let header = pack_bits(&[
        (2, 7),                     // msgType = GAD
        (payload.len() as u32, 10), // nData
        (0, 1),                     // eaf
        (0, 2),                     // crcType = CRC-8
        (0, 4),                     // frameCrc (unused)
        (0, 4),                     // msgSubtype
        (0, 1),                     // timeTagtype
        (0, 16),                    // gnssTimeTag
        (0, 7),                     // solutionId
        (0, 4),                     // solutionProcId
    ]);
    assert_eq!(header.len(), 7);
    assert_eq!(payload.len(), 10);

    let mut body = header;
    body.extend_from_slice(&payload);
    let crc = compute(CrcKind::Crc8, &body);

    let mut frame = vec![PREAMBLE];
    frame.extend_from_slice(&body);
    frame.push(crc as u8);
    frame
}

#[test]
fn reads_and_interprets_a_gad_frame() {
    let bytes = build_gad_frame();
    let mut reader = SpartnReaderBuilder::new(Cursor::new(bytes)).build().unwrap();

    let (frame, record) = reader.parse().unwrap().expect("one frame");
    assert_eq!(frame.msg_type(), 2);
    assert!(!frame.was_decrypted());

    let record = record.expect("GAD has a registered schema");
    assert_eq!(record.get("AreaCount"), Some(&crate::core::Value::Unsigned(1)));
    assert_eq!(record.get("Area_01_AreaId"), Some(&crate::core::Value::Unsigned(42)));

    assert!(reader.read().unwrap().is_none());
}

#[test]
fn resyncs_past_leading_garbage() {
    let mut bytes = vec![0xDE, 0xAD, 0xBE, 0xEF];
    bytes.extend(build_gad_frame());
    let mut reader = SpartnReaderBuilder::new(Cursor::new(bytes)).build().unwrap();

    let frame = reader.read().unwrap().expect("frame found after garbage");
    assert_eq!(frame.msg_type(), 2);
}

#[test]
fn invalid_crc_errors_when_quitonerror_is_true() {
    let mut bytes = build_gad_frame();
    *bytes.last_mut().unwrap() ^= 0xFF;
    let mut reader = SpartnReaderBuilder::new(Cursor::new(bytes)).quitonerror(true).build().unwrap();

    assert!(matches!(reader.read(), Err(SpartnError::InvalidCrc { .. })));
}

#[test]
fn invalid_crc_resyncs_to_next_frame_when_quitonerror_is_false() {
    let mut corrupt = build_gad_frame();
    *corrupt.last_mut().unwrap() ^= 0xFF;
    let mut bytes = corrupt;
    bytes.extend(build_gad_frame());

    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let mut reader = SpartnReaderBuilder::new(Cursor::new(bytes))
        .quitonerror(false)
        .error_handler(move |err| seen_clone.lock().unwrap().push(err.to_string()))
        .build()
        .unwrap();

    let frame = reader.read().unwrap().expect("second frame recovered");
    assert_eq!(frame.msg_type(), 2);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn scaling_disabled_returns_raw_integers() {
    let bytes = build_gad_frame();
    let mut reader = SpartnReaderBuilder::new(Cursor::new(bytes)).scaling(false).build().unwrap();
    let (_, record) = reader.parse().unwrap().expect("one frame");
    let record = record.unwrap();
    // AreaRefLat has a resolution in the schema; with scaling disabled its
    // raw integer comes back as `Signed`, not `Rational`.
    assert!(matches!(record.get("Area_01_AreaRefLat"), Some(crate::core::Value::Signed(_))));
}

#[test]
fn explicit_key_takes_precedence_over_mqttkey_env() {
    std::env::set_var("MQTTKEY", "11".repeat(16));
    let bytes = build_gad_frame();
    let explicit = "22".repeat(16);
    let reader = SpartnReaderBuilder::new(Cursor::new(bytes)).key(&explicit).unwrap().build().unwrap();
    assert!(reader.key.as_ref().is_some());
    std::env::remove_var("MQTTKEY");
}

#[test]
fn decrypt_without_key_is_a_parameter_error_at_construction() {
    // spec.md §4.4: a reader configured to decrypt with no resolvable key
    // (explicit or MQTTKEY) is rejected by `build()` itself, matching the
    // original reader's `__init__`-time check rather than deferring the
    // failure to the first encrypted frame.
    let source: Cursor<Vec<u8>> = Cursor::new(Vec::new());
    let result = SpartnReaderBuilder::new(source).decrypt(true).build();
    assert!(matches!(result, Err(SpartnError::ParameterError(_))));
}
