//! Builds a single GAD (Geographic Area Definition) frame in memory and
//! reads it back through `SpartnReader`, the way a caller would read a
//! live NTRIP/SPARTN stream.
use spartn_rs::infra::codec::crc::{compute, CrcKind};
use spartn_rs::transport::header::PREAMBLE;
use spartn_rs::SpartnReaderBuilder;
use std::io::Cursor;

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

fn build_demo_frame() -> Vec<u8> {
    let payload = pack_bits(&[
        (1, 5),    // Siou
        (2, 5),    // Aiou
        (0, 1),    // Reserved
        (1, 5),    // AreaCount
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

    let mut body = header;
    body.extend_from_slice(&payload);
    let crc = compute(CrcKind::Crc8, &body);

    let mut frame = vec![PREAMBLE];
    frame.extend_from_slice(&body);
    frame.push(crc as u8);
    frame
}

fn main() -> Result<(), spartn_rs::SpartnError> {
    env_logger::init();

    let stream = Cursor::new(build_demo_frame());
    let mut reader = SpartnReaderBuilder::new(stream).build()?;

    while let Some((frame, record)) = reader.parse()? {
        log::info!("msgType={} msgSubtype={}", frame.msg_type(), frame.msg_subtype());
        if let Some(record) = record {
            for (name, value) in record.iter() {
                println!("  {name} = {value:?}");
            }
        }
    }

    Ok(())
}
