//! A printable serialization scheme for sampling seeds. A serialized seed is
//! small enough to paste from a test failure into a replay call, which is the
//! only roundtrip it needs to support.

// The format is one magic version byte followed by the seed's eight
// little-endian bytes, hex-encoded for easy copy/pasting.

const SEED_MAGIC_V1: u8 = 0x47;

pub(crate) fn serialize_seed(seed: u64) -> String {
    let mut buf = Vec::with_capacity(1 + std::mem::size_of::<u64>());
    buf.push(SEED_MAGIC_V1);
    buf.extend_from_slice(&seed.to_le_bytes());
    hex::encode(buf)
}

pub(crate) fn deserialize_seed(encoded: &str) -> Option<u64> {
    let bytes = hex::decode(encoded).ok()?;
    if bytes.len() != 1 + std::mem::size_of::<u64>() || bytes[0] != SEED_MAGIC_V1 {
        return None;
    }
    let mut le = [0u8; 8];
    le.copy_from_slice(&bytes[1..]);
    Some(u64::from_le_bytes(le))
}
