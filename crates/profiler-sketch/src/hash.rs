//! Canonical hashing of scalar values
//!
//! Distinct counting needs a stable 64-bit hash over a canonical byte
//! encoding of each scalar, independent of process, platform and run.
//! FNV-1a is used with a final avalanche mix so that low-entropy inputs
//! (small integers) still spread across the full 64-bit space, which the
//! HyperLogLog register indexing relies on.

use profiler_core::ScalarValue;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over a byte slice
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Final avalanche mix (splitmix64 finalizer)
fn mix(mut h: u64) -> u64 {
    h ^= h >> 30;
    h = h.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    h ^= h >> 27;
    h = h.wrapping_mul(0x94d0_49bb_1331_11eb);
    h ^= h >> 31;
    h
}

/// Stable 64-bit hash of a scalar's canonical encoding
///
/// Each variant is prefixed with a type tag so equal byte patterns of
/// different types (e.g. `1i64` and `1.0f64`) hash apart. Numeric
/// values hash their exact bit representation; no cross-type widening
/// is performed.
pub fn hash_scalar(value: &ScalarValue) -> u64 {
    let mut bytes = Vec::with_capacity(16);
    match value {
        ScalarValue::Null => bytes.push(0u8),
        ScalarValue::Int32(v) => {
            bytes.push(1);
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        ScalarValue::Int64(v) => {
            bytes.push(2);
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        ScalarValue::Float32(v) => {
            bytes.push(3);
            bytes.extend_from_slice(&v.to_bits().to_le_bytes());
        }
        ScalarValue::Float64(v) => {
            bytes.push(4);
            bytes.extend_from_slice(&v.to_bits().to_le_bytes());
        }
        ScalarValue::Text(s) => {
            bytes.push(5);
            bytes.extend_from_slice(s.as_bytes());
        }
        ScalarValue::Boolean(v) => {
            bytes.push(6);
            bytes.push(u8::from(*v));
        }
    }
    mix(fnv1a(&bytes))
}
