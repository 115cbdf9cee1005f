//! FNV-1a hashing for text fields.

const FNV_OFFSET: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Computes the 32-bit FNV-1a hash of a byte slice.
///
/// Used for string-like fields so that text hashes are identical across
/// runs, processes and platforms.
///
/// # Examples
///
/// ```
/// use hashcode_core::hash::fnv1a_32;
///
/// assert_eq!(fnv1a_32(b""), 0x811c_9dc5);
/// assert_eq!(fnv1a_32(b"a"), 0xe40c_292c);
/// ```
pub const fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}
