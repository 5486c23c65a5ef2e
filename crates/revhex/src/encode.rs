use crate::alphabet::ALPHABET;

/// Length of the encoding of `n` source bytes. Always `n * 2`.
#[inline]
#[must_use]
pub const fn encoded_len(n: usize) -> usize {
    n * 2
}

/// Encode `src` into the first [`encoded_len`]`(src.len())` bytes of `dst`.
///
/// Each byte becomes two characters: the high nibble first, then the low
/// nibble. Every byte value is encodable, so this never fails.
///
/// # Returns
///
/// The number of bytes written, which is always `encoded_len(src.len())`.
///
/// # Panics
///
/// Panics if `dst` is shorter than `encoded_len(src.len())`.
///
/// # Example
///
/// ```
/// let mut dst = [0u8; 4];
/// assert_eq!(revhex::encode(&mut dst, &[0xe3, 0xa1]), 4);
/// assert_eq!(&dst, b"lwpy");
/// ```
pub fn encode(dst: &mut [u8], src: &[u8]) -> usize {
    let len = encoded_len(src.len());
    for (pair, &byte) in dst[..len].chunks_exact_mut(2).zip(src) {
        pair[0] = ALPHABET[usize::from(byte >> 4)];
        pair[1] = ALPHABET[usize::from(byte & 0x0F)];
    }
    len
}

/// Append the encoding of `src` to `dst`.
pub fn append_encode(dst: &mut Vec<u8>, src: &[u8]) {
    let start = dst.len();
    dst.resize(start + encoded_len(src.len()), 0);
    encode(&mut dst[start..], src);
}

/// Encode `src` into a new `String`.
///
/// ```
/// assert_eq!(revhex::encode_to_string(b"Hello Gopher!"), "vrtutntntkxzvstksztrtusxxy");
/// ```
#[must_use]
pub fn encode_to_string(src: &[u8]) -> String {
    let mut dst = vec![0; encoded_len(src.len())];
    encode(&mut dst, src);
    // Every byte written comes from ALPHABET, which is ASCII.
    dst.into_iter().map(char::from).collect()
}
