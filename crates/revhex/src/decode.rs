use crate::alphabet::REVERSE;
use crate::error::{DecodeError, DecodeVecError};

/// Length of the decoding of `n` encoded characters. Always `n / 2`.
///
/// This is a sizing hint; it does not validate anything. For odd `n` the
/// trailing character is dropped, so `encoded_len(decoded_len(5)) == 4`.
#[inline]
#[must_use]
pub const fn decoded_len(n: usize) -> usize {
    n / 2
}

/// Decode `src` into `dst`, returning the number of bytes written.
///
/// Input is processed two characters at a time, left to right, and is
/// case-insensitive. Within a pair the high character is checked before
/// the low one, so `"jj"` reports the first `j`.
///
/// # Errors
///
/// - [`DecodeError::InvalidByte`] for the first character outside the
///   alphabet. A lone invalid trailing character is reported this way
///   too, ahead of the length problem.
/// - [`DecodeError::OddLength`] if every character is valid but there is
///   an odd number of them.
///
/// On error, `dst[..err.valid_up_to()]` holds the bytes decoded before the
/// failure.
///
/// # Panics
///
/// Panics if `dst` is shorter than the number of bytes decoded, which
/// can't happen when `dst.len() >= decoded_len(src.len())`.
///
/// # Example
///
/// ```
/// let mut dst = [0u8; 2];
/// assert_eq!(revhex::decode(&mut dst, b"LWpy"), Ok(2));
/// assert_eq!(dst, [0xe3, 0xa1]);
/// ```
pub fn decode(dst: &mut [u8], src: &[u8]) -> Result<usize, DecodeError> {
    let pairs = src.chunks_exact(2);
    let tail = pairs.remainder();

    let mut written = 0;
    for (i, pair) in pairs.enumerate() {
        let hi = REVERSE[usize::from(pair[0])];
        let lo = REVERSE[usize::from(pair[1])];
        if hi > 0x0F {
            return Err(DecodeError::InvalidByte {
                byte: pair[0],
                offset: 2 * i,
            });
        }
        if lo > 0x0F {
            return Err(DecodeError::InvalidByte {
                byte: pair[1],
                offset: 2 * i + 1,
            });
        }
        dst[i] = (hi << 4) | lo;
        written += 1;
    }

    if let [last] = *tail {
        // An invalid character is an earlier problem than the missing one.
        if REVERSE[usize::from(last)] > 0x0F {
            return Err(DecodeError::InvalidByte {
                byte: last,
                offset: src.len() - 1,
            });
        }
        return Err(DecodeError::OddLength { len: src.len() });
    }
    Ok(written)
}

/// Append the decoding of `src` to `dst`.
///
/// # Errors
///
/// Same as [`decode`]. On error `dst` keeps the bytes decoded before the
/// failure.
pub fn append_decode(dst: &mut Vec<u8>, src: &[u8]) -> Result<(), DecodeError> {
    let start = dst.len();
    dst.resize(start + decoded_len(src.len()), 0);
    match decode(&mut dst[start..], src) {
        Ok(n) => {
            dst.truncate(start + n);
            Ok(())
        }
        Err(err) => {
            dst.truncate(start + err.valid_up_to());
            Err(err)
        }
    }
}

/// Decode `src` into a new vector.
///
/// # Errors
///
/// Same conditions as [`decode`]; the returned [`DecodeVecError`] holds
/// the bytes decoded before the failure.
///
/// ```
/// let err = revhex::decode_to_vec("zzjj").unwrap_err();
/// assert_eq!(err.decoded(), &[0]);
/// ```
pub fn decode_to_vec(src: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeVecError> {
    let mut dst = Vec::with_capacity(decoded_len(src.as_ref().len()));
    match append_decode(&mut dst, src.as_ref()) {
        Ok(()) => Ok(dst),
        Err(err) => Err(DecodeVecError::new(dst, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_empty() {
        let mut dst: [u8; 0] = [];
        assert_eq!(decode(&mut dst, b""), Ok(0));
    }

    #[test]
    fn decode_mixed_case() {
        let mut dst = [0u8; 8];
        assert_eq!(decode(&mut dst, b"ZZZYZXZWzvzuztzs"), Ok(8));
        assert_eq!(dst, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn decode_single_valid_char_is_odd_length() {
        let mut dst: [u8; 0] = [];
        assert_eq!(decode(&mut dst, b"z"), Err(DecodeError::OddLength { len: 1 }));
    }

    #[test]
    fn decode_invalid_low_char() {
        let mut dst = [0u8; 1];
        assert_eq!(
            decode(&mut dst, b"zj"),
            Err(DecodeError::InvalidByte { byte: b'j', offset: 1 })
        );
    }

    #[test]
    fn decode_reports_high_char_first() {
        let mut dst = [0u8; 1];
        assert_eq!(
            decode(&mut dst, b"aj"),
            Err(DecodeError::InvalidByte { byte: b'a', offset: 0 })
        );
        assert_eq!(
            decode(&mut dst, b"az"),
            Err(DecodeError::InvalidByte { byte: b'a', offset: 0 })
        );
    }

    #[test]
    fn decode_keeps_prefix_on_error() {
        let mut dst = [0u8; 2];
        let err = decode(&mut dst, b"zzjj").unwrap_err();
        assert_eq!(err, DecodeError::InvalidByte { byte: b'j', offset: 2 });
        assert_eq!(&dst[..err.valid_up_to()], &[0]);
    }

    #[test]
    fn invalid_tail_beats_odd_length() {
        let mut dst = [0u8; 2];
        let err = decode(&mut dst, b"mvpp9").unwrap_err();
        assert_eq!(err, DecodeError::InvalidByte { byte: b'9', offset: 4 });
        assert_eq!(&dst[..err.valid_up_to()], &[0xd4, 0xaa]);
    }

    #[test]
    fn decode_into_oversized_dst() {
        let mut dst = [0xAAu8; 4];
        assert_eq!(decode(&mut dst, b"kk"), Ok(1));
        assert_eq!(dst, [0xff, 0xAA, 0xAA, 0xAA]);
    }

    #[test]
    fn append_decode_truncates_to_partial() {
        let mut dst = b"lead".to_vec();
        let err = append_decode(&mut dst, b"kkllm").unwrap_err();
        assert_eq!(err, DecodeError::OddLength { len: 5 });
        assert_eq!(dst, b"lead\xff\xee");
    }

    #[test]
    fn decode_to_vec_hands_back_partial() {
        let err = decode_to_vec("mvpp9").unwrap_err();
        assert_eq!(err.decoded(), b"\xd4\xaa");
        assert_eq!(err.error(), DecodeError::InvalidByte { byte: b'9', offset: 4 });
    }

    #[test]
    fn decoded_len_halves_and_floors() {
        assert_eq!(decoded_len(0), 0);
        assert_eq!(decoded_len(1), 0);
        assert_eq!(decoded_len(5), 2);
        assert_eq!(crate::encoded_len(decoded_len(5)), 4);
    }
}
