use std::io;

/// Errors produced while decoding reverse hex text.
///
/// ```text
///   DecodeError
///   ├── InvalidByte     ← character outside the alphabet (one-shot and streaming)
///   ├── OddLength       ← one-shot input ended with an unpaired valid character
///   └── UnexpectedEof   ← stream source closed with an unpaired valid character
/// ```
///
/// Offsets count encoded characters from the start of the slice passed to
/// [`decode`](crate::decode), or from the start of the stream for
/// [`Decoder`](crate::Decoder).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A character outside the case-insensitive alphabet.
    #[error("invalid byte {byte:#04x} at offset {offset}")]
    InvalidByte { byte: u8, offset: usize },

    /// The input had an odd number of characters and the last one was valid.
    #[error("odd length reverse hex input ({len} characters)")]
    OddLength { len: usize },

    /// The stream ended in the middle of a character pair.
    #[error("unexpected end of stream: unpaired character at offset {offset}")]
    UnexpectedEof { offset: usize },
}

impl DecodeError {
    /// Number of bytes that were fully decoded before the error.
    ///
    /// For one-shot decoding, `dst[..err.valid_up_to()]` holds that output.
    #[must_use]
    pub fn valid_up_to(&self) -> usize {
        match *self {
            Self::InvalidByte { offset, .. } => offset / 2,
            Self::OddLength { len } => len / 2,
            Self::UnexpectedEof { offset } => offset / 2,
        }
    }

    /// Shift the reported offset by `base` characters.
    ///
    /// Used by the streaming decoder to turn buffer-relative offsets into
    /// stream-absolute ones.
    #[must_use]
    pub(crate) fn offset_by(self, base: usize) -> Self {
        match self {
            Self::InvalidByte { byte, offset } => Self::InvalidByte {
                byte,
                offset: base + offset,
            },
            Self::OddLength { len } => Self::OddLength { len: base + len },
            Self::UnexpectedEof { offset } => Self::UnexpectedEof {
                offset: base + offset,
            },
        }
    }
}

impl From<DecodeError> for io::Error {
    fn from(err: DecodeError) -> Self {
        let kind = match err {
            DecodeError::InvalidByte { .. } | DecodeError::OddLength { .. } => {
                io::ErrorKind::InvalidData
            }
            DecodeError::UnexpectedEof { .. } => io::ErrorKind::UnexpectedEof,
        };
        io::Error::new(kind, err)
    }
}

/// Error returned by [`decode_to_vec`](crate::decode_to_vec).
///
/// Carries the bytes decoded before the failure, the way
/// [`String::from_utf8`] hands back its input on error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct DecodeVecError {
    decoded: Vec<u8>,
    error: DecodeError,
}

impl DecodeVecError {
    pub(crate) fn new(decoded: Vec<u8>, error: DecodeError) -> Self {
        Self { decoded, error }
    }

    /// The bytes decoded before the error.
    #[must_use]
    pub fn decoded(&self) -> &[u8] {
        &self.decoded
    }

    /// Consume the error, returning the bytes decoded before it.
    #[must_use]
    pub fn into_decoded(self) -> Vec<u8> {
        self.decoded
    }

    /// The underlying decode failure.
    #[must_use]
    pub fn error(&self) -> DecodeError {
        self.error
    }
}

impl From<DecodeVecError> for DecodeError {
    fn from(err: DecodeVecError) -> Self {
        err.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_up_to_counts_whole_pairs() {
        assert_eq!(DecodeError::InvalidByte { byte: b'j', offset: 3 }.valid_up_to(), 1);
        assert_eq!(DecodeError::InvalidByte { byte: b'j', offset: 0 }.valid_up_to(), 0);
        assert_eq!(DecodeError::OddLength { len: 5 }.valid_up_to(), 2);
        assert_eq!(DecodeError::UnexpectedEof { offset: 4 }.valid_up_to(), 2);
    }

    #[test]
    fn offset_by_shifts_positions() {
        let err = DecodeError::InvalidByte { byte: b'j', offset: 3 }.offset_by(10);
        assert_eq!(err, DecodeError::InvalidByte { byte: b'j', offset: 13 });
        assert_eq!(err.valid_up_to(), 6);
    }

    #[test]
    fn io_error_kinds() {
        let invalid: io::Error = DecodeError::InvalidByte { byte: b'9', offset: 0 }.into();
        assert_eq!(invalid.kind(), io::ErrorKind::InvalidData);

        let eof: io::Error = DecodeError::UnexpectedEof { offset: 1 }.into();
        assert_eq!(eof.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn io_error_keeps_decode_error() {
        let err: io::Error = DecodeError::OddLength { len: 1 }.into();
        let inner = err
            .get_ref()
            .and_then(|e| e.downcast_ref::<DecodeError>())
            .copied();
        assert_eq!(inner, Some(DecodeError::OddLength { len: 1 }));
    }
}
