use std::io;
use std::sync::Arc;

use crate::error::DecodeError;

/// A terminal failure recorded by a streaming adapter.
///
/// Adapters keep the first fault they see and hand it back on every later
/// call. `io::Error` is not `Clone`, so sink and source failures are kept
/// behind an `Arc` and rewrapped with their original kind each time they
/// are surfaced. The original error stays reachable through
/// [`io::Error::get_ref`].
#[derive(Clone, Debug)]
pub(crate) enum Fault {
    Decode(DecodeError),
    Io(Arc<io::Error>),
}

impl Fault {
    pub(crate) fn to_io_error(&self) -> io::Error {
        match self {
            Self::Decode(err) => (*err).into(),
            Self::Io(err) => io::Error::new(err.kind(), Arc::clone(err)),
        }
    }
}

impl From<io::Error> for Fault {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<DecodeError> for Fault {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_fault_keeps_kind_across_surfacing() {
        let fault = Fault::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        for _ in 0..3 {
            let err = fault.to_io_error();
            assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
            assert_eq!(err.to_string(), "pipe closed");
        }
    }

    #[test]
    fn decode_fault_downcasts() {
        let fault = Fault::from(DecodeError::UnexpectedEof { offset: 7 });
        let err = fault.to_io_error();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        let inner = err.into_inner().and_then(|e| e.downcast::<DecodeError>().ok());
        assert_eq!(inner.as_deref(), Some(&DecodeError::UnexpectedEof { offset: 7 }));
    }
}
