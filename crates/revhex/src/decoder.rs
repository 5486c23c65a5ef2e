use std::io::{self, Read};

use crate::alphabet::nibble;
use crate::decode::decode;
use crate::encoder::BUFFER_SIZE;
use crate::error::DecodeError;
use crate::fault::Fault;

/// Streaming decoder: an [`io::Read`] adapter that decodes reverse hex
/// characters pulled from an inner reader.
///
/// Characters are read into a fixed internal buffer and decoded two at a
/// time. Reads from the source may return any number of bytes, so up to
/// one undecoded character is carried over between calls.
///
/// # Faults
///
/// The first failure is kept and returned by every later read:
///
/// ```text
/// ┌──────────────────────────────────────┬───────────────────────────────┐
/// │ Condition                            │ Error                         │
/// ├──────────────────────────────────────┼───────────────────────────────┤
/// │ character outside the alphabet       │ InvalidData / InvalidByte     │
/// │ source ends on an unpaired character │ UnexpectedEof / UnexpectedEof │
/// │ source read fails                    │ the source's error            │
/// └──────────────────────────────────────┴───────────────────────────────┘
/// ```
///
/// Decode failures are [`io::Error`]s wrapping a [`DecodeError`] with a
/// stream-absolute offset. A fault is only reported once the bytes decoded
/// before it have been handed out: a read that produced data returns
/// `Ok(n)` and the error follows on the next call.
///
/// # Example
///
/// ```
/// use std::io::Read;
///
/// let mut dec = revhex::Decoder::new(&b"vrtutntntkxzvstksztrtusxxy"[..]);
/// let mut out = String::new();
/// dec.read_to_string(&mut out).unwrap();
/// assert_eq!(out, "Hello Gopher!");
/// ```
pub struct Decoder<R> {
    inner: R,
    state: State,
    arr: [u8; BUFFER_SIZE],
    /// Pending (undecoded) input is `arr[start..end]`.
    start: usize,
    end: usize,
    /// Stream offset of `arr[start]`.
    offset: usize,
}

/// Where the decoder stands with its source.
///
/// ```text
///   Live ──(source returns 0, even input)──→ Eof
///   Live ──(bad character / dangling pair / read error)──→ Faulted
/// ```
///
/// Both `Eof` and `Faulted` stop further reads from the source.
enum State {
    Live,
    Eof,
    Faulted(Fault),
}

impl<R: Read> Decoder<R> {
    /// Create a decoder reading encoded characters from `inner`.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            state: State::Live,
            arr: [0; BUFFER_SIZE],
            start: 0,
            end: 0,
            offset: 0,
        }
    }

    /// Get a reference to the inner reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Get a mutable reference to the inner reader.
    ///
    /// Reading from it directly skips over characters the decoder has not
    /// seen; up to `BUFFER_SIZE` characters may already be buffered.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap the decoder, returning the inner reader. Buffered characters
    /// are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Whether a terminal fault has been recorded.
    pub fn is_faulted(&self) -> bool {
        matches!(self.state, State::Faulted(_))
    }

    fn pending(&self) -> usize {
        self.end - self.start
    }

    /// Move the leftover character to the front and top up from the source.
    fn fill(&mut self) {
        let leftover = self.pending();
        self.arr.copy_within(self.start..self.end, 0);
        self.start = 0;
        self.end = leftover;

        loop {
            match self.inner.read(&mut self.arr[self.end..]) {
                Ok(0) => {
                    self.end_of_source();
                    return;
                }
                Ok(n) => {
                    self.end += n;
                    return;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    log::debug!("revhex decoder: source failed at offset {}: {err}", self.offset);
                    self.state = State::Faulted(err.into());
                    return;
                }
            }
        }
    }

    fn end_of_source(&mut self) {
        if self.pending() % 2 == 0 {
            log::trace!("revhex decoder: end of source after {} characters", self.offset);
            self.state = State::Eof;
            return;
        }

        // An invalid dangling character takes precedence over truncation.
        let last = self.arr[self.end - 1];
        let offset = self.offset + self.pending() - 1;
        let err = match nibble(last) {
            None => DecodeError::InvalidByte { byte: last, offset },
            Some(_) => DecodeError::UnexpectedEof { offset },
        };
        log::debug!("revhex decoder: {err}");
        self.state = State::Faulted(err.into());
    }
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        while self.pending() < 2 && matches!(self.state, State::Live) {
            self.fill();
        }

        let n = out.len().min(self.pending() / 2);
        let src = &self.arr[self.start..self.start + 2 * n];
        let decoded = match decode(&mut out[..n], src) {
            Ok(decoded) => {
                self.start += 2 * decoded;
                self.offset += 2 * decoded;
                decoded
            }
            Err(err) => {
                let decoded = err.valid_up_to();
                let err = err.offset_by(self.offset);
                log::debug!("revhex decoder: {err}");
                // Whatever is left after a bad character is discarded.
                self.offset += 2 * decoded;
                self.start = self.end;
                self.state = State::Faulted(err.into());
                decoded
            }
        };

        if decoded == 0 && self.pending() < 2 {
            if let State::Faulted(fault) = &self.state {
                return Err(fault.to_io_error());
            }
        }
        Ok(decoded)
    }
}
