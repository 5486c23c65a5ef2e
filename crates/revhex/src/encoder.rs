use std::io::{self, Write};

use crate::encode::encode;
use crate::fault::Fault;

/// Number of encoded characters the streaming adapters buffer.
///
/// Must be even: the encoder fills it from `BUFFER_SIZE / 2` source bytes
/// per chunk.
pub const BUFFER_SIZE: usize = 1024;

/// Streaming encoder: an [`io::Write`] adapter that writes lowercase
/// reverse hex characters to an inner writer.
///
/// Source bytes are encoded in chunks of at most `BUFFER_SIZE / 2` bytes
/// through a fixed internal buffer, so no allocation happens per call.
/// Every chunk is pushed to the inner writer before `write` returns; the
/// encoder holds no pending data and `flush` only forwards.
///
/// Byte counts returned by `write` are in *source* bytes, even though the
/// inner writer receives twice as many.
///
/// # Faults
///
/// The first error from the inner writer is kept. If some source bytes
/// were already flushed in that call, `write` returns `Ok(n)` for them and
/// the error comes back from the next call. From then on every `write`
/// and `flush` returns the stored error without touching the inner writer.
/// `ErrorKind::Interrupted` is retried and never stored.
///
/// # Example
///
/// ```
/// use std::io::Write;
///
/// let mut enc = revhex::Encoder::new(Vec::new());
/// enc.write_all(b"Hello ").unwrap();
/// enc.write_all(b"Gopher!").unwrap();
/// assert_eq!(enc.into_inner(), b"vrtutntntkxzvstksztrtusxxy");
/// ```
pub struct Encoder<W> {
    inner: W,
    fault: Option<Fault>,
    out: [u8; BUFFER_SIZE],
}

impl<W: Write> Encoder<W> {
    /// Create an encoder writing to `inner`.
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            fault: None,
            out: [0; BUFFER_SIZE],
        }
    }

    /// Get a reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the inner writer.
    ///
    /// Writing to it directly interleaves raw bytes with encoded output.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the encoder, returning the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Whether a sink failure has been recorded.
    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }
}

impl<W: Write> Write for Encoder<W> {
    fn write(&mut self, mut buf: &[u8]) -> io::Result<usize> {
        if let Some(fault) = &self.fault {
            return Err(fault.to_io_error());
        }

        let mut consumed = 0;
        while !buf.is_empty() {
            let chunk = buf.len().min(BUFFER_SIZE / 2);
            let encoded = encode(&mut self.out, &buf[..chunk]);

            match write_fully(&mut self.inner, &self.out[..encoded]) {
                Ok(()) => {
                    consumed += chunk;
                    buf = &buf[chunk..];
                }
                Err((written, err)) => {
                    log::debug!(
                        "revhex encoder: sink failed after {} source bytes: {err}",
                        consumed + written / 2
                    );
                    consumed += written / 2;
                    self.fault = Some(err.into());
                    break;
                }
            }
        }

        match &self.fault {
            Some(fault) if consumed == 0 => Err(fault.to_io_error()),
            _ => Ok(consumed),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(fault) = &self.fault {
            return Err(fault.to_io_error());
        }
        self.inner.flush()
    }
}

/// Push all of `buf` into `w`, reporting how much landed if it fails.
///
/// Like [`Write::write_all`], but the byte count survives the error so the
/// caller can convert it into source-byte progress.
fn write_fully<W: Write>(w: &mut W, buf: &[u8]) -> Result<(), (usize, io::Error)> {
    let mut written = 0;
    while written < buf.len() {
        match w.write(&buf[written..]) {
            Ok(0) => {
                return Err((
                    written,
                    io::Error::new(io::ErrorKind::WriteZero, "failed to write encoded data"),
                ));
            }
            Ok(n) => written += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err((written, err)),
        }
    }
    Ok(())
}
