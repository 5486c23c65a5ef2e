//! Input and output plumbing shared by the subcommands.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Open `path` for reading, or stdin when it is `None` or `-`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            log::debug!("reading from {}", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
        _ => {
            log::debug!("reading from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

/// Create `path` for writing, or stdout when it is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
            log::debug!("writing to {}", path.display());
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Reader adapter that drops ASCII whitespace.
///
/// Lets wrapped or newline-terminated reverse hex text be decoded.
pub struct SkipWhitespace<R> {
    inner: R,
}

impl<R: Read> SkipWhitespace<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> Read for SkipWhitespace<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = self.inner.read(buf)?;
            if n == 0 {
                return Ok(0);
            }
            let mut kept = 0;
            for i in 0..n {
                if !buf[i].is_ascii_whitespace() {
                    buf[kept] = buf[i];
                    kept += 1;
                }
            }
            // A read of nothing but whitespace must not look like EOF.
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}

/// Wrap `input` in [`SkipWhitespace`] when `skip` is set.
pub fn maybe_skip_whitespace(input: Box<dyn Read>, skip: bool) -> Box<dyn Read> {
    if skip {
        Box::new(SkipWhitespace::new(input))
    } else {
        input
    }
}
