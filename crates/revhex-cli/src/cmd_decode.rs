/// Implementation of `revhex decode`.
///
/// Copies the input through a [`revhex::Decoder`] into the output. The
/// decoder stops at the first malformed character; everything decoded
/// before it has already been written when the error is reported.
///
/// ```text
/// ┌───────────────────────────────┬──────────────────────────────────────┐
/// │ Input problem                 │ Reported as                          │
/// ├───────────────────────────────┼──────────────────────────────────────┤
/// │ character outside the alphabet│ invalid byte 0x.. at offset N        │
/// │ odd number of characters      │ unexpected end of stream: unpaired … │
/// │ trailing newline              │ invalid byte 0x0a (use -i)           │
/// └───────────────────────────────┴──────────────────────────────────────┘
/// ```
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use revhex::Decoder;

use crate::DecodeArgs;
use crate::streams::{maybe_skip_whitespace, open_input, open_output};

/// Run the `revhex decode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not well-formed
/// reverse hex, or the output cannot be written.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let input = open_input(args.input.as_deref())?;
    let mut output = open_output(args.output.as_deref())?;

    let mut decoder = Decoder::new(maybe_skip_whitespace(input, args.ignore_whitespace));
    let copied = io::copy(&mut decoder, &mut output);

    // Keep whatever was decoded before a failure.
    output.flush().context("cannot flush output")?;
    let copied = copied.context("failed to decode input")?;

    log::info!("decoded {copied} bytes");
    Ok(())
}
