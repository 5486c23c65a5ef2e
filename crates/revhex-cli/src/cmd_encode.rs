/// Implementation of `revhex encode`.
///
/// Copies the input through a [`revhex::Encoder`] wrapped around the
/// output, so memory use stays flat regardless of input size.
///
/// ```text
///   input ──read──→ io::copy ──write──→ Encoder ──encoded──→ output
/// ```
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use revhex::Encoder;

use crate::EncodeArgs;
use crate::streams::{open_input, open_output};

/// Run the `revhex encode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let mut input = open_input(args.input.as_deref())?;
    let output = open_output(args.output.as_deref())?;

    let mut encoder = Encoder::new(output);
    let copied = io::copy(&mut input, &mut encoder).context("failed to encode input")?;

    let mut output = encoder.into_inner();
    if args.newline {
        output.write_all(b"\n").context("cannot write output")?;
    }
    output.flush().context("cannot flush output")?;

    log::info!("encoded {copied} bytes");
    Ok(())
}
