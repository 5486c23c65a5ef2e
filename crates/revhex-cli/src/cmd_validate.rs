/// Implementation of `revhex validate`.
///
/// Decodes the whole input into a sink and reports the outcome:
///
/// ```text
/// ✓ valid reverse hex: 26 characters, 13 bytes
/// ✗ invalid byte 0x39 at offset 4
/// ```
///
/// The process exits with code 0 on valid input and 1 otherwise.
use std::io;

use anyhow::{Result, anyhow};
use revhex::{Decoder, encoded_len};

use crate::ValidateArgs;
use crate::streams::{maybe_skip_whitespace, open_input};

/// Run the `revhex validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or is not well-formed.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let input = open_input(args.input.as_deref())?;
    let mut decoder = Decoder::new(maybe_skip_whitespace(input, args.ignore_whitespace));

    match io::copy(&mut decoder, &mut io::sink()) {
        Ok(bytes) => {
            let bytes = usize::try_from(bytes)?;
            println!(
                "✓ valid reverse hex: {} characters, {bytes} bytes",
                encoded_len(bytes)
            );
            Ok(())
        }
        Err(e) => {
            println!("✗ {e}");
            Err(anyhow!("input is not valid reverse hex"))
        }
    }
}
