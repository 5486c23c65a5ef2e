/// Implementation of `revhex convert`.
///
/// Swaps the digit table of a hex string without going through bytes:
///
/// ```text
/// $ revhex convert bb84c0a3debac5f8
/// oorvnzpwmlopnukr
/// $ revhex convert --to-hex oorvnzpwmlopnukr
/// bb84c0a3debac5f8
/// ```
use anyhow::{Context, Result};
use revhex::{hex_to_revhex, revhex_to_hex};

use crate::ConvertArgs;

/// Run the `revhex convert` command.
///
/// # Errors
///
/// Returns an error if the argument is not valid in the source format.
pub fn run(args: &ConvertArgs) -> Result<()> {
    let converted = if args.to_hex {
        revhex_to_hex(&args.text).context("argument is not valid reverse hex")?
    } else {
        hex_to_revhex(&args.text).context("argument is not valid hex")?
    };
    println!("{converted}");
    Ok(())
}
