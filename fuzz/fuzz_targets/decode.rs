#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: one-shot decode of arbitrary text.
//
// Catches bugs in:
// - Odd-length tails (valid and invalid)
// - Tie-break between high and low characters
// - Partial output accounting via valid_up_to
fuzz_target!(|data: &[u8]| {
    let mut dst = vec![0u8; revhex::decoded_len(data.len())];
    match revhex::decode(&mut dst, data) {
        Ok(n) => {
            assert_eq!(n, dst.len());
            assert_eq!(
                revhex::encode_to_string(&dst).as_bytes(),
                data.to_ascii_lowercase().as_slice()
            );
        }
        Err(err) => {
            let n = err.valid_up_to();
            assert!(n <= dst.len());
            // The decoded prefix re-encodes to the input prefix.
            let prefix = &data[..2 * n];
            assert_eq!(
                revhex::encode_to_string(&dst[..n]).as_bytes(),
                prefix.to_ascii_lowercase().as_slice()
            );
        }
    }
});
