#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: encode->decode roundtrip.
//
// Encodes arbitrary bytes, checks the output length and alphabet, then
// decodes it (once as-is, once uppercased) and asserts the original bytes
// come back.
fuzz_target!(|data: &[u8]| {
    let mut encoded = vec![0u8; revhex::encoded_len(data.len())];
    let written = revhex::encode(&mut encoded, data);
    assert_eq!(written, 2 * data.len());
    assert!(encoded.iter().all(|b| revhex::ALPHABET.contains(b)));

    let mut decoded = vec![0u8; revhex::decoded_len(encoded.len())];
    let n = revhex::decode(&mut decoded, &encoded).unwrap();
    assert_eq!(n, data.len());
    assert_eq!(decoded, data);

    let upper = encoded.to_ascii_uppercase();
    assert_eq!(revhex::decode_to_vec(&upper).unwrap(), data);
});
