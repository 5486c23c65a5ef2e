#![no_main]

use std::io::Read;

use libfuzzer_sys::fuzz_target;
use revhex::DecodeError;

// Fuzz target: streaming decoder agrees with the one-shot decoder.
//
// Input format:
//   byte 0:   read step (source hands out 1..=256 bytes per read)
//   bytes 1..: encoded text
//
// Output bytes must match; errors must match, except that a one-shot
// OddLength becomes UnexpectedEof at the dangling character.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.data.len().min(self.step).min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let step = usize::from(data[0]) + 1;
    let text = &data[1..];

    let (expected_out, expected_err) = match revhex::decode_to_vec(text) {
        Ok(out) => (out, None),
        Err(e) => {
            let err = match e.error() {
                DecodeError::OddLength { len } => DecodeError::UnexpectedEof { offset: len - 1 },
                other => other,
            };
            (e.into_decoded(), Some(err))
        }
    };

    let mut dec = revhex::Decoder::new(Trickle { data: text, step });
    let mut out = Vec::new();
    let err = dec.read_to_end(&mut out).err().map(|e| {
        *e.into_inner()
            .and_then(|inner| inner.downcast::<DecodeError>().ok())
            .expect("stream errors are DecodeErrors")
    });

    assert_eq!(out, expected_out);
    assert_eq!(err, expected_err);
});
