//! Shared fixtures for the revhex integration tests and benchmarks.

/// A known pairing of encoded text and the bytes it stands for.
#[derive(Clone, Copy, Debug)]
pub struct Case {
    pub enc: &'static str,
    pub dec: &'static [u8],
}

/// Pairs that must survive both directions.
///
/// The byte values mirror the usual hex codec test vectors, so each row can
/// be checked against its standard hex spelling too.
pub const ROUND_TRIP: &[Case] = &[
    Case { enc: "", dec: &[] },
    Case { enc: "zzzyzxzwzvzuztzs", dec: &[0, 1, 2, 3, 4, 5, 6, 7] },
    Case { enc: "zrzqzpzoznzmzlzk", dec: &[8, 9, 10, 11, 12, 13, 14, 15] },
    Case { enc: "kzkykxkwkvkuktks", dec: &[0xf0, 0xf1, 0xf2, 0xf3, 0xf4, 0xf5, 0xf6, 0xf7] },
    Case { enc: "krkqkpkoknkmklkk", dec: &[0xf8, 0xf9, 0xfa, 0xfb, 0xfc, 0xfd, 0xfe, 0xff] },
    Case { enc: "ts", dec: b"g" },
    Case { enc: "lwpy", dec: &[0xe3, 0xa1] },
    Case { enc: "zyxwvutsrqponmlk", dec: &[0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef] },
];

/// Decode-only pairs: upper and mixed case input.
pub const DECODE_ONLY: &[Case] = &[
    Case { enc: "ZZZYZXZWZVZUZTZS", dec: &[0, 1, 2, 3, 4, 5, 6, 7] },
    Case { enc: "ZZZYZXZWzvzuztzs", dec: &[0, 1, 2, 3, 4, 5, 6, 7] },
    Case { enc: "zzzyzxzWZVZUZTZs", dec: &[0, 1, 2, 3, 4, 5, 6, 7] },
];

/// Every pair a decoder must accept.
pub fn decode_cases() -> impl Iterator<Item = &'static Case> {
    ROUND_TRIP.iter().chain(DECODE_ONLY)
}

/// What a one-shot decode of malformed input should produce.
#[derive(Clone, Copy, Debug)]
pub enum Expect {
    Ok,
    InvalidByte { byte: u8, offset: usize },
    OddLength,
}

/// A malformed (or empty) input, the bytes decoded before the failure, and
/// the failure.
#[derive(Clone, Copy, Debug)]
pub struct ErrorCase {
    pub input: &'static [u8],
    pub decoded: &'static [u8],
    pub expect: Expect,
}

pub const DECODE_ERRORS: &[ErrorCase] = &[
    ErrorCase { input: b"", decoded: b"", expect: Expect::Ok },
    ErrorCase { input: b"z", decoded: b"", expect: Expect::OddLength },
    ErrorCase { input: b"9mvpp", decoded: b"", expect: Expect::InvalidByte { byte: b'9', offset: 0 } },
    ErrorCase { input: b"mvpp9", decoded: b"\xd4\xaa", expect: Expect::InvalidByte { byte: b'9', offset: 4 } },
    ErrorCase { input: b"zzzzz", decoded: b"\x00\x00", expect: Expect::OddLength },
    ErrorCase { input: b"zj", decoded: b"", expect: Expect::InvalidByte { byte: b'j', offset: 1 } },
    ErrorCase { input: b"zzjj", decoded: b"\x00", expect: Expect::InvalidByte { byte: b'j', offset: 2 } },
    ErrorCase { input: b"z\x01", decoded: b"", expect: Expect::InvalidByte { byte: 0x01, offset: 1 } },
    ErrorCase { input: b"kkllm", decoded: b"\xff\xee", expect: Expect::OddLength },
];

/// Deterministic pseudo-random bytes for larger inputs.
pub fn sample_bytes(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x9E37_79B9;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state.to_le_bytes()[0]
        })
        .collect()
}
