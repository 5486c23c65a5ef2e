//! User-visible strings pinned with inline snapshots.
//!
//! Covers the documented example encodings and the `Display` output of
//! every error variant, since both end up in front of people (README
//! examples, CLI error lines).

use std::io::Read;

use insta::assert_snapshot;
use revhex::{DecodeError, Decoder, decode_to_vec, encode_to_string};

#[test]
fn hello_gopher() {
    assert_snapshot!(encode_to_string(b"Hello Gopher!"), @"vrtutntntkxzvstksztrtusxxy");
}

#[test]
fn hex_comparison() {
    let sample = [187, 132, 192, 163, 222, 186, 197, 248];
    let hex: String = sample.iter().map(|b| format!("{b:02x}")).collect();
    let report = format!(
        "bytes:   {sample:?}\nhex:     {hex}\nrevhex:  {}",
        encode_to_string(&sample)
    );
    assert_snapshot!(report, @r"
    bytes:   [187, 132, 192, 163, 222, 186, 197, 248]
    hex:     bb84c0a3debac5f8
    revhex:  oorvnzpwmlopnukr
    ");
}

#[test]
fn decode_hello_gopher() {
    let decoded = decode_to_vec("vrtutntntkxzvstksztrtusxxy").unwrap();
    assert_snapshot!(String::from_utf8(decoded).unwrap(), @"Hello Gopher!");
}

#[test]
fn invalid_byte_message() {
    let err = decode_to_vec("zzjj").unwrap_err();
    assert_snapshot!(err.to_string(), @"invalid byte 0x6a at offset 2");
}

#[test]
fn odd_length_message() {
    let err = DecodeError::OddLength { len: 5 };
    assert_snapshot!(err.to_string(), @"odd length reverse hex input (5 characters)");
}

#[test]
fn unexpected_eof_message() {
    let mut out = Vec::new();
    let err = Decoder::new(&b"kkz"[..]).read_to_end(&mut out).unwrap_err();
    assert_snapshot!(err.to_string(), @"unexpected end of stream: unpaired character at offset 2");
}
