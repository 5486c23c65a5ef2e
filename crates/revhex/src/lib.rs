//! Reverse hexadecimal encoding and decoding.
//!
//! Reverse hex is base-16 with the alphabet `zyxwvutsrqponmlk` in place of
//! `0123456789abcdef`. Each byte becomes two characters, high nibble first.
//! Encoding emits lowercase; decoding accepts either case.
//!
//! ```text
//!   bytes   [187, 132, 192, 163, 222, 186, 197, 248]
//!   hex     bb84c0a3debac5f8
//!   revhex  oorvnzpwmlopnukr
//! ```
//!
//! One-shot functions ([`encode`], [`decode`] and their `Vec`/`String`
//! wrappers) work on complete buffers. [`Encoder`] and [`Decoder`] wrap an
//! [`std::io::Write`] / [`std::io::Read`] and transcode unbounded streams
//! through a fixed [`BUFFER_SIZE`] buffer.
#![warn(clippy::pedantic)]

pub mod alphabet;
pub mod convert;
pub mod decode;
pub mod decoder;
pub mod encode;
pub mod encoder;
pub mod error;

mod fault;

pub use alphabet::ALPHABET;
pub use convert::{hex_to_revhex, revhex_to_hex};
pub use decode::{append_decode, decode, decode_to_vec, decoded_len};
pub use decoder::Decoder;
pub use encode::{append_encode, encode, encode_to_string, encoded_len};
pub use encoder::{BUFFER_SIZE, Encoder};
pub use error::{DecodeError, DecodeVecError};
