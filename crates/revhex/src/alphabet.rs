/// The reverse hex alphabet, indexed by nibble value.
///
/// ```text
/// ┌────────┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
/// │ nibble │ 0 │ 1 │ 2 │ 3 │ 4 │ 5 │ 6 │ 7 │ 8 │ 9 │ a │ b │ c │ d │ e │ f │
/// ├────────┼───┼───┼───┼───┼───┼───┼───┼───┼───┼───┼───┼───┼───┼───┼───┼───┤
/// │ char   │ z │ y │ x │ w │ v │ u │ t │ s │ r │ q │ p │ o │ n │ m │ l │ k │
/// └────────┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┘
/// ```
///
/// Encoding always emits these lowercase characters.
pub const ALPHABET: [u8; 16] = *b"zyxwvutsrqponmlk";

/// Marker stored in [`REVERSE`] for bytes outside the alphabet.
///
/// Any table value above `0x0F` means "invalid", so validity is a single
/// magnitude comparison.
pub const INVALID: u8 = 0xFF;

/// Decode lookup table: maps every byte to its nibble value or [`INVALID`].
///
/// Both cases of each alphabet letter resolve to the same nibble. Every
/// other byte, including the remaining ASCII letters `a`..`j`, maps to
/// [`INVALID`].
pub const REVERSE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut nibble = 0;
    while nibble < ALPHABET.len() {
        let lower = ALPHABET[nibble];
        #[allow(clippy::cast_possible_truncation)]
        let value = nibble as u8;
        table[lower as usize] = value;
        table[lower.to_ascii_uppercase() as usize] = value;
        nibble += 1;
    }
    table
};

/// Look up the nibble value for an encoded character.
///
/// Returns `None` for bytes outside the (case-insensitive) alphabet.
#[inline]
#[must_use]
pub const fn nibble(byte: u8) -> Option<u8> {
    let value = REVERSE[byte as usize];
    if value > 0x0F { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_no_duplicates() {
        for (i, a) in ALPHABET.iter().enumerate() {
            for b in &ALPHABET[i + 1..] {
                assert_ne!(a, b, "alphabet reuses {:?}", char::from(*a));
            }
        }
    }

    #[test]
    fn reverse_inverts_alphabet_in_both_cases() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(usize::from(REVERSE[c as usize]), i);
            assert_eq!(usize::from(REVERSE[c.to_ascii_uppercase() as usize]), i);
        }
    }

    #[test]
    fn exactly_thirty_two_valid_entries() {
        let valid = REVERSE.iter().filter(|&&v| v <= 0x0F).count();
        assert_eq!(valid, 32);
    }

    #[test]
    fn letters_outside_alphabet_are_invalid() {
        for c in (b'a'..=b'j').chain(b'A'..=b'J') {
            assert_eq!(nibble(c), None, "{:?} should be invalid", char::from(c));
        }
        for c in b'0'..=b'9' {
            assert_eq!(nibble(c), None);
        }
    }

    #[test]
    fn nibble_lookup() {
        assert_eq!(nibble(b'z'), Some(0));
        assert_eq!(nibble(b'K'), Some(15));
        assert_eq!(nibble(b'p'), Some(10));
        assert_eq!(nibble(0x00), None);
        assert_eq!(nibble(0xFF), None);
    }
}
