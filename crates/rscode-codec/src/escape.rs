//! Escape token rules shared by the encoder and the decoder.

/// Escape token: prefix (2) + three octal digits (3) = 5 bytes.
pub const ESCAPE_LEN: usize = 5;

/// Escape prefix: `\#`.
pub const ESCAPE_PREFIX: [u8; 2] = *b"\\#";

/// Which bytes count as digits after an escape prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitClass {
    /// `0`-`9`. rsync treats any three decimal digits as escape-like, so the
    /// encoder must escape a backslash that precedes them.
    Lenient,
    /// `0`-`7`. Only these form a token the decoder turns back into a byte.
    Strict,
}

impl DigitClass {
    /// Whether `byte` belongs to this digit class.
    pub fn contains(self, byte: u8) -> bool {
        match self {
            DigitClass::Lenient => byte.is_ascii_digit(),
            DigitClass::Strict => matches!(byte, b'0'..=b'7'),
        }
    }
}

/// Whether `src` starts with an escape token under the given digit class.
pub fn is_escape(src: &[u8], class: DigitClass) -> bool {
    match src {
        [b'\\', b'#', a, b, c, ..] => {
            class.contains(*a) && class.contains(*b) && class.contains(*c)
        }
        _ => false,
    }
}

/// Parse the strict escape token at the start of `src`.
///
/// Returns `None` if `src` does not start with a strict token. Values above
/// `0o377` keep their low 8 bits.
pub fn parse_escape(src: &[u8]) -> Option<u8> {
    if !is_escape(src, DigitClass::Strict) {
        return None;
    }
    let value = src[2..ESCAPE_LEN]
        .iter()
        .fold(0u16, |acc, digit| acc * 8 + u16::from(digit - b'0'));
    Some(value as u8)
}

/// Whether the encoder may emit `byte` as-is (printable 7-bit ASCII).
pub fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e)
}

/// Write the escape token for `byte`.
pub fn escape_token(byte: u8) -> [u8; ESCAPE_LEN] {
    [
        ESCAPE_PREFIX[0],
        ESCAPE_PREFIX[1],
        b'0' + (byte >> 6),
        b'0' + ((byte >> 3) & 0o7),
        b'0' + (byte & 0o7),
    ]
}
