use bytes::{BufMut, Bytes, BytesMut};

use crate::config::Terminator;
use crate::escape::{escape_token, is_escape, is_printable, parse_escape, DigitClass, ESCAPE_LEN};

/// Direction of the transformation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Raw bytes to escaped, printable text.
    #[default]
    Encode,
    /// Escaped text back to raw bytes.
    Decode,
}

impl Mode {
    /// Append the transformed `record` to `dst` (no terminator).
    pub fn apply(self, record: &[u8], dst: &mut BytesMut) {
        match self {
            Mode::Encode => encode_record(record, dst),
            Mode::Decode => decode_record(record, dst),
        }
    }
}

/// Encode a record into escaped text.
///
/// A byte is escaped as `\#ooo` when it is not printable 7-bit ASCII, or when
/// it is a backslash starting an escape lookalike (`\#` plus three decimal
/// digits). Everything else is copied through.
pub fn encode_record(record: &[u8], dst: &mut BytesMut) {
    dst.reserve(record.len());
    for (i, &byte) in record.iter().enumerate() {
        if !is_printable(byte) || is_escape(&record[i..], DigitClass::Lenient) {
            dst.put_slice(&escape_token(byte));
        } else {
            dst.put_u8(byte);
        }
    }
}

/// Decode escaped text back into raw bytes.
///
/// Only strict tokens (`\#` plus three octal digits) are decoded; anything
/// else, including `\#189`, is copied through.
pub fn decode_record(record: &[u8], dst: &mut BytesMut) {
    dst.reserve(record.len());
    let mut pos = 0usize;
    while pos < record.len() {
        match parse_escape(&record[pos..]) {
            Some(byte) => {
                dst.put_u8(byte);
                pos += ESCAPE_LEN;
            }
            None => {
                dst.put_u8(record[pos]);
                pos += 1;
            }
        }
    }
}

/// Encode a record into a new buffer.
pub fn encode(record: &[u8]) -> Bytes {
    let mut dst = BytesMut::new();
    encode_record(record, &mut dst);
    dst.freeze()
}

/// Decode a record into a new buffer.
pub fn decode(record: &[u8]) -> Bytes {
    let mut dst = BytesMut::new();
    decode_record(record, &mut dst);
    dst.freeze()
}

/// A mode paired with the terminator written after every output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transcoder {
    pub mode: Mode,
    pub terminator: Terminator,
}

impl Transcoder {
    pub fn new(mode: Mode, terminator: Terminator) -> Self {
        Self { mode, terminator }
    }

    /// Append the transformed `record` followed by the output terminator.
    pub fn transcode(&self, record: &[u8], dst: &mut BytesMut) {
        self.mode.apply(record, dst);
        dst.put_u8(self.terminator.byte());
    }
}
