//! rsync-style filename escaping with line/NUL record framing.
//!
//! Bytes that are not printable 7-bit ASCII are written as an escape token:
//! - A backslash and a hash (`\#`)
//! - Three octal digits holding the byte value (`\#001`, `\#303`)
//!
//! A literal backslash that would read back as an escape token is escaped
//! itself, so `\#123` encodes to `\#134#123`.

pub mod codec;
pub mod config;
pub mod error;
pub mod escape;
pub mod reader;
pub mod writer;

pub use codec::{decode, decode_record, encode, encode_record, Mode, Transcoder};
pub use config::{CodecConfig, Terminator};
pub use error::{RecordError, Result};
pub use escape::{DigitClass, ESCAPE_LEN, ESCAPE_PREFIX};
pub use reader::{Record, RecordReader};
pub use writer::RecordWriter;
