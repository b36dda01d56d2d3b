use crate::codec::{Mode, Transcoder};

/// Byte that ends a record on the input or output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Terminator {
    /// `\n`.
    #[default]
    Newline,
    /// `\0`.
    Nul,
}

impl Terminator {
    pub fn byte(self) -> u8 {
        match self {
            Terminator::Newline => b'\n',
            Terminator::Nul => b'\0',
        }
    }
}

/// Configuration for record transcoding.
///
/// NUL termination applies to the side of the stream that may carry raw
/// newlines: encode input, decode output. Encoded text never contains a raw
/// newline, so encode output and decode input stay newline terminated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// Direction of the transformation. Default: encode.
    pub mode: Mode,
    /// Use NUL instead of newline on the raw side. Default: false.
    pub nul_terminated: bool,
}

impl CodecConfig {
    pub fn new(mode: Mode, nul_terminated: bool) -> Self {
        Self {
            mode,
            nul_terminated,
        }
    }

    /// Terminator separating records on the input stream.
    pub fn input_terminator(&self) -> Terminator {
        match (self.mode, self.nul_terminated) {
            (Mode::Encode, true) => Terminator::Nul,
            _ => Terminator::Newline,
        }
    }

    /// Terminator written after every output record.
    pub fn output_terminator(&self) -> Terminator {
        match (self.mode, self.nul_terminated) {
            (Mode::Decode, true) => Terminator::Nul,
            _ => Terminator::Newline,
        }
    }

    pub fn transcoder(&self) -> Transcoder {
        Transcoder::new(self.mode, self.output_terminator())
    }
}
