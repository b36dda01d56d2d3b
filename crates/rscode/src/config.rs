use std::ffi::OsString;
use std::path::{Path, PathBuf};

use rscode_codec::{CodecConfig, Mode};

use crate::exit::{CliError, CliResult, USAGE};

/// Where records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Positional arguments, one record each. The input stream is not read.
    Args(Vec<Vec<u8>>),
    /// Terminator-delimited records read from a stream.
    Stream(Input),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` names standard input.
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(path.to_path_buf())
        }
    }
}

/// Resolved run configuration, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub codec: CodecConfig,
    pub source: Source,
}

impl Config {
    pub fn resolve(
        mode: Mode,
        nul_terminated: bool,
        file: Option<PathBuf>,
        inputs: Vec<OsString>,
    ) -> CliResult<Self> {
        if inputs.is_empty() {
            let input = file.as_deref().map_or(Input::Stdin, Input::from_path);
            return Ok(Self {
                codec: CodecConfig::new(mode, nul_terminated),
                source: Source::Stream(input),
            });
        }

        if file.is_some() {
            return Err(CliError::new(
                USAGE,
                "arguments and -f are mutually exclusive",
            ));
        }

        let mut nul_terminated = nul_terminated;
        if nul_terminated && mode == Mode::Encode {
            tracing::warn!("ignoring -0 because arguments are provided");
            nul_terminated = false;
        }

        Ok(Self {
            codec: CodecConfig::new(mode, nul_terminated),
            source: Source::Args(inputs.into_iter().map(os_bytes).collect()),
        })
    }
}

#[cfg(unix)]
fn os_bytes(value: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    value.into_vec()
}

#[cfg(not(unix))]
fn os_bytes(value: OsString) -> Vec<u8> {
    value.to_string_lossy().into_owned().into_bytes()
}
