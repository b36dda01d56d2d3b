mod config;
mod exit;
mod logging;
mod run;
mod version;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use rscode_codec::Mode;

use crate::config::Config;
use crate::logging::{init_logging, LogFormat, LogLevel};

const AFTER_HELP: &str = "\
The encoding process translates nonprintable characters into `\\#ooo',
where `ooo' is the octal codepoint value. In literal `\\#ooo' tokens the
backslash is in turn encoded the same way, i.e. `\\#123' becomes
`\\#134#123', even if `ooo' wasn't a legitimate octal number (it may
contain 8 or 9). The decoding process does the inverse operation.

If no INPUT and no -f is given, records are read from stdin.
If INPUT is given, stdin is ignored and each INPUT is one record.";

#[derive(Parser, Debug)]
#[command(
    name = "rscode",
    about = "En/decode filenames rsync-style",
    after_help = AFTER_HELP,
    disable_version_flag = true
)]
struct Cli {
    /// Decode.
    #[arg(short = 'd', overrides_with = "encode")]
    decode: bool,

    /// Encode. This is the default.
    #[arg(short = 'e', overrides_with = "decode")]
    encode: bool,

    /// Read input to en/decode from FILE instead of stdin ("-" is stdin).
    #[arg(short = 'f', value_name = "FILE", conflicts_with = "inputs")]
    file: Option<PathBuf>,

    /// When encoding, expect input records to be \0-terminated rather than
    /// by \n. When decoding, terminate output records by \0 instead of \n.
    #[arg(short = '0')]
    nul: bool,

    /// Print version information.
    #[arg(short = 'V', long = "version")]
    version: bool,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: LogLevel,

    /// Strings to en/decode directly.
    #[arg(value_name = "INPUT", value_parser = clap::value_parser!(OsString))]
    inputs: Vec<OsString>,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.decode {
            Mode::Decode
        } else {
            Mode::Encode
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let result = if cli.version {
        version::run()
    } else {
        let mode = cli.mode();
        Config::resolve(mode, cli.nul, cli.file, cli.inputs).and_then(run::run)
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
