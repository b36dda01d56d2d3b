//! En- or decode funky chars in filenames like rsync would do.
//!
//! rscode converts filenames to and from rsync's escaped form, where bytes
//! that are not printable ASCII appear as `\#ooo` octal tokens.
//!
//! # Crate Structure
//!
//! - [`codec`]: escape rules, transcoder and record framing

/// Re-export codec types.
pub mod codec {
    pub use rscode_codec::*;
}
