//======================================================================
// src/error.rs
// Construction-time configuration errors. The hot paths (encrypt,
// decrypt, iteration) are infallible by construction.
//======================================================================

use std::fmt;

/// Errors reported when building a cipher or walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The Feistel split needs an even bit width.
    OddWidth(u32),
    /// The requested domain needs more bits than the engine supports.
    /// Construction fails immediately; widths are never clamped.
    WidthExceeded { bits: u32, max: u32 },
    /// A pre-seeded cipher is too narrow for the requested domain.
    DomainTooLarge { domain: u64, nbits: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OddWidth(bits) => {
                write!(f, "bit width {bits} is odd; the Feistel split needs an even width")
            }
            Error::WidthExceeded { bits, max } => {
                write!(f, "bit width {bits} exceeds the supported maximum of {max}")
            }
            Error::DomainTooLarge { domain, nbits } => {
                write!(f, "domain size {domain} does not fit in a {nbits}-bit cipher")
            }
        }
    }
}

impl std::error::Error for Error {}
