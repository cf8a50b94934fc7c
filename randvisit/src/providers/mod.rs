//======================================================================
// src/providers/mod.rs
// Reference round-function providers. Any type satisfying the
// RoundFunction contract is interchangeable without touching the
// engine; these are the shipped exemplars.
//======================================================================

mod fnv;
mod xoro;

pub use fnv::Fnv1aRound;
pub use xoro::XoroRound;

#[cfg(target_arch = "x86_64")]
mod hw;

#[cfg(target_arch = "x86_64")]
pub use hw::{AesRound, Crc32Round, ShaRound};
