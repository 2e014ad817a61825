//! Hardware Abstraction Layer.
//!
//! Everything here talks to x86 I/O ports. The port instructions exist in
//! both 32-bit and 64-bit mode, so the crate builds for the i686 kernel and
//! for host-side unit tests alike (the tests never touch a real port).
#![cfg_attr(not(test), no_std)]

pub mod crtc;
pub mod port;
pub mod serial;

pub use serial::Serial;
