//! Boot handoff and boot diagnostics.
//!
//! `multiboot` describes what a multiboot v1 loader hands the kernel (and
//! what the kernel image must advertise to be loaded at all). `report` turns
//! that handoff into the lines shown on the text console, using the pure
//! digit helpers in `digits`.
#![cfg_attr(not(test), no_std)]

pub mod digits;
pub mod error;
pub mod multiboot;
pub mod report;

pub use error::BootError;
pub use multiboot::{BootHandoff, Header, HeaderFlags, InfoFlags, MemoryInfo, MultibootInfo};
pub use report::ReportConfig;
