use core::fmt;

/// Why a boot handoff was not usable.
///
/// Neither case is fatal: the kernel reports it on screen and keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootError {
    /// EAX did not hold the multiboot bootloader magic.
    InvalidSignature { expected: u32, found: u32 },
    /// The signature was valid but the info pointer was null.
    MissingInfo,
}

impl BootError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidSignature { .. } => "Invalid multiboot signature",
            Self::MissingInfo => "No multiboot information structure",
        }
    }
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSignature { expected, found } => write!(
                f,
                "Invalid multiboot signature: expected 0x{:08X}, found 0x{:08X}",
                expected, found
            ),
            Self::MissingInfo => write!(f, "No multiboot information structure (null pointer)"),
        }
    }
}
