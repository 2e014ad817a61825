//! Multiboot v1 structures.
//!
//! <https://www.gnu.org/software/grub/manual/multiboot/multiboot.html>
//!
//! The loader scans the first 8 KiB of the image for a [`Header`], loads the
//! kernel, and jumps to it in 32-bit protected mode with EAX holding
//! [`BOOTLOADER_MAGIC`] and EBX pointing at a [`MultibootInfo`].

use bitflags::bitflags;

use crate::error::BootError;

/// Magic the kernel image advertises in its header.
pub const HEADER_MAGIC: u32 = 0x1BADB002;

/// Magic a compliant loader leaves in EAX.
pub const BOOTLOADER_MAGIC: u32 = 0x2BADB002;

bitflags! {
    /// Features the kernel requests from the loader.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct HeaderFlags: u32 {
        /// Page-align boot modules.
        const ALIGN = 1 << 0;
        /// Provide `mem_lower`/`mem_upper` (and a memory map if available).
        const MEMINFO = 1 << 1;
        /// Provide video mode information.
        const VIDEO = 1 << 2;
    }
}

bitflags! {
    /// Which fields of [`MultibootInfo`] the loader filled in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InfoFlags: u32 {
        const MEMORY = 1 << 0;
        const BOOT_DEVICE = 1 << 1;
        const CMDLINE = 1 << 2;
        const MODULES = 1 << 3;
        const AOUT_SYMBOLS = 1 << 4;
        const ELF_SECTIONS = 1 << 5;
        const MEMORY_MAP = 1 << 6;
        const DRIVES = 1 << 7;
        const CONFIG_TABLE = 1 << 8;
        const BOOT_LOADER_NAME = 1 << 9;
        const APM_TABLE = 1 << 10;
        const VBE = 1 << 11;
        const FRAMEBUFFER = 1 << 12;
    }
}

/// The header embedded in the kernel image.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Header {
    magic: u32,
    flags: u32,
    checksum: u32,
}

impl Header {
    pub const fn new(flags: HeaderFlags) -> Self {
        let flags = flags.bits();
        Self {
            magic: HEADER_MAGIC,
            flags,
            checksum: 0u32.wrapping_sub(HEADER_MAGIC.wrapping_add(flags)),
        }
    }

    pub const fn flags(&self) -> HeaderFlags {
        HeaderFlags::from_bits_retain(self.flags)
    }

    /// magic + flags + checksum must be zero mod 2^32.
    pub const fn is_valid(&self) -> bool {
        self.magic == HEADER_MAGIC
            && self
                .magic
                .wrapping_add(self.flags)
                .wrapping_add(self.checksum)
                == 0
    }
}

/// The leading fields of the loader's information structure.
///
/// Only the prefix this kernel reads is declared; the loader's structure is
/// larger.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct MultibootInfo {
    flags: u32,
    /// KiB of conventional memory below 1 MiB.
    mem_lower: u32,
    /// KiB of memory above 1 MiB, up to the first hole.
    mem_upper: u32,
}

impl MultibootInfo {
    pub const fn new(flags: InfoFlags, mem_lower: u32, mem_upper: u32) -> Self {
        Self {
            flags: flags.bits(),
            mem_lower,
            mem_upper,
        }
    }

    pub const fn flags(&self) -> InfoFlags {
        InfoFlags::from_bits_retain(self.flags)
    }

    /// Memory sizes, if the loader set [`InfoFlags::MEMORY`].
    pub const fn memory(&self) -> Option<MemoryInfo> {
        if self.flags & InfoFlags::MEMORY.bits() != 0 {
            Some(MemoryInfo {
                lower_kb: self.mem_lower,
                upper_kb: self.mem_upper,
            })
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    pub lower_kb: u32,
    pub upper_kb: u32,
}

/// Register state handed over by the loader.
#[derive(Debug, Clone, Copy)]
pub struct BootHandoff<'a> {
    magic: u32,
    info: Option<&'a MultibootInfo>,
}

impl<'a> BootHandoff<'a> {
    pub const fn new(magic: u32, info: Option<&'a MultibootInfo>) -> Self {
        Self { magic, info }
    }

    /// Builds a handoff from the raw EAX/EBX values.
    ///
    /// # Safety
    ///
    /// `info` must be null or point to a readable info structure that stays
    /// valid for `'a`.
    pub unsafe fn from_raw(magic: u32, info: *const MultibootInfo) -> Self {
        Self::new(magic, info.as_ref())
    }

    pub const fn magic(&self) -> u32 {
        self.magic
    }

    pub const fn info(&self) -> Option<&'a MultibootInfo> {
        self.info
    }

    pub const fn check_signature(&self) -> Result<(), BootError> {
        if self.magic == BOOTLOADER_MAGIC {
            Ok(())
        } else {
            Err(BootError::InvalidSignature {
                expected: BOOTLOADER_MAGIC,
                found: self.magic,
            })
        }
    }

    /// The info structure, if the signature matches and the pointer is set.
    pub fn validate(&self) -> Result<&'a MultibootInfo, BootError> {
        self.check_signature()?;
        self.info.ok_or(BootError::MissingInfo)
    }
}
