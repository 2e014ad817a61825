//! x86 port I/O primitives.
//!
//! `inb`/`outb` are the raw instructions; [`Port`] binds one address so a
//! device driver can keep its registers as named constants.

/// Write a byte to an x86 I/O port.
///
/// # Safety
///
/// Writing to an arbitrary I/O port can have side effects on hardware.
/// The caller must ensure the port and value are valid.
#[inline]
pub unsafe fn outb(port: u16, value: u8) {
    core::arch::asm!(
        "out dx, al",
        in("dx") port,
        in("al") value,
        options(nomem, nostack, preserves_flags)
    );
}

/// Read a byte from an x86 I/O port.
///
/// # Safety
///
/// Reading from an arbitrary I/O port can have side effects on hardware.
/// The caller must ensure the port is valid.
#[inline]
pub unsafe fn inb(port: u16) -> u8 {
    let value: u8;
    core::arch::asm!(
        "in al, dx",
        in("dx") port,
        out("al") value,
        options(nomem, nostack, preserves_flags)
    );
    value
}

/// A single 8-bit I/O port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Port(u16);

impl Port {
    pub const fn new(address: u16) -> Self {
        Self(address)
    }

    /// The port `offset` registers above this one.
    pub const fn offset(self, offset: u16) -> Self {
        Self(self.0 + offset)
    }

    pub const fn address(self) -> u16 {
        self.0
    }

    /// # Safety
    ///
    /// See [`inb`].
    #[inline]
    pub unsafe fn read(self) -> u8 {
        inb(self.0)
    }

    /// # Safety
    ///
    /// See [`outb`].
    #[inline]
    pub unsafe fn write(self, value: u8) {
        outb(self.0, value)
    }
}
