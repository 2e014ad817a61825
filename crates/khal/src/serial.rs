//! Serial port (COM1 UART 16550) driver.
//!
//! Polled, 115200 baud, 8N1. This is the kernel's log channel; the text
//! console is reserved for the boot report.

use core::fmt;
use spin::mutex::SpinMutex;

use crate::port::Port;

/// COM1 base port address
pub const COM1_PORT: u16 = 0x3F8;

// Register offsets from the base port
const DATA: u16 = 0; // TX/RX, or divisor low when DLAB=1
const INT_ENABLE: u16 = 1; // or divisor high when DLAB=1
const FIFO_CTRL: u16 = 2;
const LINE_CTRL: u16 = 3;
const MODEM_CTRL: u16 = 4;
const LINE_STATUS: u16 = 5;

const LINE_CTRL_DLAB: u8 = 0x80;
const LINE_CTRL_8N1: u8 = 0x03;
const LSR_TX_EMPTY: u8 = 1 << 5;
const LOOPBACK_PROBE: u8 = 0xAE;

/// A 16550 UART.
pub struct Serial {
    base: Port,
    initialized: bool,
}

impl Serial {
    /// Create an uninitialized port at `base`. Writes are dropped until
    /// [`Serial::init`] has verified the chip.
    pub const fn new(base: u16) -> Self {
        Self {
            base: Port::new(base),
            initialized: false,
        }
    }

    /// Initialize the UART (115200 baud, 8N1) and run a loopback self-test.
    ///
    /// Returns whether the chip echoed the probe byte. A missing or faulty
    /// UART leaves the port disabled.
    pub fn init(&mut self) -> bool {
        let base = self.base;
        let reg = |offset| base.offset(offset);

        // SAFETY: the standard 16550 init sequence on a port range owned by
        // this driver.
        unsafe {
            // Disable all interrupts
            reg(INT_ENABLE).write(0x00);

            // Divisor 1 = 115200 baud
            reg(LINE_CTRL).write(LINE_CTRL_DLAB);
            reg(DATA).write(0x01);
            reg(INT_ENABLE).write(0x00);

            // 8 bits, no parity, one stop bit (clears DLAB)
            reg(LINE_CTRL).write(LINE_CTRL_8N1);

            // Enable FIFO, clear them, with 14-byte threshold
            reg(FIFO_CTRL).write(0xC7);

            // Loopback mode, send a probe byte and expect it back
            reg(MODEM_CTRL).write(0x1E);
            reg(DATA).write(LOOPBACK_PROBE);
            if reg(DATA).read() != LOOPBACK_PROBE {
                self.initialized = false;
                return false;
            }

            // Normal operation (OUT1, OUT2, RTS, DTR); we keep polling
            reg(MODEM_CTRL).write(0x0F);
        }

        self.initialized = true;
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn is_transmit_empty(&self) -> bool {
        // SAFETY: reading the line status register has no side effects.
        unsafe { self.base.offset(LINE_STATUS).read() & LSR_TX_EMPTY != 0 }
    }

    /// Write a byte, spinning until the transmit holding register is free.
    pub fn write_byte(&self, byte: u8) {
        if !self.initialized {
            return;
        }

        while !self.is_transmit_empty() {
            core::hint::spin_loop();
        }

        // SAFETY: the UART reported an empty transmit register.
        unsafe {
            self.base.offset(DATA).write(byte);
        }
    }

    pub fn write_str(&self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }
}

impl fmt::Write for Serial {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Serial::write_str(self, s);
        Ok(())
    }
}

/// Global serial port instance (COM1). A plain spinlock, so the panic path
/// can reach the port through the raw pointer without unlocking.
static SERIAL: SpinMutex<Serial> = SpinMutex::new(Serial::new(COM1_PORT));

/// Initialize the global serial port. Returns whether the UART responded.
pub fn init() -> bool {
    SERIAL.lock().init()
}

/// Write a string to the serial port
pub fn write_str(s: &str) {
    SERIAL.lock().write_str(s);
}

/// Write formatted arguments to the serial port
pub fn write_fmt(args: fmt::Arguments) {
    use fmt::Write;
    // Serial::write_str never fails
    let _ = SERIAL.lock().write_fmt(args);
}

/// Write formatted arguments without taking the lock.
///
/// # Safety
///
/// Only for the panic path, where the lock may be held by the code that
/// panicked. Output may interleave with a concurrent writer.
pub unsafe fn force_write_fmt(args: fmt::Arguments) {
    use fmt::Write;
    // SAFETY: forwarded to the caller.
    let serial = unsafe { &mut *SERIAL.as_mut_ptr() };
    let _ = serial.write_fmt(args);
}
