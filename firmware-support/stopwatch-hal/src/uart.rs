// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! Driver for the SoC's serial port.
//!
//! The UART CSR block exposes a shared `rxtx` data register followed by
//! the `txfull` and `rxempty` status registers, one 32-bit CSR each.

/// `Uart` is a structure representing the serial port peripheral.
#[derive(Clone)]
pub struct Uart {
    /// Shared receive/transmit data register.
    rxtx_addr: *mut u32,
    /// Transmit-FIFO-full status register.
    txfull_addr: *const u32,
    /// Receive-FIFO-empty status register.
    rxempty_addr: *const u32,
}

pub struct UartStatus {
    rx_empty: bool,
    tx_full: bool,
}

impl Uart {
    /// Create a new `Uart` from the CSR block's base address.
    ///
    /// # Safety
    ///
    /// `base_addr` must point to the UART CSR block of the SoC this
    /// code runs on.
    pub const unsafe fn new(base_addr: *mut u32) -> Uart {
        Uart {
            rxtx_addr: base_addr,
            txfull_addr: base_addr.cast_const().add(1),
            rxempty_addr: base_addr.cast_const().add(2),
        }
    }

    /// UART status register output.
    pub fn read_status(&self) -> UartStatus {
        unsafe {
            UartStatus {
                rx_empty: self.rxempty_addr.read_volatile() != 0,
                tx_full: self.txfull_addr.read_volatile() != 0,
            }
        }
    }

    /// Receive a byte, looping until one is available.
    pub fn receive(&mut self) -> u8 {
        loop {
            if let Some(val) = self.try_receive() {
                return val;
            }
        }
    }

    /// Attempt to receive a byte. Returns `None` if the receive FIFO is
    /// empty.
    pub fn try_receive(&mut self) -> Option<u8> {
        if self.read_status().rx_empty {
            None
        } else {
            unsafe { Some(self.rxtx_addr.read_volatile() as u8) }
        }
    }

    /// Send a byte, looping until the transmit FIFO accepts it.
    pub fn send(&mut self, data: u8) {
        loop {
            if let Ok(()) = self.try_send(data) {
                return;
            }
        }
    }

    /// Attempt to send a byte. Returns an error if the transmit FIFO is
    /// full.
    pub fn try_send(&mut self, data: u8) -> Result<(), ()> {
        if self.read_status().tx_full {
            Err(())
        } else {
            unsafe {
                self.rxtx_addr.write_volatile(data as u32);
                Ok(())
            }
        }
    }
}

impl ufmt::uWrite for Uart {
    type Error = ();

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for b in s.bytes() {
            self.send(b);
        }
        Ok(())
    }
}

// The `log` backend formats with core::fmt, which ufmt cannot drive.
impl core::fmt::Write for Uart {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.bytes() {
            self.send(b);
        }
        Ok(())
    }
}
