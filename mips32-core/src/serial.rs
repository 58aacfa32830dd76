//! Memory-mapped serial transmit/receive device
//!
//! The core sees the device as four word-aligned sub-registers in a fixed
//! window of the address space:
//!
//! | offset | register  | access | contents                      |
//! |--------|-----------|--------|-------------------------------|
//! | 0x0    | rx-valid  | RO     | bit 0: receive data available |
//! | 0x4    | rx-data   | RO     | low byte: received byte       |
//! | 0x8    | tx-ready  | RO     | bit 0: transmitter idle       |
//! | 0xC    | tx-data   | WO     | low byte: byte to transmit    |
//!
//! Writing tx-data raises `tx_enable` for one tick; reading rx-data raises
//! `rx_ack` for one tick and clears rx-valid. The pulses are the whole
//! contract with the external device; its internals are out of scope.

use serde::{Deserialize, Serialize};

/// Byte offset of the rx-valid register within the window
pub const RX_VALID_OFFSET: u32 = 0x0;
/// Byte offset of the rx-data register within the window
pub const RX_DATA_OFFSET: u32 = 0x4;
/// Byte offset of the tx-ready register within the window
pub const TX_READY_OFFSET: u32 = 0x8;
/// Byte offset of the tx-data register within the window
pub const TX_DATA_OFFSET: u32 = 0xC;

/// Serial device state and the one-tick pulse lines
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerialPort {
    rx_data: u8,
    rx_valid: bool,
    tx_data: u8,
    tx_busy: bool,
    /// Raised for the tick in which tx-data was written
    tx_enable: bool,
    /// Raised for the tick in which rx-data was read
    rx_ack: bool,
}

impl SerialPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one of the window sub-registers
    ///
    /// Reads are combinational; the only side effect is the rx-data
    /// acknowledge pulse. Offsets outside the four registers read as 0
    /// (the window is fully decoded at word granularity by the router).
    pub fn read_register(&mut self, offset: u32) -> u32 {
        match offset {
            RX_VALID_OFFSET => self.rx_valid as u32,
            RX_DATA_OFFSET => {
                self.rx_ack = true;
                self.rx_valid = false;
                self.rx_data as u32
            }
            TX_READY_OFFSET => (!self.tx_busy) as u32,
            _ => 0,
        }
    }

    /// Write one of the window sub-registers
    ///
    /// Only tx-data is writable; writes elsewhere are ignored.
    pub fn write_register(&mut self, offset: u32, value: u32) {
        if offset == TX_DATA_OFFSET {
            self.tx_data = value as u8;
            self.tx_enable = true;
            self.tx_busy = true;
        }
    }

    /// Pulse decay at the tick boundary
    pub fn tick(&mut self) {
        self.tx_enable = false;
        self.rx_ack = false;
    }

    // ------------------------------------------------------------------
    // External-collaborator side
    // ------------------------------------------------------------------

    /// Device delivers a received byte
    pub fn push_rx(&mut self, byte: u8) {
        self.rx_data = byte;
        self.rx_valid = true;
    }

    /// Observe the transmit pulse; returns the byte if one was written
    /// this tick and marks the transmitter idle again
    pub fn take_tx(&mut self) -> Option<u8> {
        if self.tx_enable {
            self.tx_busy = false;
            Some(self.tx_data)
        } else {
            None
        }
    }

    /// Current transmit-enable pulse level
    pub fn tx_enable(&self) -> bool {
        self.tx_enable
    }

    /// Current receive-acknowledge pulse level
    pub fn rx_ack(&self) -> bool {
        self.rx_ack
    }
}
