//! Address-space router and bulk data storage
//!
//! The data address space is statically partitioned: everything below
//! [`RAM_BYTES`] routes to bulk RAM, the 16-byte window at [`SERIAL_BASE`]
//! routes to the serial device, and anything else is an address fault —
//! the source behavior there is undefined, so it is rejected explicitly
//! rather than silently aliased.
//!
//! Bulk RAM is a sparse map of word addresses to words; absent words read
//! as zero. Sub-word accesses select a lane of the containing word with
//! the two low address bits (byte lane `n` = bits `[8n+7:8n]`).

use crate::control::AccessWidth;
use crate::error::{CoreError, Result};
use crate::serial::SerialPort;
use std::collections::HashMap;

/// Bulk RAM partition size in bytes (4 MiB window)
pub const RAM_BYTES: u32 = 1 << 22;

/// Base address of the serial device register window
pub const SERIAL_BASE: u32 = 0xFFFF_0000;

/// Size of the serial device register window in bytes
pub const SERIAL_WINDOW_BYTES: u32 = 16;

/// Which partition an address falls in
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Partition {
    Ram,
    Serial,
}

/// Bulk memory plus the memory-mapped serial device
#[derive(Debug, Clone, Default)]
pub struct Memory {
    words: HashMap<u32, u32>,
    serial: SerialPort,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The serial device, for the external collaborator's side
    pub fn serial(&self) -> &SerialPort {
        &self.serial
    }

    pub fn serial_mut(&mut self) -> &mut SerialPort {
        &mut self.serial
    }

    fn route(address: u32) -> Result<Partition> {
        if address < RAM_BYTES {
            Ok(Partition::Ram)
        } else if (SERIAL_BASE..SERIAL_BASE + SERIAL_WINDOW_BYTES).contains(&address) {
            Ok(Partition::Serial)
        } else {
            Err(CoreError::AddressFault { address })
        }
    }

    fn check_alignment(address: u32, width: AccessWidth) -> Result<()> {
        let alignment = width.alignment();
        if address % alignment != 0 {
            return Err(CoreError::MisalignedAccess { address, alignment });
        }
        Ok(())
    }

    /// Read at `address` with the given width
    ///
    /// Reads are unconditional; no enable is needed to observe a value.
    /// Sub-word reads return the addressed lane zero-extended; sign
    /// handling belongs to the load extractor.
    pub fn read(&mut self, address: u32, width: AccessWidth) -> Result<u32> {
        Self::check_alignment(address, width)?;
        match Self::route(address)? {
            Partition::Serial => Ok(self.serial.read_register(address - SERIAL_BASE)),
            Partition::Ram => {
                let word = self.words.get(&(address & !3)).copied().unwrap_or(0);
                Ok(match width {
                    AccessWidth::Word => word,
                    AccessWidth::Half => (word >> ((address & 0x2) * 8)) & 0xFFFF,
                    AccessWidth::Byte => (word >> ((address & 0x3) * 8)) & 0xFF,
                })
            }
        }
    }

    /// Write `value` at `address` with the given width
    ///
    /// Only called when the decoder asserted the write enable; the
    /// orchestrator invokes it at commit time. Sub-word writes merge into
    /// the containing word's addressed lane.
    pub fn write(&mut self, address: u32, width: AccessWidth, value: u32) -> Result<()> {
        Self::check_alignment(address, width)?;
        match Self::route(address)? {
            Partition::Serial => {
                self.serial.write_register(address - SERIAL_BASE, value);
                Ok(())
            }
            Partition::Ram => {
                let key = address & !3;
                let old = self.words.get(&key).copied().unwrap_or(0);
                let new = match width {
                    AccessWidth::Word => value,
                    AccessWidth::Half => {
                        let shift = (address & 0x2) * 8;
                        (old & !(0xFFFF << shift)) | ((value & 0xFFFF) << shift)
                    }
                    AccessWidth::Byte => {
                        let shift = (address & 0x3) * 8;
                        (old & !(0xFF << shift)) | ((value & 0xFF) << shift)
                    }
                };
                if new == 0 {
                    self.words.remove(&key);
                } else {
                    self.words.insert(key, new);
                }
                Ok(())
            }
        }
    }

    /// Preload a byte image into RAM starting at `base`
    ///
    /// Test and loader convenience; fails like a normal store would.
    pub fn load_image(&mut self, base: u32, bytes: &[u8]) -> Result<()> {
        for (i, &byte) in bytes.iter().enumerate() {
            self.write(base + i as u32, AccessWidth::Byte, byte as u32)?;
        }
        Ok(())
    }
}
