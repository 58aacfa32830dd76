//! Typed failures of the execution core
//!
//! Unrecognized instruction encodings are deliberately *not* errors: the
//! control unit absorbs them with an all-safe default vector. What does get
//! surfaced are the conditions the architecture leaves undefined — accesses
//! outside every mapped partition and misaligned accesses — as distinct
//! variants, so a caller can tell them apart instead of seeing silently
//! aliased state.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Data access outside both bulk memory and the serial window
    #[error("address fault: {address:#010x} is outside every mapped partition")]
    AddressFault { address: u32 },

    /// Sub-word or word access whose low address bits violate the width
    #[error("misaligned access: address {address:#010x}, alignment {alignment}")]
    MisalignedAccess { address: u32, alignment: u32 },

    /// Instruction fetch from a non-word-aligned PC
    #[error("misaligned fetch: pc {pc:#010x}")]
    MisalignedFetch { pc: u32 },

    /// Instruction fetch outside the loaded program image
    #[error("fetch fault: pc {pc:#010x} is outside the program image")]
    FetchFault { pc: u32 },
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_fault_display() {
        let err = CoreError::AddressFault {
            address: 0xDEAD_BEEF,
        };
        assert_eq!(
            err.to_string(),
            "address fault: 0xdeadbeef is outside every mapped partition"
        );
    }

    #[test]
    fn test_misaligned_access_display() {
        let err = CoreError::MisalignedAccess {
            address: 0x1001,
            alignment: 4,
        };
        assert_eq!(
            err.to_string(),
            "misaligned access: address 0x00001001, alignment 4"
        );
    }

    #[test]
    fn test_misaligned_fetch_display() {
        let err = CoreError::MisalignedFetch { pc: 0x0040_0002 };
        assert_eq!(err.to_string(), "misaligned fetch: pc 0x00400002");
    }

    #[test]
    fn test_fetch_fault_display() {
        let err = CoreError::FetchFault { pc: 0x0000_0000 };
        assert_eq!(
            err.to_string(),
            "fetch fault: pc 0x00000000 is outside the program image"
        );
    }

    #[test]
    fn test_variants_are_distinguishable() {
        let fault = CoreError::AddressFault { address: 0x1000 };
        let misaligned = CoreError::MisalignedAccess {
            address: 0x1000,
            alignment: 4,
        };
        assert_ne!(fault, misaligned);
    }
}
