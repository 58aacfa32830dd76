//! Byte and halfword load extraction
//!
//! A load always reads a full word from the router; byte and halfword
//! loads then select one lane of that word and widen it. Byte lane `n` is
//! bits `[8n+7:8n]`; the halfword lane is picked by offset bit 1.

use serde::{Deserialize, Serialize};

/// Which lane a load selects and how it widens
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadKind {
    /// LB: one byte, sign-extended
    ByteSigned,
    /// LBU: one byte, zero-extended
    ByteUnsigned,
    /// LH: one halfword, sign-extended
    HalfSigned,
    /// LHU: one halfword, zero-extended
    HalfUnsigned,
    /// LW and the explicit fallback: the full word, unchanged
    Word,
}

/// Select and widen a lane of `word` per `kind`
///
/// Total over all inputs; `Word` passes the value through, which is also
/// the behavior for any control path that never set a narrower kind.
#[inline]
pub fn extract(word: u32, byte_offset: u32, kind: LoadKind) -> u32 {
    let byte_offset = byte_offset & 0x3;
    match kind {
        LoadKind::ByteSigned => {
            let lane = (word >> (byte_offset * 8)) & 0xFF;
            lane as u8 as i8 as i32 as u32
        }
        LoadKind::ByteUnsigned => (word >> (byte_offset * 8)) & 0xFF,
        LoadKind::HalfSigned => {
            let lane = (word >> ((byte_offset & 0x2) * 8)) & 0xFFFF;
            lane as u16 as i16 as i32 as u32
        }
        LoadKind::HalfUnsigned => (word >> ((byte_offset & 0x2) * 8)) & 0xFFFF,
        LoadKind::Word => word,
    }
}
