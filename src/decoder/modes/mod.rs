//! PDF417 compaction mode decoders
//!
//! - Text: two character codes per codeword across six sub-modes
//! - Byte: five codewords per six bytes, with a raw-byte tail for latch 901
//! - Numeric: base-900 groups of up to fifteen codewords
//! - Macro block: structured append metadata

pub mod byte;
pub mod macro_block;
pub mod numeric;
pub mod text;

use crate::models::{Codeword, ControlCodeword};
use byte::ByteMode;

/// What the dispatcher does with a mode codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 900
    Text,
    /// 901 / 924
    Byte(ByteMode),
    /// 913 outside text compaction: one byte
    ByteShift,
    /// 902
    Numeric,
    /// 927: the next codeword selects the charset
    EciCharset,
    /// 926: two parameter codewords, skipped
    EciGeneralPurpose,
    /// 925: one parameter codeword, skipped
    EciUserDefined,
    /// 928
    MacroBlock,
    /// 922 / 923, only valid inside a macro block
    StrayMacroMarker(u32),
}

impl Mode {
    /// Mode selected by a codeword.
    ///
    /// `None` means the codeword is not a mode codeword at all (a data value
    /// or reserved control); the dispatcher then decodes text starting at it.
    pub fn from_codeword(value: u32) -> Option<Mode> {
        let Codeword::Control(control) = Codeword::classify(value) else {
            return None;
        };
        match control {
            ControlCodeword::TextLatch => Some(Mode::Text),
            ControlCodeword::ByteLatch | ControlCodeword::ByteLatch6 => {
                ByteMode::from_latch(value).map(Mode::Byte)
            }
            ControlCodeword::ByteShift => Some(Mode::ByteShift),
            ControlCodeword::NumericLatch => Some(Mode::Numeric),
            ControlCodeword::EciCharset => Some(Mode::EciCharset),
            ControlCodeword::EciGeneralPurpose => Some(Mode::EciGeneralPurpose),
            ControlCodeword::EciUserDefined => Some(Mode::EciUserDefined),
            ControlCodeword::MacroControlBlock => Some(Mode::MacroBlock),
            ControlCodeword::MacroOptionalField | ControlCodeword::MacroTerminator => {
                Some(Mode::StrayMacroMarker(value))
            }
            ControlCodeword::Reserved(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_codeword() {
        assert_eq!(Mode::from_codeword(900), Some(Mode::Text));
        assert_eq!(
            Mode::from_codeword(924),
            Some(Mode::Byte(ByteMode::MultipleOfSix))
        );
        assert_eq!(Mode::from_codeword(922), Some(Mode::StrayMacroMarker(922)));
        assert_eq!(Mode::from_codeword(5), None);
        assert_eq!(Mode::from_codeword(910), None);
    }
}
