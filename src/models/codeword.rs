//! Codeword classification for the PDF417 data region.
//!
//! Values in `[0, 900)` carry data; values in `[900, 929]` are control
//! codewords (latches, shifts, ECI and macro markers).

/// First control codeword value; everything below is a data value
pub const CONTROL_BASE: u32 = 900;

/// Latch to Text Compaction (Alpha sub-mode)
pub const TEXT_COMPACTION_LATCH: u32 = 900;
/// Latch to Byte Compaction, total byte count not a multiple of 6
pub const BYTE_COMPACTION_LATCH: u32 = 901;
/// Latch to Numeric Compaction
pub const NUMERIC_COMPACTION_LATCH: u32 = 902;
/// Shift to Byte Compaction for exactly one codeword
pub const BYTE_SHIFT: u32 = 913;
/// Macro PDF417 terminator (last segment)
pub const MACRO_TERMINATOR: u32 = 922;
/// Start of the Macro PDF417 optional field span
pub const MACRO_OPTIONAL_FIELD: u32 = 923;
/// Latch to Byte Compaction, total byte count a multiple of 6
pub const BYTE_COMPACTION_LATCH_6: u32 = 924;
/// ECI user-defined (one parameter codeword)
pub const ECI_USER_DEFINED: u32 = 925;
/// ECI general purpose (two parameter codewords)
pub const ECI_GENERAL_PURPOSE: u32 = 926;
/// ECI character set (one parameter codeword)
pub const ECI_CHARSET: u32 = 927;
/// Begin Macro PDF417 control block
pub const MACRO_CONTROL_BLOCK: u32 = 928;

/// A control codeword, named by its role in the format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlCodeword {
    /// 900
    TextLatch,
    /// 901
    ByteLatch,
    /// 902
    NumericLatch,
    /// 913
    ByteShift,
    /// 922
    MacroTerminator,
    /// 923
    MacroOptionalField,
    /// 924
    ByteLatch6,
    /// 925
    EciUserDefined,
    /// 926
    EciGeneralPurpose,
    /// 927
    EciCharset,
    /// 928
    MacroControlBlock,
    /// Any other value `>= 900` with no meaning to this decoder
    Reserved(u32),
}

impl ControlCodeword {
    /// Map a value `>= 900` to its control role
    pub fn from_value(value: u32) -> Self {
        match value {
            TEXT_COMPACTION_LATCH => Self::TextLatch,
            BYTE_COMPACTION_LATCH => Self::ByteLatch,
            NUMERIC_COMPACTION_LATCH => Self::NumericLatch,
            BYTE_SHIFT => Self::ByteShift,
            MACRO_TERMINATOR => Self::MacroTerminator,
            MACRO_OPTIONAL_FIELD => Self::MacroOptionalField,
            BYTE_COMPACTION_LATCH_6 => Self::ByteLatch6,
            ECI_USER_DEFINED => Self::EciUserDefined,
            ECI_GENERAL_PURPOSE => Self::EciGeneralPurpose,
            ECI_CHARSET => Self::EciCharset,
            MACRO_CONTROL_BLOCK => Self::MacroControlBlock,
            other => Self::Reserved(other),
        }
    }

    /// Raw codeword value
    pub fn value(&self) -> u32 {
        match self {
            Self::TextLatch => TEXT_COMPACTION_LATCH,
            Self::ByteLatch => BYTE_COMPACTION_LATCH,
            Self::NumericLatch => NUMERIC_COMPACTION_LATCH,
            Self::ByteShift => BYTE_SHIFT,
            Self::MacroTerminator => MACRO_TERMINATOR,
            Self::MacroOptionalField => MACRO_OPTIONAL_FIELD,
            Self::ByteLatch6 => BYTE_COMPACTION_LATCH_6,
            Self::EciUserDefined => ECI_USER_DEFINED,
            Self::EciGeneralPurpose => ECI_GENERAL_PURPOSE,
            Self::EciCharset => ECI_CHARSET,
            Self::MacroControlBlock => MACRO_CONTROL_BLOCK,
            Self::Reserved(v) => *v,
        }
    }

    /// Latches, ECIs and macro markers that end a text, byte or numeric run.
    ///
    /// Text compaction hands these back to the dispatcher without consuming them.
    pub fn ends_compaction_run(&self) -> bool {
        matches!(
            self,
            Self::ByteLatch
                | Self::ByteLatch6
                | Self::NumericLatch
                | Self::MacroControlBlock
                | Self::MacroOptionalField
                | Self::MacroTerminator
                | Self::EciCharset
                | Self::EciGeneralPurpose
                | Self::EciUserDefined
        )
    }
}

/// One codeword from the data region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codeword {
    /// Data value in `[0, 900)`
    Data(u16),
    /// Control codeword `>= 900`
    Control(ControlCodeword),
}

impl Codeword {
    /// Split a raw value into data or control
    pub fn classify(value: u32) -> Self {
        if value < CONTROL_BASE {
            Codeword::Data(value as u16)
        } else {
            Codeword::Control(ControlCodeword::from_value(value))
        }
    }

    /// Check if this is a data value
    pub fn is_data(&self) -> bool {
        matches!(self, Codeword::Data(_))
    }
}
