//! Decode output types

use crate::decoder::charset::Charset;

/// Macro PDF417 (structured append) metadata
///
/// Exposed as read; segments are never reassembled here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredAppend {
    /// Position of this symbol within the logical file
    pub segment_index: u32,
    /// File id shared by every segment
    pub file_id: String,
    /// True when the macro block carried a terminator
    pub last_segment: bool,
    /// Raw codewords of the optional field span, if one was present
    pub optional_fields: Option<Vec<u32>>,
    present: bool,
}

impl StructuredAppend {
    /// Check if a macro control block was decoded
    pub fn is_present(&self) -> bool {
        self.present
    }

    pub(crate) fn mark_present(&mut self) {
        self.present = true;
    }
}

/// Decoded PDF417 payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    /// Decoded text
    pub text: String,
    /// Bytes produced by byte compaction and byte shifts, in stream order
    pub raw_bytes: Vec<u8>,
    /// Error correction level label, as supplied by the caller
    pub ec_level: String,
    /// Character set in effect when decoding finished
    pub charset: Charset,
    /// Structured append metadata (default when no macro block occurs)
    pub structured_append: StructuredAppend,
}

impl DecodeResult {
    /// Create a new result
    pub fn new(
        text: String,
        raw_bytes: Vec<u8>,
        ec_level: u8,
        charset: Charset,
        structured_append: StructuredAppend,
    ) -> Self {
        Self {
            text,
            raw_bytes,
            ec_level: ec_level.to_string(),
            charset,
            structured_append,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_structured_append() {
        let meta = StructuredAppend::default();
        assert!(!meta.is_present());
        assert_eq!(meta.segment_index, 0);
        assert!(meta.file_id.is_empty());
        assert!(!meta.last_segment);
        assert!(meta.optional_fields.is_none());
    }

    #[test]
    fn test_ec_level_label() {
        let result = DecodeResult::new(
            "A".to_string(),
            Vec::new(),
            5,
            Charset::Latin1,
            StructuredAppend::default(),
        );
        assert_eq!(result.ec_level, "5");
    }
}
