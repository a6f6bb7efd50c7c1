//! Text Compaction sub-mode character tables (ISO/IEC 15438, Table 3).

/// Punctuation sub-mode, codes 0-28 (29 latches back to Alpha)
pub const PUNCT_CHARS: [char; 29] = [
    ';', '<', '>', '@', '[', '\\', ']', '_', '`', '~', '!', '\r', '\t', ',', ':', '\n', '-', '.',
    '$', '/', '"', '|', '*', '(', ')', '?', '{', '}', '\'',
];

/// Mixed sub-mode, codes 0-24 (25 and up are space, latches and shifts)
pub const MIXED_CHARS: [char; 25] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '&', '\r', '\t', ',', ':', '#', '-', '.',
    '$', '/', '+', '%', '*', '=', '^',
];

/// Upper bound on codewords in one numeric compaction group
pub const MAX_NUMERIC_CODEWORDS: usize = 15;

/// Codewords carrying a macro block segment index
pub const SEGMENT_INDEX_CODEWORDS: usize = 2;

/// Codewords expanded together by byte compaction
pub const BYTE_GROUP_CODEWORDS: usize = 5;

/// Bytes produced by one byte compaction group
pub const BYTE_GROUP_BYTES: usize = 6;
