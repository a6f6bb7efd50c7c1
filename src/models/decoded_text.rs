//! Output accumulator for the mode decoders

use crate::decoder::charset::Charset;

/// Append-only output accumulator shared by the mode decoders.
///
/// Exactly one decoder holds it (by `&mut`) at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedText {
    text: String,
    raw_bytes: Vec<u8>,
}

impl DecodedText {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single decoded character
    pub fn push_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Append already decoded text
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Append a run of bytes, transcoded with `charset`
    pub fn push_bytes(&mut self, bytes: &[u8], charset: Charset) {
        if bytes.is_empty() {
            return;
        }
        self.raw_bytes.extend_from_slice(bytes);
        self.text.push_str(&charset.transcode(bytes));
    }

    /// Append a byte shifted in from text compaction (taken as ISO-8859-1)
    pub fn push_shifted_byte(&mut self, byte: u8) {
        self.raw_bytes.push(byte);
        self.text.push(byte as char);
    }

    /// Check if no text has been produced
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text decoded so far
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bytes produced so far
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    /// Split into text and raw bytes
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.text, self.raw_bytes)
    }
}
