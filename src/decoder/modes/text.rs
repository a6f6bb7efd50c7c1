//! Text Compaction decoder
//!
//! Each data codeword carries two 5-bit character codes (`value / 30`,
//! `value % 30`) interpreted under one of six sub-modes.

use crate::decoder::error::Result;
use crate::decoder::stream::CodewordStream;
use crate::decoder::tables::{MIXED_CHARS, PUNCT_CHARS};
use crate::models::{Codeword, ControlCodeword, DecodedText};

// Sub-mode switch codes
const PL: u8 = 25;
const LL: u8 = 27;
const AS: u8 = 27;
const ML: u8 = 28;
const AL: u8 = 28;
const PS: u8 = 29;
const PAL: u8 = 29;

/// Text Compaction sub-mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSubMode {
    /// Uppercase letters
    Alpha,
    /// Lowercase letters
    Lower,
    /// Digits and common symbols
    Mixed,
    /// Punctuation
    Punct,
    /// Alpha for exactly one code
    AlphaShift,
    /// Punct for exactly one code
    PunctShift,
}

/// One unit handed to the sub-mode engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextToken {
    /// Character code in `[0, 29]`
    Code(u8),
    /// Text latch (900) seen mid-run; re-initialises to Alpha
    Reset,
    /// Byte carried by a 913 shift
    Byte(u8),
}

/// Sub-mode state machine.
///
/// Shifts remember a single prior mode; the format never nests them.
#[derive(Debug, Clone)]
pub struct SubModeEngine {
    mode: TextSubMode,
    prior: TextSubMode,
}

impl Default for SubModeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SubModeEngine {
    /// Start in Alpha, as every text run does
    pub fn new() -> Self {
        Self {
            mode: TextSubMode::Alpha,
            prior: TextSubMode::Alpha,
        }
    }

    /// Current sub-mode
    pub fn mode(&self) -> TextSubMode {
        self.mode
    }

    fn shift_to(&mut self, target: TextSubMode) {
        self.prior = self.mode;
        self.mode = target;
    }

    /// Drop a pending shift, returning to the sub-mode that preceded it
    fn revert_shift(&mut self) {
        if matches!(self.mode, TextSubMode::AlphaShift | TextSubMode::PunctShift) {
            self.mode = self.prior;
        }
    }

    /// Feed one token, writing any resulting character to `out`
    pub fn step(&mut self, token: TextToken, out: &mut DecodedText) {
        match token {
            TextToken::Reset => self.mode = TextSubMode::Alpha,
            TextToken::Byte(byte) => {
                out.push_shifted_byte(byte);
                self.revert_shift();
            }
            TextToken::Code(code) => {
                if let Some(ch) = self.resolve(code) {
                    out.push_char(ch);
                }
            }
        }
    }

    fn resolve(&mut self, code: u8) -> Option<char> {
        match self.mode {
            TextSubMode::Alpha => match code {
                0..=25 => Some((b'A' + code) as char),
                26 => Some(' '),
                LL => {
                    self.mode = TextSubMode::Lower;
                    None
                }
                ML => {
                    self.mode = TextSubMode::Mixed;
                    None
                }
                PS => {
                    self.shift_to(TextSubMode::PunctShift);
                    None
                }
                _ => None,
            },
            TextSubMode::Lower => match code {
                0..=25 => Some((b'a' + code) as char),
                26 => Some(' '),
                AS => {
                    self.shift_to(TextSubMode::AlphaShift);
                    None
                }
                ML => {
                    self.mode = TextSubMode::Mixed;
                    None
                }
                PS => {
                    self.shift_to(TextSubMode::PunctShift);
                    None
                }
                _ => None,
            },
            TextSubMode::Mixed => match code {
                0..PL => Some(MIXED_CHARS[code as usize]),
                PL => {
                    self.mode = TextSubMode::Punct;
                    None
                }
                26 => Some(' '),
                LL => {
                    self.mode = TextSubMode::Lower;
                    None
                }
                AL => {
                    self.mode = TextSubMode::Alpha;
                    None
                }
                PS => {
                    self.shift_to(TextSubMode::PunctShift);
                    None
                }
                _ => None,
            },
            TextSubMode::Punct => match code {
                0..PAL => Some(PUNCT_CHARS[code as usize]),
                PAL => {
                    self.mode = TextSubMode::Alpha;
                    None
                }
                _ => None,
            },
            TextSubMode::AlphaShift => {
                self.mode = self.prior;
                match code {
                    0..=25 => Some((b'A' + code) as char),
                    26 => Some(' '),
                    _ => None,
                }
            }
            TextSubMode::PunctShift => {
                self.mode = self.prior;
                match code {
                    0..PAL => Some(PUNCT_CHARS[code as usize]),
                    PAL => {
                        self.mode = TextSubMode::Alpha;
                        None
                    }
                    _ => None,
                }
            }
        }
    }
}

/// Run the sub-mode engine over a token sequence, starting in Alpha
pub fn decode_text_tokens(tokens: &[TextToken], out: &mut DecodedText) {
    let mut engine = SubModeEngine::new();
    for &token in tokens {
        engine.step(token, out);
    }
}

/// Decode Text Compaction data
pub struct TextDecoder;

impl TextDecoder {
    /// Consume a text run starting at the cursor and append its text to `out`.
    ///
    /// Stops in front of any latch, ECI or macro marker that belongs to
    /// another mode, leaving it for the dispatcher. Reserved codewords are
    /// skipped.
    pub fn decode(stream: &mut CodewordStream<'_>, out: &mut DecodedText) -> Result<()> {
        let mut tokens = Vec::with_capacity(stream.remaining() * 2);

        while let Some(codeword) = stream.peek() {
            match codeword {
                Codeword::Data(value) => {
                    stream.next_raw()?;
                    tokens.push(TextToken::Code((value / 30) as u8));
                    tokens.push(TextToken::Code((value % 30) as u8));
                }
                Codeword::Control(ControlCodeword::TextLatch) => {
                    stream.next_raw()?;
                    tokens.push(TextToken::Reset);
                }
                Codeword::Control(ControlCodeword::ByteShift) => {
                    stream.next_raw()?;
                    let byte = stream.next_raw()?;
                    tokens.push(TextToken::Byte(byte as u8));
                }
                Codeword::Control(control) if control.ends_compaction_run() => break,
                Codeword::Control(control) => {
                    stream.next_raw()?;
                    log::warn!(
                        "ignoring reserved codeword {} inside text compaction at position {}",
                        control.value(),
                        stream.position() - 1
                    );
                }
            }
        }

        log::trace!("text compaction: {} tokens", tokens.len());
        decode_text_tokens(&tokens, out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tokens: &[TextToken]) -> String {
        let mut out = DecodedText::new();
        decode_text_tokens(tokens, &mut out);
        out.into_parts().0
    }

    fn codes(values: &[u8]) -> Vec<TextToken> {
        values.iter().map(|&c| TextToken::Code(c)).collect()
    }

    fn decode_codewords(codewords: &[u32]) -> (String, usize) {
        let mut stream = CodewordStream::new(codewords).unwrap();
        let mut out = DecodedText::new();
        TextDecoder::decode(&mut stream, &mut out).unwrap();
        (out.into_parts().0, stream.position())
    }

    #[test]
    fn test_alpha_and_space() {
        assert_eq!(run(&codes(&[7, 8, 26, 0])), "HI A");
    }

    #[test]
    fn test_punct_shift_reverts_to_alpha() {
        // A, PS, '!', B
        assert_eq!(run(&codes(&[0, PS, 10, 1])), "A!B");
    }

    #[test]
    fn test_alpha_shift_reverts_to_lower() {
        // LL, a, AS, B, c
        assert_eq!(run(&codes(&[LL, 0, AS, 1, 2])), "aBc");
    }

    #[test]
    fn test_punct_shift_reverts_to_mixed() {
        // ML, 1, PS, ';', 2
        assert_eq!(run(&codes(&[ML, 1, PS, 0, 2])), "1;2");
    }

    #[test]
    fn test_mixed_and_punct_latches() {
        // ML, 9, PL, '@', PAL, Z
        assert_eq!(run(&codes(&[ML, 9, PL, 3, PAL, 25])), "9@Z");
        // ML, space, LL, b, ML, AL, C
        assert_eq!(run(&codes(&[ML, 26, LL, 1, ML, AL, 2])), " bC");
    }

    #[test]
    fn test_punct_shift_pal_overrides_revert() {
        // LL, PS, PAL, A (uppercase: PAL latched Alpha)
        assert_eq!(run(&codes(&[LL, PS, PAL, 0])), "A");
    }

    #[test]
    fn test_reset_forces_alpha() {
        let mut tokens = codes(&[LL, 0]);
        tokens.push(TextToken::Reset);
        tokens.extend(codes(&[0]));
        assert_eq!(run(&tokens), "aA");
    }

    #[test]
    fn test_shifted_byte_reverts_shift() {
        // LL, PS (padding), byte, a
        let mut tokens = codes(&[LL, PS]);
        tokens.push(TextToken::Byte(b'#'));
        tokens.extend(codes(&[0]));
        assert_eq!(run(&tokens), "#a");
    }

    #[test]
    fn test_engine_tracks_mode() {
        let mut engine = SubModeEngine::new();
        let mut out = DecodedText::new();
        engine.step(TextToken::Code(LL), &mut out);
        assert_eq!(engine.mode(), TextSubMode::Lower);
        engine.step(TextToken::Code(AS), &mut out);
        assert_eq!(engine.mode(), TextSubMode::AlphaShift);
        engine.step(TextToken::Code(3), &mut out);
        assert_eq!(engine.mode(), TextSubMode::Lower);
        assert_eq!(out.text(), "D");
    }

    #[test]
    fn test_decoder_splits_codewords() {
        // 7 * 30 + 8 = 218 -> "HI"
        let (text, pos) = decode_codewords(&[2, 218]);
        assert_eq!(text, "HI");
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_decoder_stops_before_foreign_latch() {
        let (text, pos) = decode_codewords(&[4, 218, 902, 1]);
        assert_eq!(text, "HI");
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_decoder_stops_before_eci() {
        for eci in [925, 926, 927] {
            let (text, pos) = decode_codewords(&[5, 218, eci, 26, 29]);
            assert_eq!(text, "HI");
            assert_eq!(pos, 2);
        }
    }

    #[test]
    fn test_decoder_skips_reserved_codewords() {
        let (text, pos) = decode_codewords(&[4, 218, 905, 29]);
        assert_eq!(text, "HIA");
        assert_eq!(pos, 4);
    }

    #[test]
    fn test_decoder_byte_shift() {
        // "A" then PS padding (0 * 30 + 29), shift byte 'z'
        let (text, pos) = decode_codewords(&[4, 29, 913, b'z' as u32]);
        assert_eq!(text, "Az");
        assert_eq!(pos, 4);
    }

    #[test]
    fn test_decoder_byte_shift_truncated() {
        let codewords = [3, 29, 913, 65];
        let mut stream = CodewordStream::new(&codewords).unwrap();
        let mut out = DecodedText::new();
        assert!(TextDecoder::decode(&mut stream, &mut out).is_err());
    }

    #[test]
    fn test_decoder_reinitialises_on_text_latch() {
        // LL + a (27 * 30 + 0), 900, A (0 * 30 + 26 => "A ")
        let (text, _) = decode_codewords(&[4, 810, 900, 26]);
        assert_eq!(text, "aA ");
    }
}
