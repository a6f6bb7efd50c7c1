//! Byte Compaction decoder
//!
//! Five base-900 codewords carry six bytes. Latch 901 allows a trailing
//! partial group sent one byte per codeword; latch 924 promises the byte count
//! is a multiple of six.

use crate::decoder::charset::Charset;
use crate::decoder::error::Result;
use crate::decoder::stream::CodewordStream;
use crate::decoder::tables::{BYTE_GROUP_BYTES, BYTE_GROUP_CODEWORDS};
use crate::models::codeword::{BYTE_COMPACTION_LATCH, BYTE_COMPACTION_LATCH_6};
use crate::models::{Codeword, DecodedText};

/// Byte Compaction variant, selected by the latch codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteMode {
    /// 901: byte count not a multiple of 6, trailing codewords are raw bytes
    FreeForm,
    /// 924: byte count a multiple of 6
    MultipleOfSix,
}

impl ByteMode {
    /// Variant for a latch codeword, if it is a byte latch
    pub fn from_latch(codeword: u32) -> Option<Self> {
        match codeword {
            BYTE_COMPACTION_LATCH => Some(ByteMode::FreeForm),
            BYTE_COMPACTION_LATCH_6 => Some(ByteMode::MultipleOfSix),
            _ => None,
        }
    }
}

/// Decode Byte Compaction data
pub struct ByteDecoder;

impl ByteDecoder {
    /// Consume a byte run and append it to `out`, transcoded with `charset`
    pub fn decode(
        mode: ByteMode,
        stream: &mut CodewordStream<'_>,
        charset: Charset,
        out: &mut DecodedText,
    ) -> Result<()> {
        let bytes = Self::decode_bytes(mode, stream)?;
        out.push_bytes(&bytes, charset);
        Ok(())
    }

    /// Consume data codewords up to the next control codeword (left unread)
    /// or the end of the data region, returning the bytes they carry
    pub fn decode_bytes(mode: ByteMode, stream: &mut CodewordStream<'_>) -> Result<Vec<u8>> {
        let mut bytes =
            Vec::with_capacity(stream.remaining() / BYTE_GROUP_CODEWORDS * BYTE_GROUP_BYTES + 5);
        let mut group = [0u16; BYTE_GROUP_CODEWORDS];
        let mut count = 0;
        let mut value: u64 = 0;

        while let Some(Codeword::Data(codeword)) = stream.peek() {
            stream.next_raw()?;
            group[count] = codeword;
            count += 1;
            value = value * 900 + codeword as u64;

            if count == BYTE_GROUP_CODEWORDS {
                for j in 0..BYTE_GROUP_BYTES {
                    bytes.push((value >> (8 * (BYTE_GROUP_BYTES - 1 - j))) as u8);
                }
                value = 0;
                count = 0;
            }
        }

        if count > 0 {
            match mode {
                ByteMode::FreeForm => bytes.extend(group[..count].iter().map(|&c| c as u8)),
                ByteMode::MultipleOfSix => log::warn!(
                    "dropping {} trailing codewords of a multiple-of-6 byte run",
                    count
                ),
            }
        }

        log::trace!("byte compaction ({:?}): {} bytes", mode, bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(mode: ByteMode, codewords: &[u32]) -> (Vec<u8>, usize) {
        let mut stream = CodewordStream::new(codewords).unwrap();
        let bytes = ByteDecoder::decode_bytes(mode, &mut stream).unwrap();
        (bytes, stream.position())
    }

    fn expected_group(c: [u64; 5]) -> Vec<u8> {
        let v = (((c[0] * 900 + c[1]) * 900 + c[2]) * 900 + c[3]) * 900 + c[4];
        (0..6).map(|j| (v >> (8 * (5 - j))) as u8).collect()
    }

    #[test]
    fn test_five_codewords_expand_to_six_bytes() {
        let (bytes, pos) = decode(ByteMode::FreeForm, &[6, 1, 2, 3, 4, 5]);
        assert_eq!(bytes, expected_group([1, 2, 3, 4, 5]));
        assert_eq!(pos, 6);
    }

    #[test]
    fn test_known_group() {
        // "alcool" = 0x61 0x6C 0x63 0x6F 0x6F 0x6C
        let (bytes, _) = decode(ByteMode::MultipleOfSix, &[6, 163, 238, 432, 766, 244]);
        assert_eq!(bytes, b"alcool");
    }

    #[test]
    fn test_free_form_remainder_is_raw() {
        let (bytes, pos) = decode(ByteMode::FreeForm, &[9, 1, 2, 3, 4, 5, 65, 66, 67]);
        let mut expected = expected_group([1, 2, 3, 4, 5]);
        expected.extend_from_slice(b"ABC");
        assert_eq!(bytes, expected);
        assert_eq!(pos, 9);
    }

    #[test]
    fn test_stops_before_control_codeword() {
        let (bytes, pos) = decode(ByteMode::FreeForm, &[5, 72, 73, 900, 0]);
        assert_eq!(bytes, b"HI");
        assert_eq!(pos, 3);

        let (bytes, pos) = decode(ByteMode::FreeForm, &[4, 72, 913, 73]);
        assert_eq!(bytes, b"H");
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_multiple_of_six_stops_before_control_codeword() {
        let (bytes, pos) = decode(ByteMode::MultipleOfSix, &[8, 163, 238, 432, 766, 244, 900, 1]);
        assert_eq!(bytes, b"alcool");
        assert_eq!(pos, 6);

        // A partial group cut short by a latch is dropped as well
        let (bytes, pos) = decode(ByteMode::MultipleOfSix, &[6, 163, 238, 902, 11, 12]);
        assert!(bytes.is_empty());
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_multiple_of_six_drops_remainder() {
        let (bytes, pos) = decode(ByteMode::MultipleOfSix, &[8, 163, 238, 432, 766, 244, 1, 2]);
        assert_eq!(bytes, b"alcool");
        assert_eq!(pos, 8);
    }

    #[test]
    fn test_transcodes_with_active_charset() {
        let codewords = [3, 0xC3, 0xA9];
        let mut stream = CodewordStream::new(&codewords).unwrap();
        let mut out = DecodedText::new();
        let utf8 = Charset::Encoding(encoding_rs::UTF_8);
        ByteDecoder::decode(ByteMode::FreeForm, &mut stream, utf8, &mut out).unwrap();
        assert_eq!(out.text(), "\u{e9}");
        assert_eq!(out.raw_bytes(), &[0xC3, 0xA9]);
    }

    #[test]
    fn test_from_latch() {
        assert_eq!(ByteMode::from_latch(901), Some(ByteMode::FreeForm));
        assert_eq!(ByteMode::from_latch(924), Some(ByteMode::MultipleOfSix));
        assert_eq!(ByteMode::from_latch(900), None);
    }
}
