//! Numeric Compaction decoder
//!
//! Up to 15 base-900 codewords form one group; each group decodes to a
//! decimal string behind a leading `1` sentinel digit.

use crate::decoder::base900::decode_base900_to_base10;
use crate::decoder::error::Result;
use crate::decoder::stream::CodewordStream;
use crate::decoder::tables::MAX_NUMERIC_CODEWORDS;
use crate::models::{Codeword, ControlCodeword, DecodedText};

/// Decode Numeric Compaction data
pub struct NumericDecoder;

impl NumericDecoder {
    /// Consume a numeric run and append its digits to `out`.
    ///
    /// A group is flushed when it reaches 15 codewords, at a control
    /// codeword, or at the end of the data region. Re-invoking the latch
    /// (902) inside the run closes the current group and starts another.
    pub fn decode(stream: &mut CodewordStream<'_>, out: &mut DecodedText) -> Result<()> {
        let mut group: Vec<u16> = Vec::with_capacity(MAX_NUMERIC_CODEWORDS);

        loop {
            match stream.peek() {
                Some(Codeword::Data(codeword)) => {
                    stream.next_raw()?;
                    group.push(codeword);
                    if group.len() == MAX_NUMERIC_CODEWORDS {
                        Self::flush(&mut group, out)?;
                    }
                }
                Some(Codeword::Control(ControlCodeword::NumericLatch)) => {
                    stream.next_raw()?;
                    Self::flush(&mut group, out)?;
                }
                _ => break,
            }
        }

        Self::flush(&mut group, out)
    }

    fn flush(group: &mut Vec<u16>, out: &mut DecodedText) -> Result<()> {
        if group.is_empty() {
            return Ok(());
        }
        let digits = decode_base900_to_base10(group)?;
        log::trace!("numeric group of {} codewords -> {} digits", group.len(), digits.len());
        out.push_str(&digits);
        group.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::error::FormatError;

    fn decode(codewords: &[u32]) -> Result<(String, usize)> {
        let mut stream = CodewordStream::new(codewords)?;
        let mut out = DecodedText::new();
        NumericDecoder::decode(&mut stream, &mut out)?;
        Ok((out.into_parts().0, stream.position()))
    }

    #[test]
    fn test_numeric_decode() {
        let (digits, pos) = decode(&[7, 1, 624, 434, 632, 282, 200]).unwrap();
        assert_eq!(digits, "000213298174000");
        assert_eq!(pos, 7);
    }

    #[test]
    fn test_stops_before_text_latch() {
        // 1 * 900 + 100 = 1000 -> "000"
        let (digits, pos) = decode(&[5, 1, 100, 900, 1]).unwrap();
        assert_eq!(digits, "000");
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_relatch_starts_new_group() {
        // 11 -> "1", 12 -> "2"
        let (digits, pos) = decode(&[4, 11, 902, 12]).unwrap();
        assert_eq!(digits, "12");
        assert_eq!(pos, 4);
    }

    #[test]
    fn test_fifteen_codewords_flush() {
        // Fifteen codewords encoding 10^44 (44 zeros), then 15 -> "5"
        let codewords = [
            17, 437, 111, 716, 132, 444, 118, 179, 92, 496, 847, 486, 144, 523, 411, 100, 15,
        ];
        let (digits, pos) = decode(&codewords).unwrap();
        assert_eq!(digits, format!("{}5", "0".repeat(44)));
        assert_eq!(pos, 17);
    }

    #[test]
    fn test_missing_sentinel_fails() {
        // 3 * 900 + 0 = 2700
        assert_eq!(decode(&[3, 3, 0]), Err(FormatError::MissingSentinel));
        // 2 * 900 + 0 = 1800 keeps its sentinel
        assert_eq!(decode(&[3, 2, 0]).unwrap(), ("800".to_string(), 3));
    }

    #[test]
    fn test_empty_run() {
        let (digits, pos) = decode(&[2, 900]).unwrap();
        assert!(digits.is_empty());
        assert_eq!(pos, 1);
    }
}
