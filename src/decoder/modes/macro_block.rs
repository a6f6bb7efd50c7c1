//! Macro PDF417 control block (structured append metadata)

use super::text::TextDecoder;
use crate::decoder::base900::decode_base900_to_base10;
use crate::decoder::error::{FormatError, Result};
use crate::decoder::stream::CodewordStream;
use crate::decoder::tables::SEGMENT_INDEX_CODEWORDS;
use crate::models::{Codeword, ControlCodeword, DecodedText, StructuredAppend};

/// Decode the body of a macro control block (after the 928 marker)
pub struct MacroBlockDecoder;

impl MacroBlockDecoder {
    /// Read segment index, file id and the optional field span into `meta`.
    ///
    /// Layout: two base-900 codewords for the segment index, a text-compacted
    /// file id, then either 923 + optional fields + 922, a bare 922, or
    /// nothing (more segments follow).
    pub fn decode(stream: &mut CodewordStream<'_>, meta: &mut StructuredAppend) -> Result<()> {
        if stream.remaining() < SEGMENT_INDEX_CODEWORDS {
            return Err(FormatError::Truncated {
                position: stream.position() + SEGMENT_INDEX_CODEWORDS - 1,
                declared: stream.declared_len(),
            });
        }

        let mut segment = [0u16; SEGMENT_INDEX_CODEWORDS];
        for digit in segment.iter_mut() {
            match stream.next_codeword()? {
                Codeword::Data(value) => *digit = value,
                Codeword::Control(control) => {
                    return Err(FormatError::InvalidSegmentIndex(control.value().to_string()));
                }
            }
        }
        let digits = decode_base900_to_base10(&segment)?;
        meta.segment_index = digits
            .parse::<u32>()
            .map_err(|_| FormatError::InvalidSegmentIndex(digits.clone()))?;

        let mut file_id = DecodedText::new();
        TextDecoder::decode(stream, &mut file_id)?;
        meta.file_id = file_id.into_parts().0;

        match stream.peek() {
            Some(Codeword::Control(ControlCodeword::MacroOptionalField)) => {
                stream.next_raw()?;
                let mut fields = Vec::with_capacity(stream.remaining());
                while stream.has_remaining() {
                    match stream.next_codeword()? {
                        Codeword::Data(value) => fields.push(value as u32),
                        Codeword::Control(ControlCodeword::MacroTerminator) => {
                            meta.last_segment = true;
                            break;
                        }
                        Codeword::Control(other) => {
                            return Err(FormatError::UnexpectedControlInOptionalField(
                                other.value(),
                            ));
                        }
                    }
                }
                meta.optional_fields = Some(fields);
            }
            Some(Codeword::Control(ControlCodeword::MacroTerminator)) => {
                stream.next_raw()?;
                meta.last_segment = true;
            }
            _ => {}
        }

        meta.mark_present();
        log::debug!(
            "macro block: segment {}, file id {:?}, last {}",
            meta.segment_index,
            meta.file_id,
            meta.last_segment
        );
        Ok(())
    }
}
