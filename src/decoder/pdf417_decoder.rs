use crate::decoder::charset::{Charset, resolve_charset};
use crate::decoder::error::{FormatError, Result};
use crate::decoder::modes::Mode;
use crate::decoder::modes::byte::ByteDecoder;
use crate::decoder::modes::macro_block::MacroBlockDecoder;
use crate::decoder::modes::numeric::NumericDecoder;
use crate::decoder::modes::text::TextDecoder;
use crate::decoder::stream::CodewordStream;
use crate::models::{DecodeResult, DecodedText, StructuredAppend};

/// Main PDF417 decoder: reads mode codewords and routes each run to its decoder
pub struct Pdf417Decoder;

impl Pdf417Decoder {
    /// Decode a codeword stream, starting in ISO-8859-1
    ///
    /// # Arguments
    /// * `codewords` - Corrected codewords; element 0 is the data region length
    /// * `ec_level` - Error correction level, reported verbatim in the result
    pub fn decode(codewords: &[u32], ec_level: u8) -> Result<DecodeResult> {
        Self::decode_with_charset(codewords, ec_level, Charset::Latin1)
    }

    /// Decode a codeword stream, starting in `charset` until an ECI changes it
    pub fn decode_with_charset(
        codewords: &[u32],
        ec_level: u8,
        charset: Charset,
    ) -> Result<DecodeResult> {
        let mut stream = CodewordStream::new(codewords)?;
        let mut out = DecodedText::new();
        let mut structured_append = StructuredAppend::default();
        let mut charset = charset;

        log::debug!(
            "decoding {} data codewords ({} total), charset {}",
            stream.declared_len(),
            codewords.len(),
            charset.name()
        );

        // Symbols missing the leading latch start in text compaction
        let mut mode = match Mode::from_codeword(stream.next_raw()?) {
            Some(mode) => mode,
            None => {
                stream.rewind();
                Mode::Text
            }
        };

        while stream.has_remaining() {
            log::trace!("mode {:?} at position {}", mode, stream.position());
            match mode {
                Mode::Text => TextDecoder::decode(&mut stream, &mut out)?,
                Mode::Byte(byte_mode) => {
                    ByteDecoder::decode(byte_mode, &mut stream, charset, &mut out)?
                }
                Mode::ByteShift => {
                    let byte = stream.next_raw()? as u8;
                    out.push_bytes(&[byte], charset);
                }
                Mode::Numeric => NumericDecoder::decode(&mut stream, &mut out)?,
                Mode::EciCharset => {
                    let eci = stream.next_raw()?;
                    match resolve_charset(eci) {
                        Some(resolved) => {
                            log::debug!("ECI {} selects {}", eci, resolved.name());
                            charset = resolved;
                        }
                        None => log::warn!(
                            "unsupported ECI {}, keeping {}",
                            eci,
                            charset.name()
                        ),
                    }
                }
                Mode::EciGeneralPurpose => {
                    log::warn!("skipping general purpose ECI");
                    stream.skip(2)?;
                }
                Mode::EciUserDefined => {
                    log::warn!("skipping user defined ECI");
                    stream.skip(1)?;
                }
                Mode::MacroBlock => {
                    MacroBlockDecoder::decode(&mut stream, &mut structured_append)?
                }
                Mode::StrayMacroMarker(marker) => {
                    return Err(FormatError::MarkerOutsideMacroBlock(marker));
                }
            }

            if !stream.has_remaining() {
                break;
            }
            let next = stream.next_raw()?;
            mode = match Mode::from_codeword(next) {
                Some(mode) => mode,
                None => {
                    stream.rewind();
                    Mode::Text
                }
            };
        }

        if out.is_empty() {
            return Err(FormatError::EmptyResult);
        }

        let (text, raw_bytes) = out.into_parts();
        log::debug!("decoded {} chars, {} raw bytes", text.chars().count(), raw_bytes.len());
        Ok(DecodeResult::new(
            text,
            raw_bytes,
            ec_level,
            charset,
            structured_append,
        ))
    }
}
