//! RustPDF417 - PDF417 codeword stream decoder
//!
//! Takes the error-corrected codewords of a PDF417 symbol and decodes the
//! text, byte and numeric compaction runs they contain, along with any
//! Macro PDF417 (structured append) metadata.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// PDF417 decoding modules (mode decoders, base-900 conversion, charsets)
pub mod decoder;
/// Core data structures (DecodeResult, StructuredAppend, codewords)
pub mod models;

pub use decoder::charset::Charset;
pub use decoder::error::FormatError;
pub use models::{DecodeResult, StructuredAppend};

use decoder::pdf417_decoder::Pdf417Decoder;
use rayon::prelude::*;

/// Decode one corrected codeword stream
///
/// # Arguments
/// * `codewords` - Codewords with the data region length at index 0, followed
///   by data and then error correction codewords
/// * `ec_level` - Error correction level of the symbol, copied into the result
///
/// # Returns
/// Decoded text and structured append metadata, or the format error that
/// stopped the decode
pub fn decode(codewords: &[u32], ec_level: u8) -> Result<DecodeResult, FormatError> {
    Pdf417Decoder::decode(codewords, ec_level)
}

/// Decode many independent codeword streams
///
/// Results come back in input order. Batches of at least
/// `PDF417_PARALLEL_MIN_BATCH` streams (default 8) run on the rayon pool.
pub fn decode_batch(streams: &[(Vec<u32>, u8)]) -> Vec<Result<DecodeResult, FormatError>> {
    if streams.len() >= decoder::config::parallel_min_batch() {
        streams
            .par_iter()
            .map(|(codewords, ec_level)| decode(codewords, *ec_level))
            .collect()
    } else {
        streams
            .iter()
            .map(|(codewords, ec_level)| decode(codewords, *ec_level))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_batch_preserves_order() {
        let streams: Vec<(Vec<u32>, u8)> = (0..20u32)
            .map(|i| (vec![3, 900, i * 30 + 29], 2))
            .chain(std::iter::once((vec![2, 902], 2)))
            .collect();
        let results = decode_batch(&streams);
        assert_eq!(results.len(), 21);
        for (i, result) in results.iter().take(20).enumerate() {
            let expected = ((b'A' + i as u8) as char).to_string();
            assert_eq!(result.as_ref().unwrap().text, expected);
        }
        assert_eq!(results[20], Err(FormatError::EmptyResult));
    }
}
