//! PDF417 codeword decoding modules
//!
//! This module turns an error-corrected codeword stream into text:
//! - Codeword cursor bounded by the declared data length
//! - Compaction mode decoders (text, byte, numeric, macro block)
//! - Base-900 conversion and the ECI character set collaborator

/// Base-900 to base-10 conversion (arbitrary precision)
pub mod base900;
/// ECI charset resolution and byte transcoding
pub mod charset;
pub mod config;
/// Decode failure type
pub mod error;
/// Compaction mode decoders (text, byte, numeric, macro block)
pub mod modes;
/// Main PDF417 decoder that dispatches on mode codewords
pub mod pdf417_decoder;
/// Codeword cursor over the data region
pub mod stream;
/// Text sub-mode character tables and group sizes
pub mod tables;
