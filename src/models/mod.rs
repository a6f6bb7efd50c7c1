pub mod codeword;
pub mod decode_result;
pub mod decoded_text;

pub use codeword::{Codeword, ControlCodeword};
pub use decode_result::{DecodeResult, StructuredAppend};
pub use decoded_text::DecodedText;
