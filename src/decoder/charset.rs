//! Character set collaborator: ECI value resolution and byte transcoding

use encoding_rs::Encoding;

/// Character set used to turn byte-compacted data into text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Charset {
    /// ISO-8859-1, the PDF417 default. Bytes map straight to code points.
    #[default]
    Latin1,
    /// US-ASCII. Bytes above 0x7F become U+FFFD.
    Ascii,
    /// Any encoding backed by `encoding_rs`
    Encoding(&'static Encoding),
}

impl Charset {
    /// Decode bytes to text in this character set
    pub fn transcode(&self, bytes: &[u8]) -> String {
        match self {
            Charset::Latin1 => bytes.iter().map(|&b| b as char).collect(),
            Charset::Ascii => {
                let invalid = bytes.iter().filter(|b| !b.is_ascii()).count();
                if invalid > 0 {
                    log::warn!(
                        "{} bytes were not valid US-ASCII, substituted replacement characters",
                        invalid
                    );
                }
                bytes
                    .iter()
                    .map(|&b| if b.is_ascii() { b as char } else { char::REPLACEMENT_CHARACTER })
                    .collect()
            }
            Charset::Encoding(encoding) => {
                let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
                if had_errors {
                    log::warn!(
                        "{} bytes were not valid {}, substituted replacement characters",
                        bytes.len(),
                        encoding.name()
                    );
                }
                text.into_owned()
            }
        }
    }

    /// Canonical name of the character set
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Latin1 => "ISO-8859-1",
            Charset::Ascii => "US-ASCII",
            Charset::Encoding(encoding) => encoding.name(),
        }
    }
}

/// Resolve an ECI assignment value to a character set
///
/// Returns `None` for values with no supported charset (including Cp437).
pub fn resolve_charset(eci: u32) -> Option<Charset> {
    let encoding = match eci {
        1 | 3 => return Some(Charset::Latin1),
        27 | 170 => return Some(Charset::Ascii),
        4 => encoding_rs::ISO_8859_2,
        5 => encoding_rs::ISO_8859_3,
        6 => encoding_rs::ISO_8859_4,
        7 => encoding_rs::ISO_8859_5,
        8 => encoding_rs::ISO_8859_6,
        9 => encoding_rs::ISO_8859_7,
        10 => encoding_rs::ISO_8859_8,
        // ISO-8859-9 and -11 are only available through their windows supersets
        11 => encoding_rs::WINDOWS_1254,
        12 => encoding_rs::ISO_8859_10,
        13 => encoding_rs::WINDOWS_874,
        15 => encoding_rs::ISO_8859_13,
        16 => encoding_rs::ISO_8859_14,
        17 => encoding_rs::ISO_8859_15,
        18 => encoding_rs::ISO_8859_16,
        20 => encoding_rs::SHIFT_JIS,
        21 => encoding_rs::WINDOWS_1250,
        22 => encoding_rs::WINDOWS_1251,
        23 => encoding_rs::WINDOWS_1252,
        24 => encoding_rs::WINDOWS_1256,
        25 => encoding_rs::UTF_16BE,
        26 => encoding_rs::UTF_8,
        28 => encoding_rs::BIG5,
        29 => encoding_rs::GB18030,
        30 => encoding_rs::EUC_KR,
        _ => return None,
    };
    Some(Charset::Encoding(encoding))
}
