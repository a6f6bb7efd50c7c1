//! Base-900 to base-10 conversion for numeric compaction and macro segment indices.
//!
//! Fifteen base-900 digits reach 900^15 ~ 2 * 10^44, past `u128`, so groups are
//! reconstructed as a `num_bigint::BigUint`.

use std::sync::OnceLock;

use num_bigint::BigUint;

use super::error::{FormatError, Result};

/// Largest power of 900 kept in the exponent table
pub const MAX_EXPONENT: usize = 15;

static EXP900: OnceLock<[BigUint; MAX_EXPONENT + 1]> = OnceLock::new();

/// Powers of 900, `exp900()[k] == 900^k` for `k` in `0..=15`
pub fn exp900() -> &'static [BigUint; MAX_EXPONENT + 1] {
    EXP900.get_or_init(|| {
        let mut table: [BigUint; MAX_EXPONENT + 1] = Default::default();
        table[0] = BigUint::from(1u32);
        for k in 1..=MAX_EXPONENT {
            table[k] = &table[k - 1] * 900u32;
        }
        table
    })
}

/// Convert base-900 digits (most significant first) to the decimal string they encode.
///
/// Encoders prefix every numeric run with a `1` digit; it is verified and
/// stripped here. A missing prefix means the group is misaligned. At most
/// 16 digits fit the exponent table.
pub fn decode_base900_to_base10(digits: &[u16]) -> Result<String> {
    let count = digits.len();
    if count > MAX_EXPONENT + 1 {
        return Err(FormatError::GroupTooLong {
            len: count,
            max: MAX_EXPONENT + 1,
        });
    }

    let table = exp900();
    let mut value = BigUint::default();
    for (i, &digit) in digits.iter().enumerate() {
        value += &table[count - 1 - i] * u32::from(digit);
    }

    let decimal = value.to_string();
    match decimal.strip_prefix('1') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Err(FormatError::MissingSentinel),
    }
}
