//! Cursor over the data region of a corrected codeword stream

use super::error::{FormatError, Result};
use crate::models::Codeword;

/// Borrowed view of a codeword stream with a read cursor.
///
/// Element 0 holds the declared length of the data region (itself included).
/// Everything at or beyond that index is error correction and is never read.
#[derive(Debug, Clone)]
pub struct CodewordStream<'a> {
    codewords: &'a [u32],
    declared: usize,
    idx: usize,
}

impl<'a> CodewordStream<'a> {
    /// Wrap a codeword slice, positioning the cursor after the length field
    pub fn new(codewords: &'a [u32]) -> Result<Self> {
        let declared = codewords.first().copied().unwrap_or(0);
        if declared == 0 || declared as usize > codewords.len() {
            return Err(FormatError::InvalidLength {
                declared,
                available: codewords.len(),
            });
        }
        Ok(Self {
            codewords,
            declared: declared as usize,
            idx: 1,
        })
    }

    /// Number of codewords in the data region, length field included
    pub fn declared_len(&self) -> usize {
        self.declared
    }

    /// Index of the next codeword to be read
    pub fn position(&self) -> usize {
        self.idx
    }

    /// Data codewords left before the end of the data region
    pub fn remaining(&self) -> usize {
        self.declared.saturating_sub(self.idx)
    }

    /// Check if the cursor is still inside the data region
    pub fn has_remaining(&self) -> bool {
        self.idx < self.declared
    }

    /// Look at the next codeword without consuming it
    pub fn peek(&self) -> Option<Codeword> {
        self.peek_raw().map(Codeword::classify)
    }

    /// Raw value of the next codeword without consuming it
    pub fn peek_raw(&self) -> Option<u32> {
        if self.has_remaining() {
            Some(self.codewords[self.idx])
        } else {
            None
        }
    }

    /// Consume the next codeword
    pub fn next_codeword(&mut self) -> Result<Codeword> {
        self.next_raw().map(Codeword::classify)
    }

    /// Consume the next codeword as its raw value
    pub fn next_raw(&mut self) -> Result<u32> {
        let value = self.peek_raw().ok_or(FormatError::Truncated {
            position: self.idx,
            declared: self.declared,
        })?;
        self.idx += 1;
        Ok(value)
    }

    /// Skip `n` codewords, all of which must lie inside the data region
    pub fn skip(&mut self, n: usize) -> Result<()> {
        if n > self.remaining() {
            return Err(FormatError::Truncated {
                position: self.idx + n - 1,
                declared: self.declared,
            });
        }
        self.idx += n;
        Ok(())
    }

    /// Step back one codeword so the next read returns it again
    pub fn rewind(&mut self) {
        self.idx = self.idx.saturating_sub(1).max(1);
    }
}
