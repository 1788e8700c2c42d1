//! Domain separation and the `pad10*1` rule (FIPS 202, Section 5.1 and
//! Section 6).
//!
//! The bit-level functions follow the standard literally and work for any
//! rate. The sponge only ever deals with byte-aligned rates and whole-byte
//! messages, so it uses [`pad_block`], which produces exactly the same bits.

use crate::error::{Error, Result};

/// Bits appended to the message before `pad10*1` to separate the SHA-3 and
/// SHAKE families (FIPS 202, Section 6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DomainSuffix {
    /// `01`, used by SHA3-224/256/384/512.
    Sha3,
    /// `1111`, used by SHAKE128/256.
    Shake,
}

impl DomainSuffix {
    /// Suffix bits in the order they are appended.
    pub const fn bits(self) -> &'static [bool] {
        match self {
            DomainSuffix::Sha3 => &[false, true],
            DomainSuffix::Shake => &[true, true, true, true],
        }
    }

    /// Suffix bits followed by the first `1` of `pad10*1`, packed LSB first.
    ///
    /// This is the byte XORed at the first free position of the last block:
    /// `0x06` for SHA-3 and `0x1F` for SHAKE.
    pub const fn delimited(self) -> u8 {
        match self {
            DomainSuffix::Sha3 => 0b0000_0110,
            DomainSuffix::Shake => 0b0001_1111,
        }
    }
}

/// 5.1 Algorithm 9: pad10*1(x, m)
///
/// Returns `1 || 0^j || 1` with `j = (-m - 2) mod x`, using a non-negative
/// modulus. The result is never shorter than two bits, so a message that
/// leaves a single free bit in its last block gets a whole extra block.
pub fn pad10star1(rate_bits: usize, message_bits: usize) -> Result<Vec<bool>> {
    if rate_bits == 0 {
        return Err(Error::InvalidRate);
    }
    let j = (rate_bits - (message_bits + 2) % rate_bits) % rate_bits;
    let mut padding = Vec::with_capacity(j + 2);
    padding.push(true);
    padding.resize(j + 1, false);
    padding.push(true);
    Ok(padding)
}

/// Everything appended to an `input_bit_len` bit message before absorption:
/// the domain suffix followed by `pad10*1`.
///
/// `input_bit_len` plus the length of the result is a multiple of
/// `rate_bits`.
pub fn pad(rate_bits: usize, suffix: DomainSuffix, input_bit_len: usize) -> Result<Vec<bool>> {
    let suffix_bits = suffix.bits();
    let mut bits = suffix_bits.to_vec();
    bits.extend(pad10star1(rate_bits, input_bit_len + suffix_bits.len())?);
    Ok(bits)
}

/// Apply suffix and padding to the last (partial) block of a message.
///
/// `block` is one rate-sized block whose first `pos` bytes hold message
/// data; all remaining bytes are zero or already part of the state the block
/// is XORed into.
///
/// # Panics
/// If `pos >= block.len()`. A full block must be absorbed before padding.
pub fn pad_block(block: &mut [u8], pos: usize, suffix: DomainSuffix) {
    assert!(pos < block.len(), "no room for padding in a full block");
    block[pos] ^= suffix.delimited();
    // last bit of pad10*1; may land in the same byte as the suffix
    block[block.len() - 1] ^= 0b1000_0000;
}
