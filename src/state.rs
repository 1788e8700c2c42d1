//! The 1600-bit Keccak state and its byte serialization.
use std::{
    mem,
    ops::{Index, IndexMut},
};

use crate::error::{Error, Result};

/// Lane of the [`PermutationState`] array containing w = 64 bits.
pub type Lane = u64;

/// Number of lanes in the state.
pub const LANES: usize = 25;

/// Size of the serialized state in bytes (b = 1600 bits).
pub const STATE_BYTES: usize = LANES * mem::size_of::<Lane>();

/// State array A of Keccak-f[1600].
///
/// Lanes are stored as a flat `[u64; 25]` where lane `(x, y)` lives at index
/// `x + 5 * y`. In the serialized form lane `(x, y)` occupies bytes
/// `8 * (5 * y + x)` to `8 * (5 * y + x) + 7`, least significant byte first
/// (FIPS 202, Section 3.1.2).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PermutationState([Lane; LANES]);

/// Compute a [`Lane`] index in [`PermutationState`].
#[inline(always)]
fn idx(x: usize, y: usize) -> usize {
    // % ops are optimized out
    (x % 5) + 5 * (y % 5)
}

impl Index<(usize, usize)> for PermutationState {
    type Output = Lane;

    #[inline(always)]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.0[idx(x, y)]
    }
}

impl IndexMut<(usize, usize)> for PermutationState {
    #[inline(always)]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.0[idx(x, y)]
    }
}

impl PermutationState {
    /// The all-zero state every sponge starts from.
    pub const fn new() -> Self {
        Self([0; LANES])
    }

    /// Build a state directly from its 25 lanes, in `x + 5 * y` order.
    pub const fn from_lanes(lanes: [Lane; LANES]) -> Self {
        Self(lanes)
    }

    pub fn lanes(&self) -> &[Lane; LANES] {
        &self.0
    }

    /// Deserialize a state from exactly [`STATE_BYTES`] bytes.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        if buf.len() != STATE_BYTES {
            return Err(Error::InvalidLength {
                expected: STATE_BYTES,
                actual: buf.len(),
            });
        }
        let mut lanes = [0; LANES];
        for (lane, bytes) in lanes.iter_mut().zip(buf.chunks_exact(8)) {
            *lane = Lane::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]);
        }
        Ok(Self(lanes))
    }

    /// Serialize the state. Exact inverse of [`PermutationState::from_bytes`].
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut out = [0; STATE_BYTES];
        for (bytes, lane) in out.chunks_exact_mut(8).zip(self.0) {
            bytes.copy_from_slice(&lane.to_le_bytes());
        }
        out
    }

    /// XOR `data` into the serialized view of the state starting at byte
    /// `offset`.
    ///
    /// # Panics
    /// If `offset + data.len()` exceeds [`STATE_BYTES`].
    pub fn xor_bytes(&mut self, offset: usize, data: &[u8]) {
        assert!(
            offset + data.len() <= STATE_BYTES,
            "xor of {} bytes at offset {offset} overruns the state",
            data.len()
        );
        for (i, byte) in data.iter().enumerate() {
            let pos = offset + i;
            self.0[pos / 8] ^= Lane::from(*byte) << (8 * (pos % 8));
        }
    }
}
