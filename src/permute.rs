//! KECCAK-f[1600] permutation based on [XKCP]
//!
//! This implementation of KECCAK is based on the [readable and compact]
//! and the [ref-64-bits] implementations of the KECCAK Team. The step
//! mappings are kept close to their description in FIPS 202 so each one can
//! be checked against the standard on its own.
//!
//! [readable and compact]: https://github.com/XKCP/XKCP/blob/716f007dd73ef28d357b8162173646be574ad1b7/Standalone/CompactFIPS202/C/Keccak-readable-and-compact.c
//! [ref-64-bits]: https://github.com/XKCP/XKCP/tree/716f007dd73ef28d357b8162173646be574ad1b7/lib/low/KeccakP-1600/ref-64bits
//! [XKCP]: https://github.com/XKCP/XKCP
#![allow(non_snake_case)]

use crate::state::{Lane, PermutationState};

// NOTE: References to Sections, Algorithms, Tables, etc. refer to the
// FIPS 202 standard (https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf)
// if not otherwise specified.

/// Number of rounds performed in `KECCAK-f[1600]`.
pub const ROUNDS: usize = 24;

/// 3.3 Algorithm 7: KECCAK-p[b, nr](S)
///
/// Not the generic algorithm, but specialized to `b = 1600` and `nr = 24`.
/// See Section 3.4 of FIPS 202.
pub fn keccak_f1600(state: &mut PermutationState) {
    for round in 0..ROUNDS {
        theta(state);
        rho(state);
        pi(state);
        chi(state);
        iota(state, round);
    }
}

impl PermutationState {
    /// Apply [`keccak_f1600`] to this state.
    pub fn permute(&mut self) {
        keccak_f1600(self);
    }
}

/// 3.2.1 Algorithm 1: θ(A)
fn theta(A: &mut PermutationState) {
    // We have 5 * 64 columns, whose parity bits we can store in 5 lanes
    let mut C: [Lane; 5] = Default::default();
    // Step 1
    // All parities are computed before the first lane is modified
    for (x, Cx) in C.iter_mut().enumerate() {
        *Cx = A[(x, 0)] ^ A[(x, 1)] ^ A[(x, 2)] ^ A[(x, 3)] ^ A[(x, 4)];
    }

    // Interleaved step 2 and 3
    for x in 0..5 {
        // (x + 4) % 5 is equivalent to (x - 1) % 5 in FIPS 202
        let D = C[(x + 4) % 5] ^ C[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            A[(x, y)] ^= D;
        }
    }
}

/// Rotation offsets of Table 2, listed in the order in which [`rho`] visits
/// the lanes: starting at (1, 0) and stepping `(x, y) -> (y, 2x + 3y)`.
/// Entry `t` equals `(t + 1)(t + 2) / 2 mod 64`.
pub const RHO_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// 3.2.2 Algorithm 2: ρ(A)
///
/// Lane (0, 0) is not rotated. The walk over the remaining 24 lanes is a
/// single orbit, so each lane is rotated exactly once.
fn rho(A: &mut PermutationState) {
    let (mut x, mut y) = (1, 0);
    for offset in RHO_OFFSETS {
        A[(x, y)] = A[(x, y)].rotate_left(offset);
        (x, y) = (y, (2 * x + 3 * y) % 5);
    }
}

/// 3.2.3 Algorithm 3: π(A)
///
/// Every destination lane reads a different source lane, so the source is
/// an unmodified copy.
fn pi(A: &mut PermutationState) {
    let temp_A = *A;
    for x in 0..5 {
        for y in 0..5 {
            A[(x, y)] = temp_A[(x + 3 * y, x)];
        }
    }
}

/// 3.2.4 Algorithm 4: χ(A)
fn chi(A: &mut PermutationState) {
    for y in 0..5 {
        let row: [Lane; 5] = std::array::from_fn(|x| A[(x, y)]);
        for x in 0..5 {
            A[(x, y)] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

/// Round-constants applied to the (0, 0) lane in the [`iota`] step.
/// Table taken from:
/// https://github.com/XKCP/XKCP/blob/716f007dd73ef28d357b8162173646be574ad1b7/lib/low/KeccakP-1600/ref-64bits/KeccakP-1600-reference.c#L109-L135
pub const ROUND_CONSTANTS: [Lane; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// 3.2.5 Algorithm 6: ι(A, ir)
fn iota(A: &mut PermutationState, round: usize) {
    A[(0, 0)] ^= ROUND_CONSTANTS[round];
}
