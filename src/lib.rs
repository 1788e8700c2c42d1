//! SHA-3 and SHAKE on top of the Keccak sponge
//!
//! This crate provides a portable, pure Rust implementation of the
//! KECCAK-p[1600, 24] permutation and the sponge construction standardized in
//! [FIPS 202], together with the SHA3-224/256/384/512 hash functions and the
//! SHAKE128/256 extendable-output functions built from it.
//!
//! # Limitations
//!
//! Performance and side-channel resistance have not been a priority. Only
//! whole-byte messages are supported.
//!
//! # Example Usage
//! ```
//! # use keccak_sponge::{Sponge, sha3_256};
//! #
//! let message = b"your input bytes";
//! let hash: [u8; 32] = sha3_256(message);
//! let expected = "414d4b6d11a92aaeeebe35f9374942f563848d345631bf5537407252dca6b378";
//! assert_eq!(expected, hex::encode(hash));
//!
//! let mut sponge = Sponge::sha3(256)?;
//! sponge.absorb(b"your input ")?;
//! sponge.absorb(b"bytes")?;
//! assert_eq!(hash.as_slice(), sponge.digest()?);
//! # Ok::<(), keccak_sponge::Error>(())
//! ```
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

mod error;
mod hasher;
pub mod padding;
mod params;
pub mod permute;
mod sponge;
mod state;

pub use crate::{
    error::{Error, Result},
    hasher::{
        HashSize, Hasher, Level128, Level256, Out224, Out256, Out384, Out512, Output, Sha3_224,
        Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256, Xof, XofLevel, XofReader,
    },
    padding::DomainSuffix,
    params::{
        Family, OutputMode, SHA3_224, SHA3_256, SHA3_384, SHA3_512, SHAKE128, SHAKE256,
        SpongeParams, WIDTH_BITS,
    },
    permute::keccak_f1600,
    sponge::{Phase, Sponge},
    state::{LANES, Lane, PermutationState, STATE_BYTES},
};

/// SHA3-`level` of `message`, `level` in {224, 256, 384, 512}.
///
/// Returns `level / 8` bytes.
pub fn sha3(level: usize, message: &[u8]) -> Result<Vec<u8>> {
    let mut sponge = Sponge::sha3(level)?;
    sponge.absorb(message)?;
    sponge.digest()
}

/// SHAKE`level` of `message`, `level` in {128, 256}, with `output_bits` of
/// output.
///
/// `output_bits` must be a multiple of 8.
pub fn shake(level: usize, message: &[u8], output_bits: usize) -> Result<Vec<u8>> {
    if output_bits % 8 != 0 {
        return Err(Error::InvalidOutputBits(output_bits));
    }
    let mut sponge = Sponge::shake(level)?;
    sponge.absorb(message)?;
    Ok(sponge.squeeze(output_bits / 8))
}

fn sha3_fixed<const N: usize>(params: SpongeParams, message: &[u8]) -> [u8; N] {
    let mut output = [0; N];
    let mut sponge = Sponge::new(params);
    sponge.absorb_unchecked(message);
    sponge.squeeze_into(&mut output);
    output
}

/// SHA-3 Hash with 224 bits (28 bytes) output.
pub fn sha3_224(message: &[u8]) -> [u8; 28] {
    sha3_fixed(SHA3_224, message)
}

/// SHA-3 Hash with 256 bits (32 bytes) output.
pub fn sha3_256(message: &[u8]) -> [u8; 32] {
    sha3_fixed(SHA3_256, message)
}

/// SHA-3 Hash with 384 bits (48 bytes) output.
pub fn sha3_384(message: &[u8]) -> [u8; 48] {
    sha3_fixed(SHA3_384, message)
}

/// SHA-3 Hash with 512 bits (64 bytes) output.
pub fn sha3_512(message: &[u8]) -> [u8; 64] {
    sha3_fixed(SHA3_512, message)
}

/// SHAKE128 of `message`, filling all of `output`.
pub fn shake128(message: &[u8], output: &mut [u8]) {
    let mut sponge = Sponge::new(SHAKE128);
    sponge.absorb_unchecked(message);
    sponge.squeeze_into(output);
}

/// SHAKE256 of `message`, filling all of `output`.
pub fn shake256(message: &[u8], output: &mut [u8]) {
    let mut sponge = Sponge::new(SHAKE256);
    sponge.absorb_unchecked(message);
    sponge.squeeze_into(output);
}
