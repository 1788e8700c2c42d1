//! Sponge parameters of the standardized SHA-3 and SHAKE instances.
use std::fmt;

use crate::{
    error::{Error, Result},
    padding::DomainSuffix,
    state::STATE_BYTES,
};

/// Width b of the permutation in bits.
pub const WIDTH_BITS: usize = STATE_BYTES * 8;

/// Function family a security level is interpreted in.
///
/// Needed because 256 is a valid level for both SHA3-256 and SHAKE256.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Sha3,
    Shake,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Sha3 => f.write_str("SHA-3"),
            Family::Shake => f.write_str("SHAKE"),
        }
    }
}

/// How much output an instance produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// Fixed-length hash with a digest of `digest_bits`.
    Fixed { digest_bits: usize },
    /// Extendable-output function, output length chosen by the caller.
    Extendable,
}

/// Rate/capacity split, domain suffix and output mode of a sponge.
///
/// `rate_bits + capacity_bits` is always [`WIDTH_BITS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpongeParams {
    rate_bits: usize,
    capacity_bits: usize,
    suffix: DomainSuffix,
    mode: OutputMode,
}

/// SHA3-224: c = 448, r = 1152.
pub const SHA3_224: SpongeParams = SpongeParams::sha3_unchecked(224);
/// SHA3-256: c = 512, r = 1088.
pub const SHA3_256: SpongeParams = SpongeParams::sha3_unchecked(256);
/// SHA3-384: c = 768, r = 832.
pub const SHA3_384: SpongeParams = SpongeParams::sha3_unchecked(384);
/// SHA3-512: c = 1024, r = 576.
pub const SHA3_512: SpongeParams = SpongeParams::sha3_unchecked(512);
/// SHAKE128: c = 256, r = 1344.
pub const SHAKE128: SpongeParams = SpongeParams::shake_unchecked(128);
/// SHAKE256: c = 512, r = 1088.
pub const SHAKE256: SpongeParams = SpongeParams::shake_unchecked(256);

impl SpongeParams {
    const fn sha3_unchecked(digest_bits: usize) -> Self {
        let capacity_bits = 2 * digest_bits;
        Self {
            rate_bits: WIDTH_BITS - capacity_bits,
            capacity_bits,
            suffix: DomainSuffix::Sha3,
            mode: OutputMode::Fixed { digest_bits },
        }
    }

    const fn shake_unchecked(level: usize) -> Self {
        let capacity_bits = 2 * level;
        Self {
            rate_bits: WIDTH_BITS - capacity_bits,
            capacity_bits,
            suffix: DomainSuffix::Shake,
            mode: OutputMode::Extendable,
        }
    }

    /// Parameters of SHA3-`level` for `level` in {224, 256, 384, 512}.
    pub fn sha3(level: usize) -> Result<Self> {
        match level {
            224 | 256 | 384 | 512 => Ok(Self::sha3_unchecked(level)),
            _ => Err(Error::InvalidSecurityLevel {
                family: Family::Sha3,
                level,
            }),
        }
    }

    /// Parameters of SHAKE`level` for `level` in {128, 256}.
    pub fn shake(level: usize) -> Result<Self> {
        match level {
            128 | 256 => Ok(Self::shake_unchecked(level)),
            _ => Err(Error::InvalidSecurityLevel {
                family: Family::Shake,
                level,
            }),
        }
    }

    pub fn new(family: Family, level: usize) -> Result<Self> {
        match family {
            Family::Sha3 => Self::sha3(level),
            Family::Shake => Self::shake(level),
        }
    }

    pub fn rate_bits(&self) -> usize {
        self.rate_bits
    }

    pub fn rate_bytes(&self) -> usize {
        self.rate_bits / 8
    }

    pub fn capacity_bits(&self) -> usize {
        self.capacity_bits
    }

    pub fn suffix(&self) -> DomainSuffix {
        self.suffix
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn family(&self) -> Family {
        match self.suffix {
            DomainSuffix::Sha3 => Family::Sha3,
            DomainSuffix::Shake => Family::Shake,
        }
    }

    /// Digest size in bytes of a fixed-length instance.
    pub fn digest_bytes(&self) -> Option<usize> {
        match self.mode {
            OutputMode::Fixed { digest_bits } => Some(digest_bits / 8),
            OutputMode::Extendable => None,
        }
    }
}
