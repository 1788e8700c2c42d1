//! KECCAK Sponge construction with incremental API.
//!
//! A [`Sponge`] starts in [`Phase::Absorbing`]. The first call that produces
//! output pads the buffered input, permutes and switches to
//! [`Phase::Squeezing`]. There is no way back: further input is rejected with
//! [`Error::InvalidPhase`].
use std::fmt;

use log::trace;

use crate::{
    error::{Error, Result},
    padding::pad_block,
    params::{Family, OutputMode, SpongeParams},
    state::{PermutationState, STATE_BYTES},
};

/// Phase of a [`Sponge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Absorbing,
    Squeezing,
}

/// Keccak-f[1600] sponge for one SHA-3 or SHAKE computation.
#[derive(Clone)]
pub struct Sponge {
    params: SpongeParams,
    state: PermutationState,
    // Input not yet absorbed while absorbing, current output block while
    // squeezing. Only the first `rate_bytes` are used.
    block: [u8; STATE_BYTES],
    pos: usize,
    phase: Phase,
    absorbed: u64,
}

impl Sponge {
    pub fn new(params: SpongeParams) -> Self {
        trace!(
            "new {} sponge: rate {} bits, capacity {} bits, {:?}",
            params.family(),
            params.rate_bits(),
            params.capacity_bits(),
            params.mode()
        );
        Self {
            params,
            state: PermutationState::new(),
            block: [0; STATE_BYTES],
            pos: 0,
            phase: Phase::Absorbing,
            absorbed: 0,
        }
    }

    /// Sponge for SHA3-`level`, `level` in {224, 256, 384, 512}.
    pub fn sha3(level: usize) -> Result<Self> {
        SpongeParams::sha3(level).map(Self::new)
    }

    /// Sponge for SHAKE`level`, `level` in {128, 256}.
    pub fn shake(level: usize) -> Result<Self> {
        SpongeParams::shake(level).map(Self::new)
    }

    /// Sponge selected by family and security level.
    pub fn init(family: Family, level: usize) -> Result<Self> {
        SpongeParams::new(family, level).map(Self::new)
    }

    pub fn params(&self) -> &SpongeParams {
        &self.params
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rate_bytes(&self) -> usize {
        self.params.rate_bytes()
    }

    /// Absorb `msg` into the state.
    ///
    /// Calling this repeatedly is equivalent to calling it once with the
    /// concatenation of all inputs.
    pub fn absorb(&mut self, msg: &[u8]) -> Result<()> {
        if self.phase != Phase::Absorbing {
            return Err(Error::InvalidPhase);
        }
        self.absorb_unchecked(msg);
        Ok(())
    }

    /// [`Sponge::absorb`] for callers that guarantee the absorbing phase
    /// through their own type.
    pub(crate) fn absorb_unchecked(&mut self, msg: &[u8]) {
        debug_assert_eq!(Phase::Absorbing, self.phase);
        let rate = self.rate_bytes();
        self.absorbed += msg.len() as u64;

        // first, we complete a potentially partial block
        let partial_block_len = (rate - self.pos).min(msg.len());
        let (first_msg, rest_msg) = msg.split_at(partial_block_len);
        self.block[self.pos..self.pos + partial_block_len].copy_from_slice(first_msg);
        self.pos += partial_block_len;
        if self.pos < rate {
            debug_assert!(rest_msg.is_empty());
            return;
        }
        self.state.xor_bytes(0, &self.block[..rate]);
        self.state.permute();
        self.pos = 0;

        // full blocks bypass the buffer
        let mut chunks = rest_msg.chunks_exact(rate);
        for chunk in &mut chunks {
            self.state.xor_bytes(0, chunk);
            self.state.permute();
        }
        let rest = chunks.remainder();
        self.block[..rest.len()].copy_from_slice(rest);
        self.pos = rest.len();
    }

    /// Pad the buffered input, absorb the final block and start squeezing.
    fn finalize(&mut self) {
        let rate = self.rate_bytes();
        let block = &mut self.block[..rate];
        block[self.pos..].fill(0);
        pad_block(block, self.pos, self.params.suffix());
        self.state.xor_bytes(0, block);
        self.state.permute();
        trace!(
            "{} sponge finalized after {} absorbed bytes",
            self.params.family(),
            self.absorbed
        );

        self.block = self.state.to_bytes();
        self.pos = 0;
        self.phase = Phase::Squeezing;
    }

    /// Fill `output` with the next bytes of the output stream.
    ///
    /// The first call finalizes the input. Output of consecutive calls is
    /// one continuous stream, so squeezing 10 and then 10 more bytes gives
    /// the same bytes as squeezing 20 at once.
    pub fn squeeze_into(&mut self, mut output: &mut [u8]) {
        if self.phase == Phase::Absorbing {
            self.finalize();
        }
        let rate = self.rate_bytes();
        while !output.is_empty() {
            // only permute when another byte is actually requested
            if self.pos == rate {
                self.state.permute();
                self.block = self.state.to_bytes();
                self.pos = 0;
            }
            let len = (rate - self.pos).min(output.len());
            let (head, rest) = output.split_at_mut(len);
            head.copy_from_slice(&self.block[self.pos..self.pos + len]);
            self.pos += len;
            output = rest;
        }
    }

    /// Squeeze the next `len` bytes of the output stream.
    pub fn squeeze(&mut self, len: usize) -> Vec<u8> {
        let mut output = vec![0; len];
        self.squeeze_into(&mut output);
        output
    }

    /// Squeeze a complete SHA-3 digest.
    ///
    /// Fails with [`Error::InvalidMode`] on a SHAKE sponge, which has no
    /// digest size. Use [`Sponge::squeeze`] there.
    pub fn digest(&mut self) -> Result<Vec<u8>> {
        match self.params.mode() {
            OutputMode::Fixed { digest_bits } => Ok(self.squeeze(digest_bits / 8)),
            OutputMode::Extendable => Err(Error::InvalidMode),
        }
    }
}

impl fmt::Debug for Sponge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // state and buffers are left out, they hold message-derived data
        f.debug_struct("Sponge")
            .field("params", &self.params)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::params::{SHA3_256, SHAKE128, SHAKE256};

    #[test]
    fn partial_absorb() {
        const RATE_SHA_256: usize = 136;
        let sizes: Vec<Vec<usize>> = vec![
            vec![0],
            vec![0, 0],
            vec![0, 30],
            vec![0, 30, 200],
            vec![30, 200],
            vec![RATE_SHA_256, 200],
            vec![40, RATE_SHA_256 - 40],
            vec![40, RATE_SHA_256 - 40, 30],
            vec![40, RATE_SHA_256 - 40, 30, 0, 20],
            vec![15, 20, 40, RATE_SHA_256 - 15 - 20 - 40, 20],
            vec![RATE_SHA_256 - 1, 1, RATE_SHA_256 * 3 + 1],
        ];
        for msg_sizes in sizes {
            let mut sponge = Sponge::new(SHA3_256);
            let msgs: Vec<Vec<u8>> = msg_sizes
                .iter()
                .enumerate()
                .map(|(i, size)| vec![i as u8; *size])
                .collect();
            let complete_msg = msgs.concat();
            for msg in &msgs {
                sponge.absorb(msg).unwrap();
            }
            let output = sponge.digest().unwrap();
            let expected = libcrux_sha3::sha256(&complete_msg);
            assert_eq!(expected.as_slice(), output, "{msg_sizes:?}");
        }
    }

    #[test]
    fn random_split_absorb() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let len = rng.random_range(0..600);
            let msg: Vec<u8> = (0..len).map(|_| rng.random()).collect();
            let split = rng.random_range(0..=len);

            let mut whole = Sponge::new(SHAKE128);
            whole.absorb(&msg).unwrap();
            let mut parts = Sponge::new(SHAKE128);
            parts.absorb(&msg[..split]).unwrap();
            parts.absorb(&msg[split..]).unwrap();
            assert_eq!(whole.squeeze(200), parts.squeeze(200), "len {len}, split {split}");
        }
    }

    #[test]
    fn squeeze_continuation() {
        let rate = SHAKE256.rate_bytes();
        let mut one_shot = Sponge::new(SHAKE256);
        one_shot.absorb(b"continuation").unwrap();
        let expected = one_shot.squeeze(4 * rate + 7);

        for (n1, n2) in [(0, 0), (0, 10), (10, 10), (rate, rate), (rate - 1, 2), (1, 3 * rate)] {
            let mut sponge = Sponge::new(SHAKE256);
            sponge.absorb(b"continuation").unwrap();
            let mut out = sponge.squeeze(n1);
            out.extend(sponge.squeeze(n2));
            assert_eq!(expected[..n1 + n2], out[..], "n1 {n1}, n2 {n2}");
        }
    }

    #[test]
    fn squeeze_byte_by_byte() {
        let mut one_shot = Sponge::new(SHAKE128);
        let expected = one_shot.squeeze(500);
        let mut sponge = Sponge::new(SHAKE128);
        let mut out = vec![];
        for _ in 0..500 {
            out.extend(sponge.squeeze(1));
        }
        assert_eq!(expected, out);
    }

    #[test]
    fn absorb_after_squeeze_fails() {
        let mut sponge = Sponge::shake(128).unwrap();
        sponge.absorb(b"abc").unwrap();
        assert_eq!(Phase::Absorbing, sponge.phase());
        sponge.squeeze(0);
        assert_eq!(Phase::Squeezing, sponge.phase());
        assert_eq!(Err(Error::InvalidPhase), sponge.absorb(b"more"));
        assert_eq!(Err(Error::InvalidPhase), sponge.absorb(b""));
    }

    #[test]
    fn absorb_after_digest_fails() {
        let mut sponge = Sponge::sha3(512).unwrap();
        sponge.digest().unwrap();
        assert_eq!(Err(Error::InvalidPhase), sponge.absorb(b"x"));
    }

    #[test]
    fn digest_on_xof_fails() {
        let mut sponge = Sponge::init(Family::Shake, 256).unwrap();
        assert_eq!(Err(Error::InvalidMode), sponge.digest());
        // the failed call does not finalize
        assert_eq!(Phase::Absorbing, sponge.phase());
    }

    #[test]
    fn digest_lengths() {
        for level in [224, 256, 384, 512] {
            let mut sponge = Sponge::sha3(level).unwrap();
            sponge.absorb(&[0xA3; 300]).unwrap();
            assert_eq!(level / 8, sponge.digest().unwrap().len());
        }
    }

    #[test]
    fn clone_forks_prefix() {
        let mut prefix = Sponge::new(SHA3_256);
        prefix.absorb(b"shared prefix ").unwrap();
        let mut a = prefix.clone();
        a.absorb(b"a").unwrap();
        let mut b = prefix;
        b.absorb(b"b").unwrap();
        assert_eq!(
            libcrux_sha3::sha256(b"shared prefix a").as_slice(),
            a.digest().unwrap()
        );
        assert_eq!(
            libcrux_sha3::sha256(b"shared prefix b").as_slice(),
            b.digest().unwrap()
        );
    }

    #[test]
    fn debug_hides_state() {
        let sponge = Sponge::new(SHA3_256);
        let debug = format!("{sponge:?}");
        assert!(debug.contains("Absorbing"));
        assert!(!debug.contains("state"));
    }
}
