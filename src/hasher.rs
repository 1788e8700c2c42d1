//! Statically sized SHA-3 hashers and SHAKE XOFs.
//!
//! These wrap a [`Sponge`] in types that make misuse unrepresentable:
//! [`Hasher::finalize`] consumes the hasher, and a [`Xof`] turns into an
//! [`XofReader`] that has no way to absorb more input.
use crate::{
    params::{SHA3_224, SHA3_256, SHA3_384, SHA3_512, SHAKE128, SHAKE256, SpongeParams},
    sponge::Sponge,
};

pub struct Hasher<S: HashSize> {
    sponge: Sponge,
    _size: std::marker::PhantomData<S>,
}

/// Marker type for 224-bit output.
pub struct Out224;
/// Marker type for 256-bit output.
pub struct Out256;
/// Marker type for 384-bit output.
pub struct Out384;
/// Marker type for 512-bit output.
pub struct Out512;

/// SHA-3 [`Hasher`] with 224-bit output.
pub type Sha3_224 = Hasher<Out224>;
/// SHA-3 [`Hasher`] with 256-bit output.
pub type Sha3_256 = Hasher<Out256>;
/// SHA-3 [`Hasher`] with 384-bit output.
pub type Sha3_384 = Hasher<Out384>;
/// SHA-3 [`Hasher`] with 512-bit output.
pub type Sha3_512 = Hasher<Out512>;

impl<S: HashSize> Hasher<S> {
    pub fn new() -> Self {
        Hasher {
            sponge: Sponge::new(S::PARAMS),
            _size: std::marker::PhantomData,
        }
    }

    pub fn update(&mut self, msg: &[u8]) {
        self.sponge.absorb_unchecked(msg);
    }

    pub fn finalize(mut self) -> S::Output {
        let mut output = S::Output::default();
        self.sponge.squeeze_into(output.as_mut());
        output
    }
}

impl<S: HashSize> Default for Hasher<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: HashSize> Clone for Hasher<S> {
    fn clone(&self) -> Self {
        Self {
            sponge: self.sponge.clone(),
            _size: std::marker::PhantomData,
        }
    }
}

#[allow(private_bounds)]
pub trait HashSize: Params {
    type Output: Output;
}

trait Params {
    const PARAMS: SpongeParams;
}

impl HashSize for Out224 {
    type Output = [u8; 28];
}

impl Params for Out224 {
    const PARAMS: SpongeParams = SHA3_224;
}

impl HashSize for Out256 {
    type Output = [u8; 32];
}

impl Params for Out256 {
    const PARAMS: SpongeParams = SHA3_256;
}

impl HashSize for Out384 {
    type Output = [u8; 48];
}

impl Params for Out384 {
    const PARAMS: SpongeParams = SHA3_384;
}

impl HashSize for Out512 {
    type Output = [u8; 64];
}

impl Params for Out512 {
    const PARAMS: SpongeParams = SHA3_512;
}

// The normal Default trait is not implemented for arrays with len > 32, so we
// define this helper trait
pub trait Output: AsMut<[u8]> + private::Sealed {
    fn default() -> Self;
}

impl<const N: usize> Output for [u8; N] {
    fn default() -> Self {
        [0; N]
    }
}

/// Marker type for the 128-bit security level.
pub struct Level128;
/// Marker type for the 256-bit security level.
pub struct Level256;

/// SHAKE128 [`Xof`].
pub type Shake128 = Xof<Level128>;
/// SHAKE256 [`Xof`].
pub type Shake256 = Xof<Level256>;

pub trait XofLevel: private::Sealed {
    #[doc(hidden)]
    const PARAMS: SpongeParams;
}

impl XofLevel for Level128 {
    const PARAMS: SpongeParams = SHAKE128;
}

impl XofLevel for Level256 {
    const PARAMS: SpongeParams = SHAKE256;
}

/// Absorbing half of a SHAKE computation.
pub struct Xof<L: XofLevel> {
    sponge: Sponge,
    _level: std::marker::PhantomData<L>,
}

impl<L: XofLevel> Xof<L> {
    pub fn new() -> Self {
        Self {
            sponge: Sponge::new(L::PARAMS),
            _level: std::marker::PhantomData,
        }
    }

    pub fn update(&mut self, msg: &[u8]) {
        self.sponge.absorb_unchecked(msg);
    }

    /// Pad the input and switch to reading output.
    pub fn finalize_xof(self) -> XofReader {
        XofReader {
            sponge: self.sponge,
        }
    }
}

impl<L: XofLevel> Default for Xof<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Squeezing half of a SHAKE computation.
#[derive(Clone, Debug)]
pub struct XofReader {
    sponge: Sponge,
}

impl XofReader {
    /// Fill `output` with the next bytes of the output stream.
    pub fn read(&mut self, output: &mut [u8]) {
        self.sponge.squeeze_into(output);
    }
}

mod private {
    impl<const N: usize> Sealed for [u8; N] {}
    impl Sealed for super::Level128 {}
    impl Sealed for super::Level256 {}

    pub trait Sealed {}
}
