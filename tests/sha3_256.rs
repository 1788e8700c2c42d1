// These tests take too long for miri
#![cfg(not(miri))]
use std::path::Path;

use keccak_sponge::Sponge;

use crate::rsp::KatSet;

mod rsp;

#[test]
fn test_known_answers() {
    let kat_set = KatSet::load(Path::new("tests/test-vectors/SHA3_256.rsp"));
    assert_eq!(256, kat_set.length);
    for test in kat_set.tests {
        let hash = keccak_sponge::sha3_256(&test.msg);
        assert_eq!(test.digest, hex::encode(hash), "length {} failed", test.len);
        let hash = keccak_sponge::sha3(256, &test.msg).unwrap();
        assert_eq!(test.digest, hex::encode(hash), "length {} failed", test.len);
    }
}

#[test]
fn compare_to_libcrux() {
    // every boundary around the 136-byte rate, twice
    for i in 0..3 * 136 + 2 {
        let input: Vec<u8> = (0..i).map(|b| b as u8).collect();
        let my_hash = keccak_sponge::sha3_256(&input);
        let other_hash = libcrux_sha3::sha256(&input);
        assert_eq!(my_hash, other_hash, "len {i} hash differs");
    }
}

#[test]
fn streaming_matches_one_shot() {
    let input: Vec<u8> = (0..5 * 136).map(|b| (b * 7) as u8).collect();
    let expected = keccak_sponge::sha3_256(&input);
    for chunk_size in [1, 3, 136 - 1, 136, 136 + 1, 2 * 136] {
        let mut sponge = Sponge::sha3(256).unwrap();
        for chunk in input.chunks(chunk_size) {
            sponge.absorb(chunk).unwrap();
        }
        assert_eq!(expected.as_slice(), sponge.digest().unwrap(), "chunks of {chunk_size}");

        let mut hasher = keccak_sponge::Sha3_256::new();
        for chunk in input.chunks(chunk_size) {
            hasher.update(chunk);
        }
        assert_eq!(expected, hasher.finalize(), "chunks of {chunk_size}");
    }
}
