//! Bit-pattern hashing for vectors with built-in numeric components.

use std::hash::{BuildHasher, Hash, Hasher};
use std::mem;

use bytemuck::Pod;

use crate::number::Number;
use crate::vec2::Vec2;

// Fixed seeds keep the mixed hash stable across runs of one build.
const MIX_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

impl<N: Number + Pod> Vec2<N> {
    /// Hash of the raw bit pattern of the component pair.
    ///
    /// When both components together fit in a 64-bit word, the
    /// native-endian byte image of the pair zero-extended into a `u64`
    /// is the hash itself; wider pairs are fed through a 64-bit
    /// non-cryptographic mixing function instead.
    ///
    /// The hash is not normalized across component types: vectors with
    /// equal coordinate values but different component widths hash
    /// differently, because their bit patterns differ.
    pub fn bit_hash(&self) -> u64 {
        let size = mem::size_of::<N>();
        if size * 2 <= mem::size_of::<u64>() {
            let mut word = [0u8; 8];
            word[..size].copy_from_slice(bytemuck::bytes_of(&self.x));
            word[size..size * 2].copy_from_slice(bytemuck::bytes_of(&self.y));
            u64::from_ne_bytes(word)
        } else {
            let state = ahash::RandomState::with_seeds(
                MIX_SEEDS[0],
                MIX_SEEDS[1],
                MIX_SEEDS[2],
                MIX_SEEDS[3],
            );
            let mut mixer = state.build_hasher();
            mixer.write(bytemuck::bytes_of(&self.x));
            mixer.write(bytemuck::bytes_of(&self.y));
            mixer.finish()
        }
    }
}

impl<N: Number + Pod> Hash for Vec2<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.bit_hash());
    }
}
