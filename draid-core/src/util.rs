// vim: tw=80
//! Small utilities used throughout the crate

use divbuf::DivBufShared;
use lazy_static::lazy_static;

/// Length of [`ZERO_REGION`] in bytes.  Must cover at least one sector at
/// the largest supported ashift.
pub const ZERO_REGION_LEN: usize = 1 << 16;

lazy_static! {
    /// A read-only page of zeros, shared by everything that needs to pad
    /// an I/O: skip sectors, partial-sector writes, and simulated label
    /// reads all slice out of this one buffer.
    pub static ref ZERO_REGION: DivBufShared =
        DivBufShared::from(vec![0u8; ZERO_REGION_LEN]);
}

/// Round `x` up to a multiple of `mult`
pub fn roundup(x: u64, mult: u64) -> u64 {
    x.div_ceil(mult) * mult
}

/// Round `x` down to a multiple of `mult`
pub fn rounddown(x: u64, mult: u64) -> u64 {
    x - x % mult
}

/// 64-bit checksum from the fletcher4 family, over little-endian 32-bit
/// words.  Returns the highest-order accumulator.
///
/// This authenticates permutation maps on disk, so the algorithm is
/// frozen.
pub fn fletcher4_64(data: &[u8]) -> u64 {
    debug_assert_eq!(data.len() % 4, 0);
    let mut a = 0u64;
    let mut b = 0u64;
    let mut c = 0u64;
    let mut d = 0u64;
    for word in data.chunks_exact(4) {
        let w = u64::from(u32::from_le_bytes(word.try_into().unwrap()));
        a = a.wrapping_add(w);
        b = b.wrapping_add(a);
        c = c.wrapping_add(b);
        d = d.wrapping_add(c);
    }
    d
}
