// vim: tw=80
//! The dRAID permutation engine
//!
//! A dRAID vdev scatters the columns of each parity group across its
//! children by way of a permutation map: a `children × nperms` table of
//! child indices, deterministically generated from a seed recorded in the
//! frozen table in `draid_maps.rs`.  Row `0` is the identity; every
//! subsequent row is a Fisher-Yates shuffle of its predecessor.  The PRNG,
//! its seeding, and the shuffle schedule are all part of the on-disk
//! format: changing any of them would reorder every block of every
//! existing pool.

use crate::{
    draid_maps::DRAID_MAPS,
    types::{Error, Result},
    util::fletcher4_64,
};

/// Mixed into every map seed before it feeds the PRNG
const DRAID_SEED: u64 = 0xd7a1d5eed;

/// Largest supported child count
pub const MAX_CHILDREN: u64 = 255;

/// Number of entries in the frozen seed table
pub const MAX_MAPS: usize = 254;

/// Rows in every canonical permutation map
pub const NPERMS: u64 = 256;

/// One entry of the frozen seed table
#[derive(Clone, Copy, Debug)]
pub struct MapEntry {
    pub children: u64,
    pub nperms: u64,
    pub seed: u64,
    pub checksum: u64,
}

/// Look up the frozen seed table entry for a child count.
///
/// Fails with [`Error::ENOENT`] outside `[2, MAX_CHILDREN]`.
pub fn lookup_map(children: u64) -> Result<&'static MapEntry> {
    if !(2..=MAX_CHILDREN).contains(&children) {
        return Err(Error::ENOENT);
    }
    let entry = &DRAID_MAPS[children as usize - 2];
    debug_assert_eq!(entry.children, children);
    Ok(entry)
}

/// xorshift128+, seeded from `(DRAID_SEED, map_seed)`.  Frozen.
struct DraidRng([u64; 2]);

impl DraidRng {
    fn new(seed: u64) -> Self {
        DraidRng([DRAID_SEED, seed])
    }

    fn next(&mut self) -> u64 {
        let mut s1 = self.0[0];
        let s0 = self.0[1];
        self.0[0] = s0;
        s1 ^= s1 << 23;
        self.0[1] = s1 ^ s0 ^ (s1 >> 18) ^ (s0 >> 5);
        self.0[1].wrapping_add(s0)
    }
}

/// A generated permutation map.  Immutable once constructed; concurrent
/// readers need no synchronization.
#[derive(Debug)]
pub struct PermutationMap {
    children: u64,
    nperms: u64,
    seed: u64,
    checksum: u64,
    /// `children × nperms` child indices, row-major
    rows: Box<[u8]>,
}

impl PermutationMap {
    /// Generate the canonical map for `children` from the frozen seed
    /// table.
    pub fn open(children: u64) -> Result<Self> {
        let entry = lookup_map(children)?;
        Self::generate(children, entry.seed, entry.nperms, entry.checksum)
    }

    /// Deterministically generate a map.
    ///
    /// If `expected_checksum` is nonzero, the generated map must match
    /// it or the result is [`Error::EINTEGRITY`].
    pub fn generate(children: u64, seed: u64, nperms: u64,
                    expected_checksum: u64) -> Result<Self>
    {
        if !(2..=MAX_CHILDREN).contains(&children) || nperms == 0 {
            return Err(Error::EINVAL);
        }
        let c = children as usize;
        let mut rows = vec![0u8; c * nperms as usize].into_boxed_slice();
        for (i, r) in rows[0..c].iter_mut().enumerate() {
            *r = i as u8;
        }
        let mut rng = DraidRng::new(seed);
        for p in 1..nperms as usize {
            let (prev, cur) = rows.split_at_mut(p * c);
            cur[0..c].copy_from_slice(&prev[(p - 1) * c..]);
            for i in (1..c).rev() {
                let j = (rng.next() % (i as u64 + 1)) as usize;
                cur.swap(i, j);
            }
        }
        let checksum = fletcher4_64(&rows);
        let map = PermutationMap { children, nperms, seed, checksum, rows };
        map.check()?;
        if expected_checksum != 0 && checksum != expected_checksum {
            return Err(Error::EINTEGRITY);
        }
        Ok(map)
    }

    /// Validate the map: the recorded checksum must cover the rows, and
    /// every row must be a permutation of `0..children`.
    pub fn check(&self) -> Result<()> {
        if fletcher4_64(&self.rows) != self.checksum {
            return Err(Error::EINTEGRITY);
        }
        let c = self.children as usize;
        // One tally pass per row, using the row index as the sentinel so
        // the tally array never needs re-zeroing.
        let mut tally = vec![u64::MAX; c];
        for (p, row) in self.rows.chunks_exact(c).enumerate() {
            for &child in row {
                if usize::from(child) >= c || tally[usize::from(child)] == p as u64 {
                    return Err(Error::EINVAL);
                }
                tally[usize::from(child)] = p as u64;
            }
        }
        Ok(())
    }

    /// Row base and rotation for permutation index `pindex`
    pub fn get_perm(&self, pindex: u64) -> (&[u8], u64) {
        let row = ((pindex / self.children) % self.nperms) as usize;
        let iter = pindex % self.children;
        let c = self.children as usize;
        (&self.rows[row * c..(row + 1) * c], iter)
    }

    /// The effective child occupying column `col` under permutation
    /// `pindex`
    pub fn permute_id(&self, pindex: u64, col: u64) -> u64 {
        let (base, iter) = self.get_perm(pindex);
        (u64::from(base[col as usize]) + iter) % self.children
    }

    pub fn children(&self) -> u64 {
        self.children
    }

    pub fn nperms(&self) -> u64 {
        self.nperms
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn checksum(&self) -> u64 {
        self.checksum
    }

    #[cfg(test)]
    fn rows_mut(&mut self) -> &mut [u8] {
        &mut self.rows
    }
}
