// vim: tw=80
//! dRAID address arithmetic
//!
//! Pure, allocation-free math translating pool-relative byte offsets into
//! permutation indices, group columns, and per-child row offsets.  All of
//! it is fixed at vdev creation time: group width, data/parity/spare
//! counts, and the row height never change for the life of the pool.

use crate::{
    permutation::MAX_CHILDREN,
    types::{Error, Result},
    util::{rounddown, roundup},
};

/// Largest supported parity count
pub const MAX_PARITY: u64 = 3;

/// Height of one permutation row on every child, in bytes.  Equal to the
/// largest block the pool can allocate; frozen on disk.
pub const ROW_SIZE: u64 = 1 << 24;

/// Bytes reserved at the front of every child for labels and boot block
pub const VDEV_LABEL_START_SIZE: u64 = 4 << 20;

/// Bytes reserved at the tail of every child for labels
pub const VDEV_LABEL_END_SIZE: u64 = 512 << 10;

/// The physical location of one stripe, as computed by
/// [`Geometry::logical_to_physical`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Position {
    /// Permutation index of the slice holding the stripe
    pub perm: u64,
    /// First logical disk column of the group
    pub group_start: u64,
    /// Byte offset of the stripe's row on each child, before the label
    /// reservation
    pub offset: u64,
}

/// Immutable dRAID geometry for one top-level vdev
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Geometry {
    ndata: u64,
    nparity: u64,
    nspares: u64,
    children: u64,
    ngroups: u64,
    ashift: u8,
    // derived
    groupwidth: u64,
    ndisks: u64,
    group_size: u64,
    slice_size: u64,
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Geometry {
    /// Validate a configuration and derive the fixed quantities.
    ///
    /// Constraints: `nparity ∈ [1, 3]`, `children ∈ [nparity + 1, 255]`,
    /// `groupwidth ≤ children - nspares`, and `groupwidth × ngroups` must
    /// be a multiple of `children - nspares` so a whole number of groups
    /// fills a slice.
    pub fn new(ndata: u64, nparity: u64, nspares: u64, children: u64,
               ngroups: u64, ashift: u8) -> Result<Self>
    {
        if ndata == 0 ||
            !(1..=MAX_PARITY).contains(&nparity) ||
            children <= nparity ||
            children > MAX_CHILDREN ||
            nspares >= children ||
            !(9..=16).contains(&ashift)
        {
            return Err(Error::EINVAL);
        }
        let groupwidth = ndata + nparity;
        let ndisks = children - nspares;
        if groupwidth > ndisks ||
            ngroups == 0 ||
            (groupwidth * ngroups) % ndisks != 0
        {
            return Err(Error::EINVAL);
        }
        let group_size = groupwidth * ROW_SIZE;
        let slice_size = group_size * ngroups / ndisks;
        Ok(Geometry {
            ndata,
            nparity,
            nspares,
            children,
            ngroups,
            ashift,
            groupwidth,
            ndisks,
            group_size,
            slice_size,
        })
    }

    /// The smallest number of groups that tiles the disks evenly
    pub fn min_ngroups(ndata: u64, nparity: u64, nspares: u64,
                       children: u64) -> u64
    {
        let groupwidth = ndata + nparity;
        let ndisks = children - nspares;
        ndisks / gcd(groupwidth, ndisks)
    }

    pub fn ndata(&self) -> u64 {
        self.ndata
    }

    pub fn nparity(&self) -> u64 {
        self.nparity
    }

    pub fn nspares(&self) -> u64 {
        self.nspares
    }

    pub fn children(&self) -> u64 {
        self.children
    }

    pub fn ngroups(&self) -> u64 {
        self.ngroups
    }

    pub fn ashift(&self) -> u8 {
        self.ashift
    }

    /// `ndata + nparity`: the number of columns in one group
    pub fn groupwidth(&self) -> u64 {
        self.groupwidth
    }

    /// `children - nspares`: the number of columns data may occupy
    pub fn ndisks(&self) -> u64 {
        self.ndisks
    }

    /// Logical bytes spanned by one group
    pub fn group_size(&self) -> u64 {
        self.group_size
    }

    /// Bytes one slice consumes on each disk
    pub fn slice_size(&self) -> u64 {
        self.slice_size
    }

    /// One sector, in bytes
    pub fn unit(&self) -> u64 {
        1 << self.ashift
    }

    pub fn offset_to_group(&self, offset: u64) -> u64 {
        offset / self.group_size
    }

    pub fn group_to_offset(&self, group: u64) -> u64 {
        group * self.group_size
    }

    /// Does the allocation at `offset` of allocated size `asize` stay
    /// within a single group?
    pub fn single_group(&self, offset: u64, asize: u64) -> bool {
        asize > 0 &&
            self.offset_to_group(offset) ==
            self.offset_to_group(offset + asize - 1)
    }

    /// Round an allocation start up to the stripe width
    pub fn astart(&self, offset: u64) -> u64 {
        roundup(offset, self.groupwidth << self.ashift)
    }

    /// Allocated size for a payload of `psize` bytes, including parity
    /// and skip padding
    pub fn asize(&self, psize: u64) -> u64 {
        let sectors = (psize >> self.ashift).div_ceil(self.ndata);
        sectors * self.groupwidth << self.ashift
    }

    /// Payload size recoverable from an allocation of `asize` bytes
    pub fn psize(&self, asize: u64) -> u64 {
        let sectors = asize >> self.ashift;
        debug_assert_eq!(sectors % self.groupwidth, 0);
        (sectors / self.groupwidth) * self.ndata << self.ashift
    }

    /// The largest aligned allocation a rebuild may issue.  Remainder
    /// sectors are discarded so [`Geometry::psize`] never over-reports.
    pub fn max_rebuildable_asize(&self, max_segment: u64) -> u64 {
        let psize = max_segment.min(ROW_SIZE);
        let sectors = rounddown(psize >> self.ashift, self.ndata);
        self.asize(sectors << self.ashift)
    }

    /// Align a metaslab so it begins and ends on stripe boundaries
    pub fn metaslab_init(&self, start: u64, size: u64) -> (u64, u64) {
        let align = self.groupwidth << self.ashift;
        let astart = roundup(start, align);
        let asize = rounddown(size.saturating_sub(astart - start), align);
        (astart, asize)
    }

    /// Translate a logical stripe offset to its physical location.
    ///
    /// If `group_start + groupwidth` exceeds `ndisks` the group wraps:
    /// columns past the wrap live one row further down, at
    /// `offset + ROW_SIZE`.
    pub fn logical_to_physical(&self, offset: u64) -> Position {
        let unit_shift = self.ashift;
        let blocks_per_row = ROW_SIZE >> unit_shift;
        let group = self.offset_to_group(offset);
        let group_start = (group * self.groupwidth) % self.ndisks;
        let b = (offset >> unit_shift) %
            (blocks_per_row * self.groupwidth);
        debug_assert_eq!(b % self.groupwidth, 0);
        let perm = group / self.ngroups;
        let row = ((perm * self.groupwidth * self.ngroups) +
                   ((group % self.ngroups) * self.groupwidth)) /
            self.ndisks;
        let offset = (row * blocks_per_row + b / self.groupwidth) <<
            unit_shift;
        Position { perm, group_start, offset }
    }
}
