// vim: tw=80
//! Top-level dRAID vdev
//!
//! `VdevDraid` owns the geometry, the permutation map, and the child
//! devices of one distributed-RAID top-level vdev.  It lays every I/O
//! out with a [`StripeMap`], generates parity on writes, and on reads
//! consults child health and the dirty time logs to decide which columns
//! can be served, reconstructing the rest from parity.

use std::sync::{Arc, RwLock, atomic::Ordering};

use futures::{
    FutureExt,
    StreamExt,
    TryFutureExt,
    TryStreamExt,
    stream::FuturesUnordered,
};
use serde_derive::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::{
    codec::Codec,
    geometry::{Geometry, VDEV_LABEL_END_SIZE, VDEV_LABEL_START_SIZE},
    permutation::PermutationMap,
    stripe::{StripeMap, VerifyReport},
    types::*,
    vdev::*,
    vdev_draid_spare::VdevDraidSpare,
    vdev_state::{AtomicVdevState, VdevState},
};

#[derive(Serialize, Deserialize, Debug)]
pub struct Label {
    /// Vdev UUID, fixed at format time
    pub uuid:       Uuid,
    pub pool_uuid:  Uuid,
    /// Index of this vdev within the pool's root
    pub vdev_id:    u64,
    pub ndata:      u64,
    pub nparity:    u64,
    pub nspares:    u64,
    pub ngroups:    u64,
    pub ashift:     u8,
    pub children:   Vec<Uuid>,
}

/// How each child slot is supplied to [`VdevDraid::open`]
pub enum Child {
    /// An opened leaf device
    Leaf(Arc<dyn VdevLeafApi>),
    /// A distributed spare, opened after the real children so it sees
    /// the final child sizes
    Spare(String),
    /// The device could not be opened
    Missing,
}

/// `VdevDraid`: a top-level distributed-RAID virtual device
pub struct VdevDraid {
    geometry: Geometry,
    pmap: PermutationMap,
    codec: Codec,
    children: RwLock<Box<[Option<Arc<dyn VdevLeafApi>>]>>,
    child_uuids: Vec<Uuid>,
    /// Usable bytes on every child: the smallest real leaf
    child_size: u64,
    dtl: Arc<dyn Dtl>,
    state: AtomicVdevState,
    uuid: Uuid,
    pool_uuid: Uuid,
    vdev_id: u64,
}

impl std::fmt::Debug for VdevDraid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VdevDraid")
            .field("geometry", &self.geometry)
            .field("child_uuids", &self.child_uuids)
            .field("child_size", &self.child_size)
            .field("state", &self.state())
            .field("uuid", &self.uuid)
            .field("pool_uuid", &self.pool_uuid)
            .field("vdev_id", &self.vdev_id)
            .finish()
    }
}

impl VdevDraid {
    /// Create a brand-new dRAID vdev from freshly formatted leaves
    #[allow(clippy::too_many_arguments)]
    pub fn create(ndata: u64, nparity: u64, nspares: u64, ngroups: u64,
                  ashift: u8, pool_uuid: Uuid, vdev_id: u64,
                  leaves: Vec<Arc<dyn VdevLeafApi>>)
        -> Result<Arc<Self>>
    {
        let children = leaves.iter().map(|l| l.uuid()).collect();
        let label = Label {
            uuid: Uuid::new_v4(),
            pool_uuid,
            vdev_id,
            ndata,
            nparity,
            nspares,
            ngroups,
            ashift,
            children,
        };
        let children = leaves.into_iter().map(Child::Leaf).collect();
        Self::open(&label, children, Arc::new(CleanDtl::default()))
    }

    /// Open a dRAID vdev from its label and children.
    ///
    /// Real leaves are installed first; distributed spares open
    /// afterwards so they see the final child sizes.  Up to `nparity`
    /// children may be missing; any more fails with [`Error::ENXIO`].
    pub fn open(label: &Label, children: Vec<Child>, dtl: Arc<dyn Dtl>)
        -> Result<Arc<Self>>
    {
        if children.len() != label.children.len() {
            return Err(Error::EINVAL);
        }
        let geometry = Geometry::new(label.ndata, label.nparity,
                                     label.nspares,
                                     children.len() as u64,
                                     label.ngroups, label.ashift)?;
        let pmap = PermutationMap::open(geometry.children())?;
        let codec = Codec::new(geometry.ndata() as usize,
                               geometry.nparity() as usize);
        let mut slots: Vec<Option<Arc<dyn VdevLeafApi>>> =
            Vec::with_capacity(children.len());
        let mut spares = Vec::new();
        for (i, child) in children.into_iter().enumerate() {
            match child {
                Child::Leaf(leaf) => {
                    assert_eq!(leaf.uuid(), label.children[i],
                               "Opening disk from wrong dRAID");
                    slots.push(Some(leaf));
                },
                Child::Spare(name) => {
                    slots.push(None);
                    spares.push((i, name));
                },
                Child::Missing => slots.push(None),
            }
        }
        let child_size = slots.iter()
            .flatten()
            .map(|c| c.size())
            .min()
            .unwrap_or(0);
        if child_size == 0 {
            return Err(Error::ENXIO);
        }
        let vdev = Arc::new(VdevDraid {
            geometry,
            pmap,
            codec,
            children: RwLock::new(slots.into_boxed_slice()),
            child_uuids: label.children.clone(),
            child_size,
            dtl,
            state: AtomicVdevState::new(VdevState::Healthy),
            uuid: label.uuid,
            pool_uuid: label.pool_uuid,
            vdev_id: label.vdev_id,
        });
        for (i, name) in spares {
            match VdevDraidSpare::open(&name, &vdev) {
                Ok(spare) => vdev.replace_child(i, spare),
                Err(e) => warn!("spare {} failed to open: {:?}", name, e),
            }
        }
        let failed = vdev.children.read().unwrap().iter()
            .filter(|c| c.is_none())
            .count() as u64;
        if failed > vdev.geometry.nparity() {
            return Err(Error::ENXIO);
        }
        vdev.state_change();
        Ok(vdev)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn nparity(&self) -> u64 {
        self.geometry.nparity()
    }

    pub fn nspares(&self) -> u64 {
        self.geometry.nspares()
    }

    pub fn nchildren(&self) -> u64 {
        self.geometry.children()
    }

    pub fn pool_uuid(&self) -> Uuid {
        self.pool_uuid
    }

    pub fn vdev_id(&self) -> u64 {
        self.vdev_id
    }

    /// Usable bytes on every child device
    pub fn child_size(&self) -> u64 {
        self.child_size
    }

    pub fn label(&self) -> Label {
        Label {
            uuid: self.uuid,
            pool_uuid: self.pool_uuid,
            vdev_id: self.vdev_id,
            ndata: self.geometry.ndata(),
            nparity: self.geometry.nparity(),
            nspares: self.geometry.nspares(),
            ngroups: self.geometry.ngroups(),
            ashift: self.geometry.ashift(),
            children: self.child_uuids.clone(),
        }
    }

    /// Allocated size for a payload of `psize` bytes
    pub fn asize(&self, psize: u64) -> u64 {
        self.geometry.asize(psize)
    }

    /// Align a metaslab to stripe boundaries
    pub fn metaslab_init(&self, start: u64, size: u64) -> (u64, u64) {
        self.geometry.metaslab_init(start, size)
    }

    /// The largest aligned allocation a rebuild may issue
    pub fn max_rebuildable_asize(&self, max_segment: u64) -> u64 {
        self.geometry.max_rebuildable_asize(max_segment)
    }

    pub fn state(&self) -> VdevState {
        self.state.load(Ordering::Relaxed)
    }

    /// Re-evaluate this vdev's aggregate state after a child changed
    pub fn state_change(&self) {
        // Clone the child list first; a spare's readable() reenters the
        // children lock through its parent back-reference.
        let children = {
            let guard = self.children.read().unwrap();
            guard.iter().cloned().collect::<Vec<_>>()
        };
        let failed = children.iter()
            .filter(|c| match c {
                Some(c) => !c.readable(),
                None => true,
            }).count() as u64;
        let state = if failed == 0 {
            VdevState::Healthy
        } else if failed <= self.geometry.nparity() {
            VdevState::Degraded
        } else {
            VdevState::Faulted
        };
        let old = self.state.load(Ordering::Relaxed);
        if old != state {
            self.state.store(state, Ordering::Relaxed);
            warn!("dRAID {} transitioned from {:?} to {:?}", self.uuid,
                  old, state);
        }
    }

    /// Install a newly opened child (a repaired leaf or an activated
    /// distributed spare) in slot `idx`
    pub fn replace_child(&self, idx: usize, child: Arc<dyn VdevLeafApi>) {
        self.children.write().unwrap()[idx] = Some(child);
        self.state_change();
    }

    /// Mark the child in slot `idx` unavailable
    pub fn fault_child(&self, idx: usize) {
        self.children.write().unwrap()[idx] = None;
        self.state_change();
    }

    fn child(&self, idx: usize) -> Option<Arc<dyn VdevLeafApi>> {
        self.children.read().unwrap()[idx].clone()
    }

    fn writable_child(&self, idx: usize) -> Option<Arc<dyn VdevLeafApi>> {
        self.child(idx).filter(|c| c.writable())
    }

    /// Is a child with this uuid currently installed?
    pub(crate) fn has_child_uuid(&self, uuid: Uuid) -> bool {
        self.children.read().unwrap().iter()
            .flatten()
            .any(|c| c.uuid() == uuid)
    }

    /// How many children are currently unavailable?
    fn failed_children(&self) -> u64 {
        self.children.read().unwrap().iter()
            .filter(|c| c.is_none())
            .count() as u64
    }

    /// How many installed children are distributed spares?
    fn active_spares(&self) -> u64 {
        self.children.read().unwrap().iter()
            .flatten()
            .filter(|c| c.is_spare())
            .count() as u64
    }

    /// Resolve a distributed spare's offset to the concrete child
    /// holding it, via the tail columns of the permutation.
    pub(crate) fn spare_child(&self, spare_id: u64, offset: u64)
        -> Result<Arc<dyn VdevLeafApi>>
    {
        debug_assert!(spare_id < self.geometry.nspares());
        debug_assert!(offset >= VDEV_LABEL_START_SIZE);
        let perm = (offset - VDEV_LABEL_START_SIZE) /
            self.geometry.slice_size();
        let (base, iter) = self.pmap.get_perm(perm);
        let children = self.geometry.children();
        let idx = (children - 1 - spare_id) as usize;
        let cid = (u64::from(base[idx]) + iter) % children;
        self.child(cid as usize).ok_or(Error::ENOENT)
    }

    /// Mark columns whose children cannot serve this I/O before anything
    /// is dispatched
    fn premark(&self, map: &mut StripeMap, flags: IoFlags) {
        for i in 0..map.scols {
            let devidx = map.column(i).devidx;
            let offset = map.column(i).offset;
            let len = map.column(i).padded_size as u64;
            let child = self.child(devidx);
            let col = map.column_mut(i);
            match child {
                None => {
                    col.skipped = true;
                    col.error = Some(Error::ENOENT);
                },
                Some(c) if !c.readable() => {
                    col.skipped = true;
                    col.error = Some(Error::ENOENT);
                },
                Some(c) if c.dtl_contains(DtlKind::Missing, None, offset,
                                          len) => {
                    col.skipped = true;
                    col.error = Some(Error::ESTALE);
                },
                Some(c) => {
                    // A spare standing in for a replaced device must be
                    // rewritten by a resilver even when it reads cleanly
                    if flags.contains(IoFlags::RESILVER) && c.is_spare() {
                        col.force_repair = true;
                    }
                },
            }
        }
    }

    /// Write one block.  `buf` must be sector-aligned and the allocation
    /// must stay within a single group.
    #[tracing::instrument(skip(self, buf))]
    pub async fn write_at(&self, buf: IoVec, offset: u64) -> Result<()> {
        let psize = buf.len();
        let map = StripeMap::new(self.geometry, &self.pmap, offset, psize);
        map.generate_parity(&buf, &self.codec);
        if self.nchildren() - self.failed_children() <
            self.geometry.ndata()
        {
            return Err(Error::ENXIO);
        }
        let mut failed = 0;
        let mut futs = FuturesUnordered::new();
        for i in 0..map.scols {
            let col = map.column(i);
            match self.writable_child(col.devidx) {
                Some(child) => {
                    let sglist = map.write_bufs(i, &buf);
                    futs.push(child.writev_at(sglist, col.offset,
                                              IoFlags::default()));
                },
                None => failed += 1,
            }
        }
        while let Some(r) = futs.next().await {
            if r.is_err() {
                failed += 1;
            }
        }
        if failed as u64 > self.geometry.nparity() {
            Err(Error::EIO)
        } else {
            Ok(())
        }
    }

    /// Read one block.  Degraded and erroring columns are reconstructed
    /// from parity when possible.
    #[tracing::instrument(skip(self, buf))]
    pub async fn read_at(&self, mut buf: IoVecMut, offset: u64)
        -> Result<()>
    {
        let psize = buf.len();
        let mut map = StripeMap::new(self.geometry, &self.pmap, offset,
                                     psize)
            .with_scrub_buffers();
        self.premark(&mut map, IoFlags::default());

        // Tight phase: only the populated data columns
        let mut futs = FuturesUnordered::new();
        for (i, bufs) in map.tight_read_bufs() {
            if map.column(i).skipped {
                continue;
            }
            let devidx = map.column(i).devidx;
            let coff = map.column(i).offset;
            match self.child(devidx) {
                Some(child) => {
                    futs.push(child.readv_at(bufs, coff,
                                             IoFlags::default())
                        .map(move |r| (i, r)));
                },
                None => {
                    let col = map.column_mut(i);
                    col.skipped = true;
                    col.error = Some(Error::ENOENT);
                },
            }
        }
        while let Some((i, r)) = futs.next().await {
            let col = map.column_mut(i);
            col.tried = true;
            if let Err(e) = r {
                col.error = Some(e);
            }
        }

        let missing = (map.first_data_col..map.cols)
            .filter(|&i| map.column(i).error.is_some())
            .count();
        if missing > 0 {
            // Expanded phase: pull in parity and skip sectors, then
            // rebuild the lost columns
            self.read_expansion(&mut map, IoFlags::default()).await;
            map.reconstruct(&self.codec)?;
        }
        buf[..].copy_from_slice(&map.payload()[..]);
        Ok(())
    }

    /// Read the parity columns and skip sectors of a stripe whose tight
    /// read came up short
    async fn read_expansion(&self, map: &mut StripeMap, flags: IoFlags) {
        let mut futs = FuturesUnordered::new();
        for (i, pbuf) in map.parity_read_bufs() {
            if map.column(i).skipped {
                continue;
            }
            let devidx = map.column(i).devidx;
            let coff = map.column(i).offset;
            match self.child(devidx) {
                Some(child) => {
                    futs.push(child.read_at(pbuf, coff, flags)
                        .map(move |r| (i, r))
                        .boxed());
                },
                None => {
                    map.column_mut(i).error = Some(Error::ENOENT);
                },
            }
        }
        for (i, sbuf) in map.skip_read_bufs() {
            let col = map.column(i);
            if col.skipped || col.error.is_some() {
                continue;
            }
            let offset = col.offset + col.size as u64;
            if let Some(child) = self.child(col.devidx) {
                futs.push(child.read_at(sbuf, offset, flags)
                    .map(move |r| (i, r))
                    .boxed());
            }
        }
        while let Some((i, r)) = futs.next().await {
            let first_data_col = map.first_data_col;
            let col = map.column_mut(i);
            col.tried = true;
            if let Err(e) = r {
                // A failed skip-sector read leaves the zeroed backing in
                // place; only parity columns must be marked lost
                if col.error.is_none() && i < first_data_col {
                    col.error = Some(e);
                }
            }
        }
    }

    /// Scrub or resilver one block: read every column including skip
    /// sectors, rebuild what cannot be read, verify parity, and rewrite
    /// whatever was missing, stale, or corrupt.
    #[tracing::instrument(skip(self))]
    pub async fn scrub_at(&self, offset: u64, psize: usize, flags: IoFlags)
        -> Result<VerifyReport>
    {
        debug_assert!(flags.intersects(IoFlags::SCRUB | IoFlags::RESILVER |
                                       IoFlags::REBUILD));
        let mut map = StripeMap::new(self.geometry, &self.pmap, offset,
                                     psize)
            .with_scrub_buffers();
        self.premark(&mut map, flags);

        let mut futs = FuturesUnordered::new();
        for (i, bufs) in map.scrub_read_bufs() {
            if map.column(i).skipped {
                continue;
            }
            let devidx = map.column(i).devidx;
            let coff = map.column(i).offset;
            match self.child(devidx) {
                Some(child) => {
                    futs.push(child.readv_at(bufs, coff, flags)
                        .map(move |r| (i, r)));
                },
                None => {
                    let col = map.column_mut(i);
                    col.skipped = true;
                    col.error = Some(Error::ENOENT);
                },
            }
        }
        while let Some((i, r)) = futs.next().await {
            let col = map.column_mut(i);
            col.tried = true;
            if let Err(e) = r {
                col.error = Some(e);
            }
        }

        map.reconstruct(&self.codec)?;
        let report = map.verify(&self.codec);

        let mut repairs = FuturesUnordered::new();
        for i in 0..map.scols {
            let col = map.column(i);
            let needs = col.error.is_some() || col.force_repair ||
                report.parity_bad.contains(&i) ||
                report.skips_bad.contains(&i);
            if !needs {
                continue;
            }
            if let Some(child) = self.writable_child(col.devidx) {
                repairs.push(child.writev_at(map.repair_bufs(i),
                                             col.offset, flags)
                    .map(move |r| (i, r)));
            }
        }
        while let Some((i, r)) = repairs.next().await {
            if let Err(e) = r {
                warn!("dRAID {}: repair of column {} failed: {:?}",
                      self.uuid, i, e);
            }
        }
        Ok(report)
    }

    /// Is the group holding `offset` missing any of its children?
    pub fn group_degraded(&self, offset: u64) -> bool {
        let pos = self.geometry.logical_to_physical(offset);
        let ndisks = self.geometry.ndisks();
        (0..self.geometry.groupwidth()).any(|i| {
            let pcol = (pos.group_start + i) % ndisks;
            let devidx = self.pmap.permute_id(pos.perm, pcol) as usize;
            match self.child(devidx) {
                Some(c) => !c.readable(),
                None => true,
            }
        })
    }

    /// Must the block at `offset` be rebuilt?
    ///
    /// `phys_birth` is the transaction group the block was born in, or
    /// `None` during a sequential rebuild, when birth times are not
    /// consulted.
    pub fn need_resilver(&self, offset: u64, len: u64,
                         phys_birth: Option<TxgT>) -> bool
    {
        // Multiple active spares mean a second fault during rebuild;
        // err on the side of rebuilding everything
        if self.active_spares() > 1 {
            return true;
        }
        if let Some(txg) = phys_birth {
            if !self.dtl.contains(DtlKind::Partial, Some(txg), offset, len)
            {
                return false;
            }
        }
        self.group_degraded(offset)
    }

    /// Translate an in-group logical range to the physical range it
    /// covers on child `devidx`, or `None` if the range does not touch
    /// that child.
    pub fn xlate(&self, devidx: usize, start: u64, end: u64)
        -> Option<(u64, u64)>
    {
        debug_assert!(end > start);
        debug_assert!(self.geometry.single_group(start, end - start));
        let pos = self.geometry.logical_to_physical(start);
        let gw = self.geometry.groupwidth();
        let ndisks = self.geometry.ndisks();
        let col = (0..gw).find(|&i| {
            let pcol = (pos.group_start + i) % ndisks;
            self.pmap.permute_id(pos.perm, pcol) as usize == devidx
        })?;
        let sectors_per_col = ((end - start) >> self.geometry.ashift()) /
            gw;
        let mut phys = pos.offset + VDEV_LABEL_START_SIZE;
        if pos.group_start + col >= ndisks {
            phys += crate::geometry::ROW_SIZE;
        }
        Some((phys, phys + (sectors_per_col << self.geometry.ashift())))
    }

    /// Deallocate an in-group range on every child that supports it
    pub async fn trim(&self, start: u64, end: u64) -> Result<()> {
        let children = {
            let guard = self.children.read().unwrap();
            guard.iter().cloned().collect::<Vec<_>>()
        };
        let fut = children.into_iter()
            .enumerate()
            .filter_map(|(i, child)| {
                let child = child?;
                if !child.supports_trim() {
                    return None;
                }
                let (pstart, pend) = self.xlate(i, start, end)?;
                Some(child.trim(pstart, pend - pstart))
            })
            .collect::<FuturesUnordered<_>>()
            .try_collect::<Vec<_>>()
            .map_ok(drop);
        fut.await
    }
}

impl Vdev for VdevDraid {
    fn size(&self) -> u64 {
        let usable = self.child_size -
            (VDEV_LABEL_START_SIZE + VDEV_LABEL_END_SIZE);
        let nslices = usable / self.geometry.slice_size();
        nslices * self.geometry.ngroups() * self.geometry.group_size()
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn sync_all(&self) -> BoxVdevFut {
        // A spare's storage is the real children, and its sync_all
        // broadcasts back through this vdev, so flush leaves only.
        let children = {
            let guard = self.children.read().unwrap();
            guard.iter().flatten().cloned().collect::<Vec<_>>()
        };
        let fut = children.into_iter()
            .filter(|c| !c.is_spare())
            .map(|c| c.sync_all())
            .collect::<FuturesUnordered<_>>()
            .try_collect::<Vec<_>>()
            .map_ok(drop);
        Box::pin(fut)
    }
}

#[cfg(test)]
mod t {
    use std::sync::atomic::{AtomicU32, Ordering};

    use divbuf::DivBufShared;
    use futures::future;
    use pretty_assertions::assert_eq;

    use crate::vdev::MockVdevLeaf;
    use super::*;

    const CHILD_SIZE: u64 = 1 << 30;

    fn mock_leaf() -> MockVdevLeaf {
        let mut leaf = MockVdevLeaf::default();
        leaf.expect_uuid().return_const(Uuid::new_v4());
        leaf.expect_size().return_const(CHILD_SIZE);
        leaf.expect_readable().return_const(true);
        leaf.expect_writable().return_const(true);
        leaf.expect_is_spare().return_const(false);
        leaf.expect_supports_trim().return_const(false);
        leaf.expect_dtl_contains().return_const(false);
        leaf
    }

    fn leaves(n: usize, f: impl Fn(usize, &mut MockVdevLeaf))
        -> Vec<Arc<dyn VdevLeafApi>>
    {
        (0..n).map(|i| {
            let mut leaf = mock_leaf();
            f(i, &mut leaf);
            Arc::new(leaf) as Arc<dyn VdevLeafApi>
        }).collect()
    }

    /// draid1:8d:14c:2s
    fn draid_8_1_2(leaves: Vec<Arc<dyn VdevLeafApi>>)
        -> Result<Arc<VdevDraid>>
    {
        VdevDraid::create(8, 1, 2, 4, 12, Uuid::new_v4(), 0, leaves)
    }

    mod open {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn healthy() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            assert_eq!(vdev.state(), VdevState::Healthy);
            assert_eq!(vdev.child_size(), CHILD_SIZE);
            assert_eq!(vdev.nchildren(), 14);
            assert_eq!(vdev.label().children.len(), 14);
        }

        #[test]
        fn child_size_is_minimum() {
            let children = leaves(14, |i, leaf| {
                if i == 3 {
                    leaf.checkpoint();
                    leaf.expect_uuid().return_const(Uuid::new_v4());
                    leaf.expect_readable().return_const(true);
                    leaf.expect_writable().return_const(true);
                    leaf.expect_size().return_const(CHILD_SIZE / 2);
                }
            });
            let vdev = draid_8_1_2(children).unwrap();
            assert_eq!(vdev.child_size(), CHILD_SIZE / 2);
        }

        #[test]
        fn tolerates_missing_children() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            let label = vdev.label();
            let children = vdev.children.read().unwrap().iter()
                .enumerate()
                .map(|(i, c)| {
                    if i == 0 {
                        Child::Missing
                    } else {
                        Child::Leaf(c.clone().unwrap())
                    }
                }).collect();
            let dtl = Arc::new(CleanDtl::default());
            let reopened = VdevDraid::open(&label, children, dtl).unwrap();
            assert_eq!(reopened.state(), VdevState::Degraded);
        }

        #[test]
        fn too_many_missing_children() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            let label = vdev.label();
            let children = vdev.children.read().unwrap().iter()
                .enumerate()
                .map(|(i, c)| {
                    if i < 2 {
                        Child::Missing
                    } else {
                        Child::Leaf(c.clone().unwrap())
                    }
                }).collect();
            let dtl = Arc::new(CleanDtl::default());
            assert_eq!(VdevDraid::open(&label, children, dtl).unwrap_err(),
                       Error::ENXIO);
        }

        #[test]
        fn bad_geometry() {
            // groupwidth exceeds the number of non-spare children
            let e = VdevDraid::create(8, 1, 2, 1, 12, Uuid::new_v4(), 0,
                                      leaves(10, |_, _| ()))
                .unwrap_err();
            assert_eq!(e, Error::EINVAL);
        }
    }

    mod write_at {
        use super::*;
        use pretty_assertions::assert_eq;

        /// A 4 KiB write becomes one child write per stripe column: one
        /// data sector, one parity sector, and seven skip sectors.
        #[tokio::test]
        async fn single_sector() {
            let writes = Arc::new(AtomicU32::new(0));
            let children = leaves(14, |_, leaf| {
                let writes2 = writes.clone();
                leaf.expect_writev_at()
                    .withf(|sglist, offset, _flags| {
                        let len: usize =
                            sglist.iter().map(|b| b.len()).sum();
                        len == 4096 && *offset == VDEV_LABEL_START_SIZE
                    })
                    .returning(move |_, _, _| {
                        writes2.fetch_add(1, Ordering::Relaxed);
                        Box::pin(future::ok::<(), Error>(()))
                    });
            });
            let vdev = draid_8_1_2(children).unwrap();
            let dbs = DivBufShared::from(vec![0xa5u8; 4096]);
            vdev.write_at(dbs.try_const().unwrap(), 0).await.unwrap();
            assert_eq!(writes.load(Ordering::Relaxed), 9);
        }

        /// A full-stripe 64 KiB write carries 8 KiB on every column and
        /// no skip sectors
        #[tokio::test]
        async fn full_stripe() {
            let writes = Arc::new(AtomicU32::new(0));
            let children = leaves(14, |_, leaf| {
                let writes2 = writes.clone();
                leaf.expect_writev_at()
                    .withf(|sglist, offset, _flags| {
                        let len: usize =
                            sglist.iter().map(|b| b.len()).sum();
                        len == 8192 && *offset == VDEV_LABEL_START_SIZE
                    })
                    .returning(move |_, _, _| {
                        writes2.fetch_add(1, Ordering::Relaxed);
                        Box::pin(future::ok::<(), Error>(()))
                    });
            });
            let vdev = draid_8_1_2(children).unwrap();
            let dbs = DivBufShared::from(vec![0x5au8; 65536]);
            vdev.write_at(dbs.try_const().unwrap(), 0).await.unwrap();
            assert_eq!(writes.load(Ordering::Relaxed), 9);
        }

        /// Too few surviving children to hold the data
        #[tokio::test]
        async fn no_replicas() {
            let children = leaves(2, |_, _| ());
            let vdev = VdevDraid::create(1, 1, 0, 1, 12, Uuid::new_v4(),
                                         0, children).unwrap();
            vdev.fault_child(0);
            vdev.fault_child(1);
            assert_eq!(vdev.state(), VdevState::Faulted);
            let dbs = DivBufShared::from(vec![0u8; 4096]);
            let e = vdev.write_at(dbs.try_const().unwrap(), 0).await
                .unwrap_err();
            assert_eq!(e, Error::ENXIO);
        }
    }

    mod read_at {
        use super::*;
        use pretty_assertions::assert_eq;

        /// A healthy read only touches the populated data columns
        #[tokio::test]
        async fn healthy_is_tight() {
            let reads = Arc::new(AtomicU32::new(0));
            let children = leaves(14, |_, leaf| {
                let reads2 = reads.clone();
                leaf.expect_readv_at()
                    .withf(|bufs, offset, _flags| {
                        let len: usize =
                            bufs.iter().map(|b| b.len()).sum();
                        len == 8192 && *offset == VDEV_LABEL_START_SIZE
                    })
                    .returning(move |_, _, _| {
                        reads2.fetch_add(1, Ordering::Relaxed);
                        Box::pin(future::ok::<(), Error>(()))
                    });
            });
            let vdev = draid_8_1_2(children).unwrap();
            let dbs = DivBufShared::from(vec![0u8; 65536]);
            vdev.read_at(dbs.try_mut().unwrap(), 0).await.unwrap();
            assert_eq!(reads.load(Ordering::Relaxed), 8);
        }

        /// With a missing child, the read expands to parity and skip
        /// sectors and still succeeds
        #[tokio::test]
        async fn degraded() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            // Find the child holding a data column of group 0
            let victim = {
                let map = StripeMap::new(*vdev.geometry(), &vdev.pmap, 0,
                                         65536);
                map.column(3).devidx
            };
            drop(vdev);

            let reads = Arc::new(AtomicU32::new(0));
            let reads2 = reads.clone();
            let children = leaves(14, move |_, leaf| {
                let reads3 = reads2.clone();
                leaf.expect_readv_at()
                    .returning(move |_, _, _| {
                        reads3.fetch_add(1, Ordering::Relaxed);
                        Box::pin(future::ok::<(), Error>(()))
                    });
                let reads3 = reads2.clone();
                leaf.expect_read_at()
                    .returning(move |_, _, _| {
                        reads3.fetch_add(1, Ordering::Relaxed);
                        Box::pin(future::ok::<(), Error>(()))
                    });
            });
            let vdev = draid_8_1_2(children).unwrap();
            vdev.fault_child(victim);
            assert_eq!(vdev.state(), VdevState::Degraded);
            let dbs = DivBufShared::from(vec![0u8; 65536]);
            vdev.read_at(dbs.try_mut().unwrap(), 0).await.unwrap();
            // 7 surviving data columns plus the parity column
            assert_eq!(reads.load(Ordering::Relaxed), 8);
        }

        /// Losing more columns than parity fails the read
        #[tokio::test]
        async fn unrecoverable() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            let (v1, v2) = {
                let map = StripeMap::new(*vdev.geometry(), &vdev.pmap, 0,
                                         65536);
                (map.column(3).devidx, map.column(4).devidx)
            };
            drop(vdev);
            let children = leaves(14, |_, leaf| {
                leaf.expect_readv_at()
                    .returning(|_, _, _| Box::pin(future::ok::<(), Error>(())));
                leaf.expect_read_at()
                    .returning(|_, _, _| Box::pin(future::ok::<(), Error>(())));
            });
            let vdev = draid_8_1_2(children).unwrap();
            vdev.fault_child(v1);
            vdev.fault_child(v2);
            let dbs = DivBufShared::from(vec![0u8; 65536]);
            let e = vdev.read_at(dbs.try_mut().unwrap(), 0).await
                .unwrap_err();
            assert_eq!(e, Error::EIO);
        }

        /// A stale child is skipped, not read
        #[tokio::test]
        async fn stale_child() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            let victim = {
                let map = StripeMap::new(*vdev.geometry(), &vdev.pmap, 0,
                                         65536);
                map.column(1).devidx
            };
            drop(vdev);
            let children = leaves(14, move |i, leaf| {
                leaf.checkpoint();
                leaf.expect_uuid().return_const(Uuid::new_v4());
                leaf.expect_size().return_const(CHILD_SIZE);
                leaf.expect_readable().return_const(true);
                leaf.expect_writable().return_const(true);
                leaf.expect_is_spare().return_const(false);
                leaf.expect_dtl_contains()
                    .return_const(i == victim);
                if i == victim {
                    leaf.expect_readv_at().times(0);
                } else {
                    leaf.expect_readv_at()
                        .returning(|_, _, _| Box::pin(future::ok::<(), Error>(())));
                }
                leaf.expect_read_at()
                    .returning(|_, _, _| Box::pin(future::ok::<(), Error>(())));
            });
            let vdev = draid_8_1_2(children).unwrap();
            let dbs = DivBufShared::from(vec![0u8; 65536]);
            vdev.read_at(dbs.try_mut().unwrap(), 0).await.unwrap();
        }
    }

    mod scrub {
        use super::*;
        use pretty_assertions::assert_eq;

        /// A healthy scrub reads every column, skip sectors included,
        /// and repairs nothing
        #[tokio::test]
        async fn healthy() {
            let reads = Arc::new(AtomicU32::new(0));
            let children = leaves(14, |_, leaf| {
                let reads2 = reads.clone();
                leaf.expect_readv_at()
                    .withf(|bufs, offset, flags| {
                        let len: usize =
                            bufs.iter().map(|b| b.len()).sum();
                        len == 4096 && *offset == VDEV_LABEL_START_SIZE &&
                            flags.contains(IoFlags::SCRUB)
                    })
                    .returning(move |_, _, _| {
                        reads2.fetch_add(1, Ordering::Relaxed);
                        Box::pin(future::ok::<(), Error>(()))
                    });
                leaf.expect_writev_at().times(0);
            });
            let vdev = draid_8_1_2(children).unwrap();
            let report = vdev.scrub_at(0, 4096, IoFlags::SCRUB).await
                .unwrap();
            assert!(report.is_clean());
            // All 9 columns read: 1 parity, 1 data, 7 skip
            assert_eq!(reads.load(Ordering::Relaxed), 9);
        }

        /// A missing child's column is rebuilt and rewritten when the
        /// child comes back writable
        #[tokio::test]
        async fn repairs_missing_column() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            let victim = {
                let map = StripeMap::new(*vdev.geometry(), &vdev.pmap, 0,
                                         65536);
                map.column(3).devidx
            };
            drop(vdev);
            let repairs = Arc::new(AtomicU32::new(0));
            let repairs2 = repairs.clone();
            let children = leaves(14, move |i, leaf| {
                leaf.checkpoint();
                leaf.expect_uuid().return_const(Uuid::new_v4());
                leaf.expect_size().return_const(CHILD_SIZE);
                leaf.expect_writable().return_const(true);
                leaf.expect_is_spare().return_const(false);
                leaf.expect_dtl_contains().return_const(false);
                leaf.expect_readable().return_const(i != victim);
                leaf.expect_readv_at()
                    .returning(|_, _, _| Box::pin(future::ok::<(), Error>(())));
                let repairs3 = repairs2.clone();
                if i == victim {
                    leaf.expect_writev_at()
                        .times(1)
                        .returning(move |_, _, _| {
                            repairs3.fetch_add(1, Ordering::Relaxed);
                            Box::pin(future::ok::<(), Error>(()))
                        });
                } else {
                    leaf.expect_writev_at().times(0);
                }
            });
            let vdev = draid_8_1_2(children).unwrap();
            vdev.scrub_at(0, 65536, IoFlags::SCRUB).await.unwrap();
            assert_eq!(repairs.load(Ordering::Relaxed), 1);
        }
    }

    mod need_resilver {
        use super::*;

        #[test]
        fn multiple_active_spares() {
            let children = leaves(14, |i, leaf| {
                if i < 2 {
                    leaf.checkpoint();
                    leaf.expect_uuid().return_const(Uuid::new_v4());
                    leaf.expect_size().return_const(CHILD_SIZE);
                    leaf.expect_readable().return_const(true);
                    leaf.expect_is_spare().return_const(true);
                }
            });
            let vdev = draid_8_1_2(children).unwrap();
            assert!(vdev.need_resilver(0, 4096, Some(100)));
        }

        #[test]
        fn sequential_rebuild_checks_degradation() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            assert!(!vdev.need_resilver(0, 4096, None));
            let victim = {
                let map = StripeMap::new(*vdev.geometry(), &vdev.pmap, 0,
                                         4096);
                map.column(0).devidx
            };
            vdev.fault_child(victim);
            assert!(vdev.need_resilver(0, 4096, None));
        }

        #[test]
        fn healing_resilver_consults_the_dtl() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            let label = vdev.label();
            let children = vdev.children.read().unwrap().iter()
                .map(|c| Child::Leaf(c.clone().unwrap()))
                .collect::<Vec<_>>();
            drop(vdev);
            let mut dtl = MockDtl::default();
            dtl.expect_contains()
                .withf(|kind, txg, _, _|
                       *kind == DtlKind::Partial && *txg == Some(42))
                .return_const(true);
            let vdev = VdevDraid::open(&label, children, Arc::new(dtl))
                .unwrap();
            // DTL says partial, but the group is healthy
            assert!(!vdev.need_resilver(0, 4096, Some(42)));
            let victim = {
                let map = StripeMap::new(*vdev.geometry(), &vdev.pmap, 0,
                                         4096);
                map.column(0).devidx
            };
            vdev.fault_child(victim);
            assert!(vdev.need_resilver(0, 4096, Some(42)));
        }

        #[test]
        fn clean_dtl_means_no_resilver() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            let victim = {
                let map = StripeMap::new(*vdev.geometry(), &vdev.pmap, 0,
                                         4096);
                map.column(0).devidx
            };
            vdev.fault_child(victim);
            // Degraded, but the block's txg was never missed
            assert!(!vdev.need_resilver(0, 4096, Some(7)));
        }
    }

    mod xlate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn every_group_child_gets_a_range() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            let end = 9 * 4096;
            let mut hits = 0;
            for devidx in 0..14 {
                if let Some((s, e)) = vdev.xlate(devidx, 0, end) {
                    assert_eq!(s, VDEV_LABEL_START_SIZE);
                    assert_eq!(e - s, 4096);
                    hits += 1;
                }
            }
            assert_eq!(hits, 9);
        }

        /// Wrapped columns translate one row further down
        #[test]
        fn wrapped_group() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            let gsz = vdev.geometry().group_size();
            let map = StripeMap::new(*vdev.geometry(), &vdev.pmap, gsz,
                                     9 * 4096);
            let (s, _) = vdev.xlate(map.column(0).devidx, gsz,
                                    gsz + 9 * 4096).unwrap();
            assert_eq!(s, VDEV_LABEL_START_SIZE);
            let (s, _) = vdev.xlate(map.column(8).devidx, gsz,
                                    gsz + 9 * 4096).unwrap();
            assert_eq!(s, VDEV_LABEL_START_SIZE +
                       crate::geometry::ROW_SIZE);
        }
    }

    mod spare_child {
        use super::*;
        use pretty_assertions::assert_eq;

        /// In the identity permutation, spare 0 occupies the last column
        #[test]
        fn resolves_via_permutation_tail() {
            let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
            let child = vdev.spare_child(0, VDEV_LABEL_START_SIZE)
                .unwrap();
            assert_eq!(child.uuid(), vdev.child_uuids[13]);
            let child = vdev.spare_child(1, VDEV_LABEL_START_SIZE)
                .unwrap();
            assert_eq!(child.uuid(), vdev.child_uuids[12]);
        }
    }

    #[test]
    fn vdev_size() {
        let vdev = draid_8_1_2(leaves(14, |_, _| ())).unwrap();
        // (1 GiB - 4.5 MiB) usable per child, 48 MiB per slice
        let usable = CHILD_SIZE - (VDEV_LABEL_START_SIZE +
                                   VDEV_LABEL_END_SIZE);
        let nslices = usable / vdev.geometry().slice_size();
        assert_eq!(vdev.size(),
                   nslices * 4 * vdev.geometry().group_size());
    }
}
