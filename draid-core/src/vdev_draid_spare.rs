// vim: tw=80
//! Distributed spare vdev
//!
//! A `VdevDraidSpare` is a virtual leaf whose storage is sliced off the
//! tail columns of its parent dRAID's permutation: for any offset it
//! resolves, per slice, to one of the parent's concrete children and
//! forwards the I/O there.  It owns no storage of its own; even its
//! label region is simulated, so probe and config I/Os succeed without
//! touching disk.
//!
//! Its full identity fits in its name, `draid<parity>-<vdev>-<spare>`,
//! which is the only thing that has to be persisted to reconstruct it.

use std::sync::{Arc, Weak};

use futures::future;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    geometry::{VDEV_LABEL_END_SIZE, VDEV_LABEL_START_SIZE},
    types::*,
    vdev::*,
    vdev_draid::VdevDraid,
};

/// Parse a spare name of the form `draid<parity>-<vdev>-<spare>`
pub fn parse_name(name: &str) -> Result<(u64, u64, u64)> {
    let fields = name.strip_prefix("draid")
        .ok_or(Error::EINVAL)?
        .split('-')
        .map(|f| f.parse::<u64>().map_err(|_| Error::EINVAL))
        .collect::<Result<Vec<u64>>>()?;
    match fields[..] {
        [parity, vdev_id, spare_id] => Ok((parity, vdev_id, spare_id)),
        _ => Err(Error::EINVAL),
    }
}

/// Format a spare name from its identity triple
pub fn format_name(parity: u64, vdev_id: u64, spare_id: u64) -> String {
    format!("draid{parity}-{vdev_id}-{spare_id}")
}

/// Is the spare currently standing in for a failed child?
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SpareState {
    Active,
    Spare,
}

/// A label-equivalent configuration descriptor for a distributed spare
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SpareConfig {
    pub name:      String,
    pub pool_uuid: Uuid,
    /// Guid of the top-level vdev the spare projects onto
    pub top_uuid:  Uuid,
    pub vdev_id:   u64,
    pub spare_id:  u64,
    pub state:     SpareState,
}

/// `VdevDraidSpare`: a distributed spare, sibling of the real children
#[derive(Debug)]
pub struct VdevDraidSpare {
    /// Non-owning back-reference; the parent outlives any I/O it
    /// dispatches to us
    parent: Weak<VdevDraid>,
    uuid: Uuid,
    name: String,
    spare_id: u64,
    size: u64,
}

impl VdevDraidSpare {
    /// Open a distributed spare by name under its parent vdev.
    ///
    /// The name must parse, the parity must match the parent's, and the
    /// spare id must be within the parent's spare count.
    pub fn open(name: &str, parent: &Arc<VdevDraid>) -> Result<Arc<Self>> {
        let (parity, vdev_id, spare_id) = parse_name(name)?;
        if parity != parent.nparity() ||
            vdev_id != parent.vdev_id() ||
            spare_id >= parent.nspares()
        {
            return Err(Error::EINVAL);
        }
        Ok(Arc::new(VdevDraidSpare {
            parent: Arc::downgrade(parent),
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            spare_id,
            size: parent.child_size(),
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spare_id(&self) -> u64 {
        self.spare_id
    }

    /// Is the spare attached as a child of its parent right now?
    pub fn is_active(&self) -> bool {
        self.parent.upgrade()
            .map(|p| p.has_child_uuid(self.uuid))
            .unwrap_or(false)
    }

    /// Synthesize the configuration descriptor a label would carry
    pub fn read_config(&self) -> Result<SpareConfig> {
        let parent = self.parent.upgrade().ok_or(Error::ENXIO)?;
        let state = if self.is_active() {
            SpareState::Active
        } else {
            SpareState::Spare
        };
        Ok(SpareConfig {
            name: self.name.clone(),
            pool_uuid: parent.pool_uuid(),
            top_uuid: parent.uuid(),
            vdev_id: parent.vdev_id(),
            spare_id: self.spare_id,
            state,
        })
    }

    /// The concrete child holding this spare's slice at `offset`.  If
    /// the permutation resolves to another distributed spare, forwarding
    /// recurses through it.
    fn get_child(&self, offset: u64) -> Result<Arc<dyn VdevLeafApi>> {
        let parent = self.parent.upgrade().ok_or(Error::ENXIO)?;
        let child = parent.spare_child(self.spare_id, offset)?;
        if child.uuid() == self.uuid {
            // This slice of the spare's capacity lives on the very
            // child the spare is standing in for; parity must cover it
            return Err(Error::ENOENT);
        }
        Ok(child)
    }

    /// Does `[offset, offset + len)` fall in a simulated label region?
    fn label_range(&self, offset: u64, len: u64) -> bool {
        offset < VDEV_LABEL_START_SIZE ||
            offset + len > self.size - VDEV_LABEL_END_SIZE
    }
}

impl Vdev for VdevDraidSpare {
    fn size(&self) -> u64 {
        self.size
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn sync_all(&self) -> BoxVdevFut {
        // The spare's storage is the parent's children, so flushing the
        // parent flushes every byte the spare could have written
        match self.parent.upgrade() {
            Some(parent) => parent.sync_all(),
            None => Box::pin(future::err(Error::ENXIO)),
        }
    }
}

impl VdevLeafApi for VdevDraidSpare {
    fn readable(&self) -> bool {
        self.is_active()
    }

    fn writable(&self) -> bool {
        self.is_active()
    }

    fn is_spare(&self) -> bool {
        true
    }

    fn supports_trim(&self) -> bool {
        // Support depends on the child each offset resolves to; trim
        // fails per-offset instead
        true
    }

    fn read_at(&self, mut buf: IoVecMut, offset: u64, flags: IoFlags)
        -> BoxVdevFut
    {
        if self.label_range(offset, buf.len() as u64) {
            // Labels are not persisted.  Probe and config reads see
            // zeros; anything else has no business here.
            if flags.intersects(IoFlags::PROBE | IoFlags::CONFIG_READER) {
                buf[..].fill(0);
                return Box::pin(future::ok(()));
            }
            return Box::pin(future::err(Error::EIO));
        }
        match self.get_child(offset) {
            Ok(child) => child.read_at(buf, offset, flags),
            Err(e) => Box::pin(future::err(e)),
        }
    }

    fn readv_at(&self, mut bufs: SGListMut, offset: u64, flags: IoFlags)
        -> BoxVdevFut
    {
        let len = bufs.iter().map(|b| b.len() as u64).sum();
        if self.label_range(offset, len) {
            if flags.intersects(IoFlags::PROBE | IoFlags::CONFIG_READER) {
                for buf in bufs.iter_mut() {
                    buf[..].fill(0);
                }
                return Box::pin(future::ok(()));
            }
            return Box::pin(future::err(Error::EIO));
        }
        match self.get_child(offset) {
            Ok(child) => child.readv_at(bufs, offset, flags),
            Err(e) => Box::pin(future::err(e)),
        }
    }

    fn write_at(&self, buf: IoVec, offset: u64, flags: IoFlags)
        -> BoxVdevFut
    {
        if self.label_range(offset, buf.len() as u64) {
            if flags.intersects(IoFlags::PROBE | IoFlags::CONFIG_WRITER) {
                return Box::pin(future::ok(()));
            }
            return Box::pin(future::err(Error::EIO));
        }
        match self.get_child(offset) {
            Ok(child) => child.write_at(buf, offset, flags),
            Err(e) => Box::pin(future::err(e)),
        }
    }

    fn writev_at(&self, bufs: SGList, offset: u64, flags: IoFlags)
        -> BoxVdevFut
    {
        let len = bufs.iter().map(|b| b.len() as u64).sum();
        if self.label_range(offset, len) {
            if flags.intersects(IoFlags::PROBE | IoFlags::CONFIG_WRITER) {
                return Box::pin(future::ok(()));
            }
            return Box::pin(future::err(Error::EIO));
        }
        match self.get_child(offset) {
            Ok(child) => child.writev_at(bufs, offset, flags),
            Err(e) => Box::pin(future::err(e)),
        }
    }

    fn trim(&self, offset: u64, len: u64) -> BoxVdevFut {
        match self.get_child(offset) {
            Ok(child) if child.supports_trim() =>
                child.trim(offset, len),
            Ok(_) => Box::pin(future::err(Error::EOPNOTSUPP)),
            Err(e) => Box::pin(future::err(e)),
        }
    }
}
