// vim: tw=80
//! Vdev traits
//!
//! `Vdev` is the capability set every virtual device implements.
//! `VdevLeafApi` is the child-device API the dRAID layer consumes: real
//! leaves and distributed spares implement it alike, so the top-level
//! vdev never needs to know which kind it is dispatching to.

use std::pin::Pin;

use futures::Future;
#[cfg(test)] use mockall::mock;
use uuid::Uuid;

use crate::types::*;

/// Future returned by most vdev operations
pub type BoxVdevFut = Pin<Box<dyn Future<Output = Result<()>> + Send>>;

bitflags::bitflags! {
    /// Properties of a single I/O as it travels down the vdev tree
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct IoFlags: u32 {
        /// Part of a scrub; skip sectors must be read and verified
        const SCRUB         = 1 << 0;
        /// Part of a healing resilver
        const RESILVER      = 1 << 1;
        /// Part of a sequential rebuild
        const REBUILD       = 1 << 2;
        /// Probing for device health
        const PROBE         = 1 << 3;
        /// Reading the label/config region
        const CONFIG_READER = 1 << 4;
        /// Writing the label/config region
        const CONFIG_WRITER = 1 << 5;
    }
}

/// The two questions one can ask a dirty time log
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DtlKind {
    /// Every copy of the range was missed
    Missing,
    /// At least one copy of the range was missed
    Partial,
}

/// A "dirty time log": an external oracle answering whether a given range
/// is known-current.  Its storage lives outside the dRAID core.
#[cfg_attr(test, mockall::automock)]
pub trait Dtl: Send + Sync {
    fn contains(&self, kind: DtlKind, txg: Option<TxgT>, offset: u64,
                len: u64) -> bool;
}

/// A DTL for a device that has never missed a write
#[derive(Debug, Default)]
pub struct CleanDtl {}

impl Dtl for CleanDtl {
    fn contains(&self, _kind: DtlKind, _txg: Option<TxgT>, _offset: u64,
                _len: u64) -> bool
    {
        false
    }
}

/// Methods common to all vdevs
pub trait Vdev: Send + Sync {
    /// Size of the vdev in bytes
    fn size(&self) -> u64;

    fn uuid(&self) -> Uuid;

    /// Asynchronously flush all caches to stable storage
    fn sync_all(&self) -> BoxVdevFut;
}

/// The API the dRAID layer consumes from its child devices
pub trait VdevLeafApi: Vdev {
    /// May reads be issued to this device right now?
    fn readable(&self) -> bool;

    /// May writes be issued to this device right now?
    fn writable(&self) -> bool;

    /// Is this child a distributed spare?
    fn is_spare(&self) -> bool {
        false
    }

    /// Can this device deallocate unused ranges?
    fn supports_trim(&self) -> bool {
        false
    }

    /// Query this device's dirty time log
    fn dtl_contains(&self, kind: DtlKind, txg: Option<TxgT>, offset: u64,
                    len: u64) -> bool
    {
        let _ = (kind, txg, offset, len);
        false
    }

    fn read_at(&self, buf: IoVecMut, offset: u64, flags: IoFlags)
        -> BoxVdevFut;

    fn readv_at(&self, bufs: SGListMut, offset: u64, flags: IoFlags)
        -> BoxVdevFut;

    fn write_at(&self, buf: IoVec, offset: u64, flags: IoFlags)
        -> BoxVdevFut;

    fn writev_at(&self, bufs: SGList, offset: u64, flags: IoFlags)
        -> BoxVdevFut;

    /// Deallocate a range of the device
    fn trim(&self, offset: u64, len: u64) -> BoxVdevFut;
}

// LCOV_EXCL_START
#[cfg(test)]
mock! {
    pub VdevLeaf {}
    impl Vdev for VdevLeaf {
        fn size(&self) -> u64;
        fn uuid(&self) -> Uuid;
        fn sync_all(&self) -> BoxVdevFut;
    }
    impl VdevLeafApi for VdevLeaf {
        fn readable(&self) -> bool;
        fn writable(&self) -> bool;
        fn is_spare(&self) -> bool;
        fn supports_trim(&self) -> bool;
        fn dtl_contains(&self, kind: DtlKind, txg: Option<TxgT>,
                        offset: u64, len: u64) -> bool;
        fn read_at(&self, buf: IoVecMut, offset: u64, flags: IoFlags)
            -> BoxVdevFut;
        fn readv_at(&self, bufs: SGListMut, offset: u64, flags: IoFlags)
            -> BoxVdevFut;
        fn write_at(&self, buf: IoVec, offset: u64, flags: IoFlags)
            -> BoxVdevFut;
        fn writev_at(&self, bufs: SGList, offset: u64, flags: IoFlags)
            -> BoxVdevFut;
        fn trim(&self, offset: u64, len: u64) -> BoxVdevFut;
    }
}
// LCOV_EXCL_STOP
