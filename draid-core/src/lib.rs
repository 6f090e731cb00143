// vim: tw=80
//! draid-core
//!
//! A distributed-RAID (dRAID) vdev layer: raidz-class parity with
//! virtual distributed spares.  A deterministic permutation map scatters
//! each parity group's columns across all of a vdev's children, so a
//! rebuild reads from and writes to every surviving child in parallel
//! instead of funneling through one replacement disk.
//!
//! The crate provides the permutation engine, the logical-to-physical
//! geometry, the per-I/O stripe builder, the top-level [`VdevDraid`]
//! device, and the [`VdevDraidSpare`] virtual leaf.  Child devices,
//! parity math, and the dirty-time-log oracle are reached through the
//! traits in [`vdev`] and the [`codec`] module.
//!
//! [`VdevDraid`]: vdev_draid::VdevDraid
//! [`VdevDraidSpare`]: vdev_draid_spare::VdevDraidSpare

pub mod codec;
mod draid_maps;
pub mod geometry;
pub mod permutation;
pub mod stripe;
pub mod types;
pub mod util;
pub mod vdev;
pub mod vdev_draid;
mod vdev_state;
pub mod vdev_draid_spare;
pub mod vdev_file;

pub use crate::{
    types::{Error, Result, TxgT},
    vdev::{DtlKind, IoFlags},
};
