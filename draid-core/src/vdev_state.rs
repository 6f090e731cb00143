// vim: tw=80
//! Aggregate health state of a dRAID vdev
//!
//! This lives in its own module, separate from [`crate::vdev_draid`], so
//! that the `#[atomic_enum]` macro expansion (which emits a bare
//! `Result<#ident, #ident>`) doesn't resolve against this crate's
//! `Result<T = ()>` alias from [`crate::types`].

use atomic_enum::atomic_enum;

/// Aggregate health of a dRAID vdev
#[atomic_enum]
#[derive(Eq, PartialEq)]
pub enum VdevState {
    /// Every child is available
    Healthy,
    /// Children are unavailable, but no more than parity can cover
    Degraded,
    /// Too many children are unavailable
    Faulted,
}
