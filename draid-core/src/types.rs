// vim: tw=80
//! Type aliases and error definitions shared by every module

use std::{fmt, io};

use divbuf::{DivBuf, DivBufMut};

/// An immutable buffer fragment handed to a child device for writing
pub type IoVec = DivBuf;

/// A mutable buffer fragment handed to a child device for reading
pub type IoVecMut = DivBufMut;

/// Scatter list of immutable buffer fragments
pub type SGList = Vec<IoVec>;

/// Scatter list of mutable buffer fragments
pub type SGListMut = Vec<IoVecMut>;

/// Transaction group number
pub type TxgT = u64;

pub type Result<T = ()> = std::result::Result<T, Error>;

/// Error type used throughout the vdev stack.
///
/// Modeled on errno.  Only the values the dRAID layer can actually produce
/// are defined.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Invalid geometry, malformed spare name, or other bad argument
    EINVAL,
    /// A checksum did not match the data it covers
    EINTEGRITY,
    /// A child device returned an error, or too many columns were lost
    EIO,
    /// No table entry, or a child is not readable at this offset
    ENOENT,
    /// Too many children failed to open
    ENXIO,
    /// The dirty time log says this child's copy of the range is not
    /// current
    ESTALE,
    /// The operation is not supported by the target device
    EOPNOTSUPP,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(_: io::Error) -> Self {
        Error::EIO
    }
}
