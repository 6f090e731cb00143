// vim: tw=80
//! File-backed leaf vdev
//!
//! `VdevFile` adapts a regular file or device node to [`VdevLeafApi`].
//! I/O is plain positioned read/write dispatched through
//! `tokio::task::spawn_blocking`; nothing is scheduled or reordered
//! here.

use std::{
    fs,
    io,
    os::unix::fs::FileExt,
    path::Path,
    sync::Arc,
};

use futures::future;
use tokio::task;
use uuid::Uuid;

use crate::{
    types::*,
    vdev::*,
};

pub struct VdevFile {
    file: Arc<fs::File>,
    uuid: Uuid,
    size: u64,
}

impl VdevFile {
    /// Open an unused file or device as a fresh leaf vdev
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)?;
        let size = file.metadata()?.len();
        Ok(VdevFile {
            file: Arc::new(file),
            uuid: Uuid::new_v4(),
            size,
        })
    }

    /// Open an existing leaf vdev with a known uuid
    pub fn open<P: AsRef<Path>>(path: P, uuid: Uuid) -> io::Result<Self> {
        let mut vdev = Self::create(path)?;
        vdev.uuid = uuid;
        Ok(vdev)
    }
}

impl Vdev for VdevFile {
    fn size(&self) -> u64 {
        self.size
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn sync_all(&self) -> BoxVdevFut {
        let file = self.file.clone();
        Box::pin(async move {
            task::spawn_blocking(move || file.sync_all())
                .await
                .unwrap()
                .map_err(Error::from)
        })
    }
}

impl VdevLeafApi for VdevFile {
    fn readable(&self) -> bool {
        true
    }

    fn writable(&self) -> bool {
        true
    }

    fn read_at(&self, mut buf: IoVecMut, offset: u64, _flags: IoFlags)
        -> BoxVdevFut
    {
        let file = self.file.clone();
        Box::pin(async move {
            task::spawn_blocking(move || {
                file.read_exact_at(&mut buf[..], offset)
            }).await
                .unwrap()
                .map_err(Error::from)
        })
    }

    fn readv_at(&self, bufs: SGListMut, offset: u64, _flags: IoFlags)
        -> BoxVdevFut
    {
        let file = self.file.clone();
        Box::pin(async move {
            task::spawn_blocking(move || {
                let mut off = offset;
                for mut buf in bufs {
                    file.read_exact_at(&mut buf[..], off)?;
                    off += buf.len() as u64;
                }
                Ok(())
            }).await
                .unwrap()
                .map_err(|e: io::Error| Error::from(e))
        })
    }

    fn write_at(&self, buf: IoVec, offset: u64, _flags: IoFlags)
        -> BoxVdevFut
    {
        let file = self.file.clone();
        Box::pin(async move {
            task::spawn_blocking(move || {
                file.write_all_at(&buf[..], offset)
            }).await
                .unwrap()
                .map_err(Error::from)
        })
    }

    fn writev_at(&self, bufs: SGList, offset: u64, _flags: IoFlags)
        -> BoxVdevFut
    {
        let file = self.file.clone();
        Box::pin(async move {
            task::spawn_blocking(move || {
                let mut off = offset;
                for buf in bufs {
                    file.write_all_at(&buf[..], off)?;
                    off += buf.len() as u64;
                }
                Ok(())
            }).await
                .unwrap()
                .map_err(|e: io::Error| Error::from(e))
        })
    }

    fn trim(&self, _offset: u64, _len: u64) -> BoxVdevFut {
        Box::pin(future::err(Error::EOPNOTSUPP))
    }
}
