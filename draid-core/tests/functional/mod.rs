// vim: tw=80
//! Functional tests for draid-core, against real file-backed vdevs

use std::{
    fs,
    mem,
    path::PathBuf,
    sync::Arc,
};

use tempfile::{Builder, TempDir};

use draid_core::{
    geometry::Geometry,
    vdev::VdevLeafApi,
    vdev_draid::{Child, Label, VdevDraid},
    vdev_file::VdevFile,
};

mod vdev_draid;

pub const BYTES_PER_LBA: usize = 4096;

pub struct Harness {
    pub vdev: Arc<VdevDraid>,
    pub label: Label,
    pub paths: Vec<PathBuf>,
    pub _tempdir: TempDir,
}

/// Build a dRAID vdev atop fresh file-backed children
pub fn harness(ndata: u64, nparity: u64, nspares: u64, children: u64)
    -> Harness
{
    let len = 1 << 28;  // 256 MB
    let tempdir = Builder::new()
        .prefix("test_vdev_draid")
        .tempdir()
        .unwrap();
    let paths = (0..children).map(|i| {
        let fname = tempdir.path().join(format!("vdev.{i}"));
        let file = fs::File::create(&fname).unwrap();
        file.set_len(len).unwrap();
        fname
    }).collect::<Vec<_>>();
    let leaves = paths.iter().map(|fname| {
        Arc::new(VdevFile::create(fname).unwrap())
            as Arc<dyn VdevLeafApi>
    }).collect::<Vec<_>>();
    let ngroups = Geometry::min_ngroups(ndata, nparity, nspares,
                                        children);
    let vdev = VdevDraid::create(ndata, nparity, nspares, ngroups, 12,
                                 uuid::Uuid::new_v4(), 0, leaves)
        .unwrap();
    let label = vdev.label();
    Harness { vdev, label, paths, _tempdir: tempdir }
}

/// Reopen a dRAID vdev from its label, with some children missing
pub fn reopen(label: &Label, paths: &[PathBuf], missing: &[usize])
    -> Arc<VdevDraid>
{
    let children = paths.iter().enumerate().map(|(i, path)| {
        if missing.contains(&i) {
            Child::Missing
        } else {
            let leaf = VdevFile::open(path, label.children[i]).unwrap();
            Child::Leaf(Arc::new(leaf) as Arc<dyn VdevLeafApi>)
        }
    }).collect();
    let dtl = Arc::new(draid_core::vdev::CleanDtl::default());
    VdevDraid::open(label, children, dtl).unwrap()
}

/// Create a buffer with deterministic contents corresponding to the given
/// logical location.
pub fn mkbuf(offs: u64, len: usize) -> Vec<u8> {
    const Z: usize = mem::size_of::<u64>();
    (0..len).map(|i| {
        let bofs = offs as usize + i - i % Z;
        let bshift = 8 * (Z - 1 - i % Z);
        ((bofs >> bshift) & 0xFF) as u8
    }).collect::<Vec<_>>()
}

/// Pick stripe-aligned, group-confined offsets for a sequence of writes
pub fn alloc(geo: &Geometry, off: &mut u64, psize: u64) -> u64 {
    let asize = geo.asize(psize);
    let mut start = geo.astart(*off);
    if !geo.single_group(start, asize) {
        start = geo.group_to_offset(geo.offset_to_group(start) + 1);
    }
    *off = start + asize;
    start
}
