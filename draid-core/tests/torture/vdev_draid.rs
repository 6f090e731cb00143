// vim: tw=80
//! Write and read random blocks through a dRAID vdev and verify
//! integrity, healthy and degraded.

use std::{
    fs,
    mem,
    path::PathBuf,
    sync::Arc,
};

use divbuf::DivBufShared;
use pretty_assertions::assert_eq;
use rand::{Rng, RngCore, SeedableRng, thread_rng};
use rand_xorshift::XorShiftRng;
use rstest::rstest;
use tempfile::{Builder, TempDir};

use draid_core::{
    geometry::Geometry,
    vdev::VdevLeafApi,
    vdev_draid::{Child, Label, VdevDraid},
    vdev_file::VdevFile,
};

const BYTES_PER_LBA: u64 = 4096;

struct Harness {
    vdev: Arc<VdevDraid>,
    label: Label,
    paths: Vec<PathBuf>,
    _tempdir: TempDir,
}

fn harness(ndata: u64, nparity: u64, nspares: u64, children: u64)
    -> Harness
{
    let len = 1 << 28;  // 256 MB
    let tempdir = Builder::new()
        .prefix("torture_vdev_draid")
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

/// Create a buffer with deterministic contents corresponding to the
/// given logical location.
fn mkbuf(offs: u64, len: usize) -> Vec<u8> {
    const Z: usize = mem::size_of::<u64>();
    (0..len).map(|i| {
        let bofs = offs as usize + i - i % Z;
        let bshift = 8 * (Z - 1 - i % Z);
        ((bofs >> bshift) & 0xFF) as u8
    }).collect::<Vec<_>>()
}

async fn do_test(vdev: Arc<VdevDraid>, seed: Option<[u8; 16]>) {
    let geo = *vdev.geometry();
    let total: usize =
        ((1 << 20) as f64 * crate::test_scale()) as usize;
    let max_write_lbas = 4 * geo.ndata();

    let seed = seed.unwrap_or_else(|| {
        let mut seed = [0u8; 16];
        let mut seeder = thread_rng();
        seeder.fill_bytes(&mut seed);
        seed
    });
    println!("Using seed {:?}", &seed);
    // XorShiftRng because it's deterministic and seedable
    let mut rng = XorShiftRng::from_seed(seed);

    // Write random-sized blocks first, hopping groups now and then so
    // wraps and permutation changes get exercised
    let mut blocks = Vec::new();
    let mut nwritten = 0;
    let mut off = 0;
    while nwritten < total {
        let lbas: u64 = rng.gen_range(1..=max_write_lbas);
        let psize = (lbas * BYTES_PER_LBA) as usize;
        let asize = geo.asize(psize as u64);
        let mut start = geo.astart(off);
        if !geo.single_group(start, asize) ||
            rng.gen_ratio(1, 16)
        {
            let group = geo.offset_to_group(start) + 1;
            start = geo.group_to_offset(group);
        }
        off = start + asize;
        let dbs = DivBufShared::from(mkbuf(start, psize));
        vdev.write_at(dbs.try_const().unwrap(), start).await.unwrap();
        blocks.push((start, psize));
        nwritten += psize;
    }

    // Read every block back, in a shuffled order
    for i in (1..blocks.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        blocks.swap(i, j);
    }
    for (start, psize) in &blocks {
        let dbs = DivBufShared::from(vec![0u8; *psize]);
        vdev.read_at(dbs.try_mut().unwrap(), *start).await.unwrap();
        assert_eq!(&dbs.try_const().unwrap()[..],
                   &mkbuf(*start, *psize)[..],
                   "offset {start:#x} psize {psize:#x}");
    }
}

fn degrade(h: &Harness, nmissing: usize) -> Arc<VdevDraid> {
    let children = h.paths.iter().enumerate().map(|(i, path)| {
        if i < nmissing {
            Child::Missing
        } else {
            let leaf =
                VdevFile::open(path, h.label.children[i]).unwrap();
            Child::Leaf(Arc::new(leaf) as Arc<dyn VdevLeafApi>)
        }
    }).collect();
    let dtl = Arc::new(draid_core::vdev::CleanDtl::default());
    VdevDraid::open(&h.label, children, dtl).unwrap()
}

/// A healthy dRAID vdev
#[rstest]
// Minimal mirror-like dRAID
#[case(harness(1, 1, 0, 2), None)]
// Full-width groups, no wrap
#[case(harness(2, 1, 0, 3), None)]
// Smallest spared configuration
#[case(harness(2, 1, 1, 4), None)]
// Wrapping groups with two spares
#[case(harness(8, 1, 2, 14), None)]
// Double parity
#[case(harness(4, 2, 1, 11), None)]
// Triple parity
#[case(harness(4, 3, 1, 12), None)]
#[tokio::test]
async fn healthy(
    #[case] h: Harness,
    #[case] seed: Option<[u8; 16]>,
) {
    do_test(h.vdev.clone(), seed).await
}

/// A dRAID vdev with one missing child
#[rstest]
#[case(harness(1, 1, 0, 2), None)]
#[case(harness(2, 1, 1, 4), None)]
#[case(harness(8, 1, 2, 14), None)]
#[tokio::test]
async fn degraded_1(
    #[case] h: Harness,
    #[case] seed: Option<[u8; 16]>,
) {
    do_test(h.vdev.clone(), seed).await;
    let vdev = degrade(&h, 1);
    do_test(vdev, seed).await
}

/// A dRAID vdev with two missing children
#[rstest]
#[case(harness(4, 2, 1, 11), None)]
#[case(harness(4, 3, 1, 12), None)]
#[tokio::test]
async fn degraded_2(
    #[case] h: Harness,
    #[case] seed: Option<[u8; 16]>,
) {
    do_test(h.vdev.clone(), seed).await;
    let vdev = degrade(&h, 2);
    do_test(vdev, seed).await
}
