// vim: tw=80

use std::{fs, sync::Arc};

use divbuf::DivBufShared;
use pretty_assertions::assert_eq;
use rstest::rstest;

use draid_core::{
    IoFlags,
    permutation::PermutationMap,
    stripe::StripeMap,
    vdev::Vdev,
    vdev_draid_spare::VdevDraidSpare,
};

use super::*;

/// Write a set of blocks with every interesting shape: single sector,
/// exact stripes, big-column remainders, and a group-wrapping offset.
async fn write_blocks(h: &Harness) -> Vec<(u64, usize)> {
    let geo = *h.vdev.geometry();
    let nd = geo.ndata();
    let sizes = [
        1,                  // minimal block, maximal skip
        nd,                 // one full stripe, no skip sectors
        2 * nd,             // two stripes deep
        nd + 1,             // the smallest nontrivial big-column count
        2 * nd - 1,         // skip sector on the last column only
    ];
    let mut blocks = Vec::new();
    let mut off = 0;
    for (i, sectors) in sizes.iter().enumerate() {
        let psize = (sectors * BYTES_PER_LBA as u64) as usize;
        let start = alloc(&geo, &mut off, psize as u64);
        blocks.push((start, psize));
        // also place a copy in a later group, to cover wraps and
        // permutation changes
        let mut off2 = geo.group_to_offset(i as u64 + 1);
        let start = alloc(&geo, &mut off2, psize as u64);
        blocks.push((start, psize));
    }
    for (start, psize) in &blocks {
        let dbs = DivBufShared::from(mkbuf(*start, *psize));
        h.vdev.write_at(dbs.try_const().unwrap(), *start).await
            .unwrap();
    }
    blocks
}

async fn check_blocks(vdev: &Arc<VdevDraid>, blocks: &[(u64, usize)]) {
    for (start, psize) in blocks {
        let dbs = DivBufShared::from(vec![0u8; *psize]);
        vdev.read_at(dbs.try_mut().unwrap(), *start).await.unwrap();
        assert_eq!(&dbs.try_const().unwrap()[..],
                   &mkbuf(*start, *psize)[..],
                   "offset {start:#x} psize {psize:#x}");
    }
}

mod write_read {
    use super::*;

    #[rstest]
    // Minimal mirror-like dRAID
    #[case(harness(1, 1, 0, 2))]
    // Full-width group, no wrap
    #[case(harness(2, 1, 0, 3))]
    // Smallest spared configuration
    #[case(harness(2, 1, 2, 5))]
    // Wrapping groups with two spares
    #[case(harness(8, 1, 2, 14))]
    // Wide declustering over nine disks
    #[case(harness(4, 1, 1, 10))]
    // Double parity
    #[case(harness(4, 2, 1, 11))]
    // Triple parity
    #[case(harness(4, 3, 1, 12))]
    #[tokio::test]
    async fn healthy(#[case] h: Harness) {
        let blocks = write_blocks(&h).await;
        check_blocks(&h.vdev, &blocks).await;
    }

    #[test_log::test(tokio::test)]
    async fn sync_all() {
        let h = harness(2, 1, 0, 3);
        write_blocks(&h).await;
        h.vdev.sync_all().await.unwrap();
    }
}

mod degraded {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case(harness(1, 1, 0, 2), 1)]
    #[case(harness(2, 1, 2, 5), 1)]
    #[case(harness(8, 1, 2, 14), 1)]
    #[case(harness(4, 1, 1, 10), 1)]
    #[case(harness(4, 2, 1, 11), 2)]
    #[case(harness(4, 3, 1, 12), 3)]
    #[tokio::test]
    async fn read_with_missing_children(#[case] h: Harness,
                                        #[case] nmissing: usize)
    {
        let blocks = write_blocks(&h).await;
        drop(h.vdev);
        let missing = (0..nmissing).collect::<Vec<_>>();
        let vdev = reopen(&h.label, &h.paths, &missing);
        check_blocks(&vdev, &blocks).await;
    }

    /// Writes proceed while a write-capable subset of children remains,
    /// and a later scrub fills in the columns the missing child lost
    #[tokio::test]
    async fn write_degraded_then_scrub() {
        let h = harness(2, 1, 2, 5);
        drop(h.vdev);
        // child 0 holds the parity column of the group at offset 0
        let vdev = reopen(&h.label, &h.paths, &[0]);
        let psize = 2 * BYTES_PER_LBA;
        let dbs = DivBufShared::from(mkbuf(0, psize));
        vdev.write_at(dbs.try_const().unwrap(), 0).await.unwrap();
        let rdbs = DivBufShared::from(vec![0u8; psize]);
        vdev.read_at(rdbs.try_mut().unwrap(), 0).await.unwrap();
        assert_eq!(&rdbs.try_const().unwrap()[..], &mkbuf(0, psize)[..]);
        drop(vdev);
        // once the child returns, scrub finds its never-written parity
        // and rewrites it
        let vdev = reopen(&h.label, &h.paths, &[]);
        let report = vdev.scrub_at(0, psize, IoFlags::SCRUB).await
            .unwrap();
        assert!(!report.is_clean());
        let report = vdev.scrub_at(0, psize, IoFlags::SCRUB).await
            .unwrap();
        assert!(report.is_clean());
    }
}

mod scrub {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn healthy_is_clean() {
        let h = harness(2, 1, 2, 5);
        let blocks = write_blocks(&h).await;
        for (start, psize) in &blocks {
            let report = h.vdev.scrub_at(*start, *psize, IoFlags::SCRUB)
                .await.unwrap();
            assert!(report.is_clean(),
                    "offset {start:#x}: {report:?}");
        }
    }

    /// Deliberately corrupt a parity column on disk; scrub must detect
    /// and repair it.
    #[test_log::test(tokio::test)]
    async fn repairs_corrupt_parity() {
        let h = harness(2, 1, 2, 5);
        let psize = 2 * BYTES_PER_LBA;
        let dbs = DivBufShared::from(mkbuf(0, psize));
        h.vdev.write_at(dbs.try_const().unwrap(), 0).await.unwrap();

        let pmap = PermutationMap::open(5).unwrap();
        let map = StripeMap::new(*h.vdev.geometry(), &pmap, 0, psize);
        let pcol = map.column(0);
        let garbage = vec![0xccu8; pcol.padded_size];
        corrupt(&h.paths[pcol.devidx], pcol.offset, &garbage);

        let report = h.vdev.scrub_at(0, psize, IoFlags::SCRUB).await
            .unwrap();
        assert_eq!(report.parity_bad, vec![0]);

        let report = h.vdev.scrub_at(0, psize, IoFlags::SCRUB).await
            .unwrap();
        assert!(report.is_clean());
    }

    /// Deliberately corrupt a skip sector; scrub must re-zero it.
    #[tokio::test]
    async fn repairs_dirty_skip_sector() {
        let h = harness(2, 1, 2, 5);
        // One sector of payload leaves one skip sector on column 2
        let psize = BYTES_PER_LBA;
        let dbs = DivBufShared::from(mkbuf(0, psize));
        h.vdev.write_at(dbs.try_const().unwrap(), 0).await.unwrap();

        let pmap = PermutationMap::open(5).unwrap();
        let map = StripeMap::new(*h.vdev.geometry(), &pmap, 0, psize);
        let skipcol = map.column(2);
        assert_eq!(skipcol.size, 0);
        corrupt(&h.paths[skipcol.devidx], skipcol.offset,
                &[0xee; BYTES_PER_LBA]);

        let report = h.vdev.scrub_at(0, psize, IoFlags::SCRUB).await
            .unwrap();
        assert_eq!(report.skips_bad, vec![2]);

        // the sector is zero again on disk
        let on_disk = read_raw(&h.paths[skipcol.devidx], skipcol.offset,
                               BYTES_PER_LBA);
        assert!(on_disk.iter().all(|&b| b == 0));
    }

    fn corrupt(path: &std::path::Path, offset: u64, data: &[u8]) {
        use std::os::unix::fs::FileExt;
        let f = fs::OpenOptions::new().write(true).open(path).unwrap();
        f.write_all_at(data, offset).unwrap();
    }

    fn read_raw(path: &std::path::Path, offset: u64, len: usize)
        -> Vec<u8>
    {
        use std::os::unix::fs::FileExt;
        let f = fs::File::open(path).unwrap();
        let mut v = vec![0u8; len];
        f.read_exact_at(&mut v, offset).unwrap();
        v
    }
}

mod spare {
    use super::*;

    /// Lose a child, stand a distributed spare in for it, resilver, and
    /// verify every block reads back through the spare.
    #[tokio::test]
    async fn replace_resilver_read() {
        let h = harness(2, 1, 2, 5);
        let blocks = write_blocks(&h).await;

        // Fault a child that holds a data column of the first stripe
        let pmap = PermutationMap::open(5).unwrap();
        let victim = {
            let map = StripeMap::new(*h.vdev.geometry(), &pmap, 0,
                                     2 * BYTES_PER_LBA);
            map.column(1).devidx
        };
        h.vdev.fault_child(victim);
        assert!(h.vdev.need_resilver(0, 4096, None));

        let spare = VdevDraidSpare::open("draid1-0-0", &h.vdev).unwrap();
        h.vdev.replace_child(victim, spare.clone());
        assert!(spare.is_active());

        for (start, psize) in &blocks {
            h.vdev.scrub_at(*start, *psize, IoFlags::RESILVER).await
                .unwrap();
        }
        check_blocks(&h.vdev, &blocks).await;
    }
}

mod persistence {
    use super::*;

    /// A vdev reopened from its label sees the same bytes
    #[tokio::test]
    async fn reopen_from_label() {
        let h = harness(8, 1, 2, 14);
        let blocks = write_blocks(&h).await;
        drop(h.vdev);
        let vdev = reopen(&h.label, &h.paths, &[]);
        check_blocks(&vdev, &blocks).await;
    }
}
