// vim: tw=80
//! Per-I/O stripe layout
//!
//! A [`StripeMap`] describes how one logical I/O spreads across the
//! columns of a dRAID group: which child each column lands on, at what
//! device offset, and how each column is backed.  Three layouts exist:
//!
//! * **write**: every column of the stripe is written.  Short data
//!   columns are scatter lists of real bytes followed by a zero skip
//!   sector; parity columns own freshly generated buffers.
//! * **normal read**: only the populated data columns are mapped.
//! * **scrub read**: every column is mapped, with one linear backing
//!   buffer for all skip sectors, so they can be read, verified,
//!   repaired, and used for reconstruction.

use divbuf::{DivBuf, DivBufShared};
use fixedbitset::FixedBitSet;

use crate::{
    codec::Codec,
    geometry::{Geometry, Position, ROW_SIZE, VDEV_LABEL_START_SIZE},
    permutation::PermutationMap,
    types::*,
    util::ZERO_REGION,
};

/// One column of a stripe
#[derive(Debug)]
pub struct StripeColumn {
    /// Index of the child device this column lives on
    pub devidx: usize,
    /// Device-absolute byte offset on that child
    pub offset: u64,
    /// Real bytes carried: payload for data columns, parity for parity
    /// columns, zero for pure-skip columns
    pub size: usize,
    /// On-disk footprint of the column; `size` plus any skip sector
    pub padded_size: usize,
    /// Offset of this column's real bytes within the logical payload.
    /// Only meaningful for data columns.
    dataoff: usize,
    /// Error recorded for this column, if any
    pub error: Option<Error>,
    /// Was an I/O actually issued to the child?
    pub tried: bool,
    /// Was the column skipped before dispatch?
    pub skipped: bool,
    /// Must this column be rewritten even if it read cleanly?
    pub force_repair: bool,
}

impl StripeColumn {
    /// Number of skip-sector bytes appended to this column
    fn skip_len(&self) -> usize {
        self.padded_size - self.size
    }
}

/// Outcome of a scrub verification pass
#[derive(Debug, Default, Eq, PartialEq)]
pub struct VerifyReport {
    /// Parity columns whose content disagreed with the data (their
    /// backing buffers now hold the corrected parity)
    pub parity_bad: Vec<usize>,
    /// Columns whose skip sectors were not zero-filled
    pub skips_bad: Vec<usize>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.parity_bad.is_empty() && self.skips_bad.is_empty()
    }
}

/// The layout of one I/O across a dRAID group
pub struct StripeMap {
    geo: Geometry,
    /// Permutation index of the slice holding this stripe
    pub perm: u64,
    /// First logical disk column of the group
    pub group_start: u64,
    /// Stripe width: always `groupwidth`
    pub scols: usize,
    /// Columns carrying real bytes
    pub cols: usize,
    /// Index of the first data column: always `nparity`
    pub first_data_col: usize,
    /// Columns sized one sector larger than the rest
    pub bc: usize,
    /// Skip sectors in the stripe
    pub nskip: usize,
    /// First column carrying a skip sector (== `scols` when `nskip` is 0)
    pub skip_start: usize,
    /// Data plus parity bytes, excluding skip padding
    pub asize: u64,
    psize: usize,
    unit: usize,
    columns: Vec<StripeColumn>,
    parity: Vec<DivBufShared>,
    data: Option<DivBufShared>,
    skip: Option<DivBufShared>,
}

impl StripeMap {
    /// Lay out an I/O of `psize` payload bytes at logical `offset`.
    ///
    /// The I/O must be stripe-aligned and confined to a single group.
    pub fn new(geo: Geometry, pmap: &PermutationMap, offset: u64,
               psize: usize) -> Self
    {
        let unit = geo.unit() as usize;
        debug_assert!(psize > 0);
        debug_assert_eq!(psize % unit, 0);
        debug_assert!(geo.single_group(offset, geo.asize(psize as u64)));
        let pos: Position = geo.logical_to_physical(offset);
        let ndata = geo.ndata() as usize;
        let nparity = geo.nparity() as usize;
        let scols = geo.groupwidth() as usize;
        let ndisks = geo.ndisks();

        let sectors = psize / unit;
        let q = sectors / ndata;
        let r = sectors % ndata;
        let bc = if r == 0 { 0 } else { r + nparity };
        let cols = if q == 0 { bc } else { scols };
        let ps_sectors = q + usize::from(r != 0);
        let ps = ps_sectors * unit;
        let nskip = if r == 0 { 0 } else { ndata - r };
        let skip_start = if nskip == 0 { scols } else { bc };
        let asize = ((sectors + nparity * ps_sectors) * unit) as u64;

        let mut columns = Vec::with_capacity(scols);
        let mut dataoff = 0;
        for i in 0..scols {
            let pcol = (pos.group_start + i as u64) % ndisks;
            let devidx = pmap.permute_id(pos.perm, pcol) as usize;
            let mut offset = pos.offset + VDEV_LABEL_START_SIZE;
            if pos.group_start + i as u64 >= ndisks {
                offset += ROW_SIZE;
            }
            let size = if i < nparity || i < bc {
                ps
            } else if i < cols {
                q * unit
            } else {
                0
            };
            let col = StripeColumn {
                devidx,
                offset,
                size,
                padded_size: ps,
                dataoff,
                error: None,
                tried: false,
                skipped: false,
                force_repair: false,
            };
            if i >= nparity {
                dataoff += size;
            }
            columns.push(col);
        }
        debug_assert_eq!(dataoff, psize);

        let parity = (0..nparity)
            .map(|_| DivBufShared::from(vec![0u8; ps]))
            .collect();
        StripeMap {
            geo,
            perm: pos.perm,
            group_start: pos.group_start,
            scols,
            cols,
            first_data_col: nparity,
            bc,
            nskip,
            skip_start,
            asize,
            psize,
            unit,
            columns,
            parity,
            data: None,
            skip: None,
        }
    }

    /// Add the backing buffers for the scrub/reconstruction layout: one
    /// buffer for the whole payload and one linear buffer for every skip
    /// sector in the stripe.
    pub fn with_scrub_buffers(mut self) -> Self {
        self.data = Some(DivBufShared::from(vec![0u8; self.psize]));
        if self.nskip > 0 {
            self.skip =
                Some(DivBufShared::from(vec![0u8; self.nskip * self.unit]));
        }
        self
    }

    pub fn psize(&self) -> usize {
        self.psize
    }

    pub fn columns(&self) -> &[StripeColumn] {
        &self.columns
    }

    pub fn column(&self, i: usize) -> &StripeColumn {
        &self.columns[i]
    }

    pub fn column_mut(&mut self, i: usize) -> &mut StripeColumn {
        &mut self.columns[i]
    }

    /// Is column `i` a parity column?
    pub fn is_parity(&self, i: usize) -> bool {
        i < self.first_data_col
    }

    /// Codec data index of column `i`
    fn data_idx(&self, i: usize) -> usize {
        debug_assert!(i >= self.first_data_col);
        i - self.first_data_col
    }

    /// Skip-backing byte offset of column `i`'s skip sector
    fn skip_off(&self, i: usize) -> usize {
        debug_assert!(i >= self.skip_start);
        (i - self.skip_start) * self.unit
    }

    /// Fill the parity buffers from the payload
    pub fn generate_parity(&self, payload: &IoVec, codec: &Codec) {
        debug_assert_eq!(payload.len(), self.psize);
        for (row, pshared) in self.parity.iter().enumerate() {
            let mut pbuf = pshared.try_mut().unwrap();
            for i in self.first_data_col..self.cols {
                let col = &self.columns[i];
                if col.size == 0 {
                    continue;
                }
                let src = &payload[col.dataoff..col.dataoff + col.size];
                codec.encode_seg(row, self.data_idx(i), src,
                                 &mut pbuf[0..col.size]);
            }
        }
    }

    /// The scatter list to write for column `i`
    pub fn write_bufs(&self, i: usize, payload: &IoVec) -> SGList {
        let col = &self.columns[i];
        let mut sglist = SGList::new();
        if self.is_parity(i) {
            sglist.push(self.parity[i].try_const().unwrap());
        } else if col.size > 0 {
            sglist.push(payload.slice(col.dataoff, col.dataoff + col.size));
        }
        let skip = col.skip_len();
        if skip > 0 {
            sglist.push(ZERO_REGION.try_const().unwrap().slice_to(skip));
        }
        sglist
    }

    /// Per-column read buffers for the tight layout, carved from the
    /// map's own payload backing.  Only populated data columns appear;
    /// parity and skip sectors are left unread.
    pub fn tight_read_bufs(&self) -> Vec<(usize, SGListMut)> {
        let mut data = self.data.as_ref().unwrap().try_mut().unwrap();
        let mut out = Vec::with_capacity(self.cols - self.first_data_col);
        for i in self.first_data_col..self.cols {
            let col = &self.columns[i];
            let rest = data.split_off(col.size);
            out.push((i, vec![data]));
            data = rest;
        }
        out
    }

    /// Read buffers for the parity columns, one per column
    pub fn parity_read_bufs(&self) -> Vec<(usize, IoVecMut)> {
        (0..self.first_data_col)
            .map(|i| (i, self.parity[i].try_mut().unwrap()))
            .collect()
    }

    /// Read buffers for every skip sector, carved from the linear skip
    /// backing.  Entries pair the owning column with its skip view; the
    /// views must be read at `column offset + column size`.
    pub fn skip_read_bufs(&self) -> Vec<(usize, IoVecMut)> {
        let mut out = Vec::with_capacity(self.nskip);
        let Some(shared) = &self.skip else {
            return out;
        };
        let mut skip = shared.try_mut().unwrap();
        for i in self.skip_start..self.scols {
            let len = self.columns[i].skip_len();
            let rest = skip.split_off(len);
            out.push((i, skip));
            skip = rest;
        }
        out
    }

    /// Per-column read buffers for the scrub layout, carved from the
    /// map's own backing buffers.  Every column of the stripe appears.
    pub fn scrub_read_bufs(&self) -> Vec<(usize, SGListMut)> {
        let mut data = self.data.as_ref().unwrap().try_mut().unwrap();
        let mut skip = self.skip.as_ref().map(|s| s.try_mut().unwrap());
        let mut out = Vec::with_capacity(self.scols);
        for i in 0..self.scols {
            let col = &self.columns[i];
            let mut sglist = SGListMut::new();
            if self.is_parity(i) {
                sglist.push(self.parity[i].try_mut().unwrap());
            } else if col.size > 0 {
                let rest = data.split_off(col.size);
                sglist.push(data);
                data = rest;
            }
            if col.skip_len() > 0 {
                let mut piece = skip.take().unwrap();
                let rest = piece.split_off(col.skip_len());
                skip = Some(rest);
                sglist.push(piece);
            }
            out.push((i, sglist));
        }
        out
    }

    /// Column `i`'s padded content in the scrub layout.  The skip tail
    /// participates as the zeros that were written, not as whatever the
    /// disk returned; dirty skip sectors are detected and repaired
    /// separately.  Must not be called while read buffers are
    /// outstanding.
    fn padded_col(&self, i: usize) -> Vec<u8> {
        let col = &self.columns[i];
        let mut v = vec![0u8; col.padded_size];
        if self.is_parity(i) {
            v.copy_from_slice(&self.parity[i].try_const().unwrap()[..]);
        } else if col.size > 0 {
            let db = self.data.as_ref().unwrap().try_const().unwrap();
            v[0..col.size]
                .copy_from_slice(&db[col.dataoff..col.dataoff + col.size]);
        }
        v
    }

    /// Is column `i`'s content untrustworthy?  Covers both I/O errors
    /// and columns marked for unconditional repair, like an
    /// un-resilvered spare standing in for a replaced device.
    fn col_invalid(&self, i: usize) -> bool {
        self.columns[i].error.is_some() || self.columns[i].force_repair
    }

    /// Rebuild every failed data column from the surviving columns and
    /// parity.  Requires the scrub layout.  Fails with [`Error::EIO`]
    /// when more data columns failed than surviving parity can cover.
    pub fn reconstruct(&mut self, codec: &Codec) -> Result<()> {
        let ndata = self.geo.ndata() as usize;
        let mut erased = FixedBitSet::with_capacity(ndata);
        for i in self.first_data_col..self.cols {
            if self.col_invalid(i) {
                erased.insert(self.data_idx(i));
            }
        }
        if erased.count_ones(..) == 0 {
            return Ok(());
        }
        let mut parity_avail =
            FixedBitSet::with_capacity(self.first_data_col);
        for i in 0..self.first_data_col {
            if !self.col_invalid(i) {
                parity_avail.insert(i);
            }
        }
        let plan = codec.reconstruction(&erased, &parity_avail)?;

        // Gather the surviving padded columns, then solve.
        let mut outputs =
            vec![vec![0u8; self.columns[0].padded_size];
                 plan.erased.len()];
        for (s, &j) in plan.data.iter().enumerate() {
            let i = j + self.first_data_col;
            if self.columns[i].padded_size == 0 {
                continue;
            }
            let src = self.padded_col(i);
            for (t, out) in outputs.iter_mut().enumerate() {
                Codec::mul_xor(out, &src, plan.coef(t, s));
            }
        }
        for (s, &row) in plan.parity.iter().enumerate() {
            let src = self.parity[row].try_const().unwrap();
            for (t, out) in outputs.iter_mut().enumerate() {
                Codec::mul_xor(out, &src[..],
                               plan.coef(t, plan.data.len() + s));
            }
        }

        // Scatter the recovered columns back into the backing buffers
        let mut data = self.data.as_ref().unwrap().try_mut().unwrap();
        let mut skip = self.skip.as_ref().map(|s| s.try_mut().unwrap());
        for (t, &j) in plan.erased.iter().enumerate() {
            let i = j + self.first_data_col;
            let col = &self.columns[i];
            if col.size > 0 {
                data[col.dataoff..col.dataoff + col.size]
                    .copy_from_slice(&outputs[t][0..col.size]);
            }
            if col.skip_len() > 0 {
                let off = self.skip_off(i);
                skip.as_mut().unwrap()[off..off + col.skip_len()]
                    .copy_from_slice(&outputs[t][col.size..]);
            }
        }
        Ok(())
    }

    /// Verify parity and skip sectors after a scrub read.
    ///
    /// Mismatched parity buffers are overwritten with the corrected
    /// parity so a subsequent repair pass can write them back.
    pub fn verify(&mut self, codec: &Codec) -> VerifyReport {
        let mut report = VerifyReport::default();
        for row in 0..self.first_data_col {
            let mut expected = vec![0u8; self.columns[row].padded_size];
            for i in self.first_data_col..self.scols {
                let src = self.padded_col(i);
                codec.encode_seg(row, self.data_idx(i), &src,
                                 &mut expected);
            }
            let stale = {
                let actual = self.parity[row].try_const().unwrap();
                self.col_invalid(row) || expected != actual[..]
            };
            if stale {
                self.parity[row].try_mut().unwrap()
                    .copy_from_slice(&expected);
                report.parity_bad.push(row);
            }
        }
        if let Some(sb) = &self.skip {
            let skips = sb.try_const().unwrap();
            for i in self.skip_start..self.scols {
                let col = &self.columns[i];
                let off = self.skip_off(i);
                if !skips[off..off + col.skip_len()].iter()
                    .all(|&b| b == 0)
                {
                    report.skips_bad.push(i);
                }
            }
        }
        report
    }

    /// Read-only view of the payload held in the scrub backing buffer
    pub fn payload(&self) -> DivBuf {
        self.data.as_ref().unwrap().try_const().unwrap()
    }

    /// The scatter list that rewrites column `i` with known-good
    /// content.  Skip sectors are always rewritten as zeros.
    pub fn repair_bufs(&self, i: usize) -> SGList {
        let col = &self.columns[i];
        let mut sglist = SGList::new();
        if self.is_parity(i) {
            sglist.push(self.parity[i].try_const().unwrap());
        } else if col.size > 0 {
            let db = self.data.as_ref().unwrap().try_const().unwrap();
            sglist.push(db.slice(col.dataoff, col.dataoff + col.size));
        }
        let skip = col.skip_len();
        if skip > 0 {
            sglist.push(ZERO_REGION.try_const().unwrap().slice_to(skip));
        }
        sglist
    }
}
