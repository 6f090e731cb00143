// vim: tw=80
//! Erasure codec for declustered parity
//!
//! Parity row `i` over data columns `d_0 .. d_{k-1}` is
//! `p_i = Σ_j g^(i·j) · d_j` in GF(2^8) with the generator `g = 2`, so
//! row 0 is plain XOR and rows 1 and 2 use the generators 2 and 4.  With
//! at most three parity rows any combination of up to three lost data
//! columns is recoverable from any equally-sized set of surviving parity
//! rows.

use fixedbitset::FixedBitSet;

use crate::types::{Error, Result};

/// The GF(2^8) reduction polynomial, x^8 + x^4 + x^3 + x^2 + 1
const GF_POLY: u32 = 0x11d;

struct GfTables {
    log: [u8; 256],
    // exp is doubled so products of two logs need no modular reduction
    exp: [u8; 512],
}

const fn gf_tables() -> GfTables {
    let mut log = [0u8; 256];
    let mut exp = [0u8; 512];
    let mut x: u32 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= GF_POLY;
        }
        i += 1;
    }
    while i < 510 {
        exp[i] = exp[i - 255];
        i += 1;
    }
    GfTables { log, exp }
}

static GF: GfTables = gf_tables();

fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        0
    } else {
        GF.exp[GF.log[a as usize] as usize + GF.log[b as usize] as usize]
    }
}

fn gf_inv(a: u8) -> u8 {
    debug_assert_ne!(a, 0);
    GF.exp[255 - GF.log[a as usize] as usize]
}

/// Erasure codec for one stripe geometry
pub struct Codec {
    /// Number of data columns
    k: usize,
    /// Number of parity columns
    f: usize,
    /// f × k encoding coefficients, row-major
    enc: Vec<u8>,
}

impl Codec {
    /// Create a codec for `k` data columns and `f` parity columns
    pub fn new(k: usize, f: usize) -> Self {
        assert!(k >= 1 && k <= 255);
        assert!(f >= 1 && f <= 3);
        let mut enc = vec![0u8; f * k];
        for i in 0..f {
            for j in 0..k {
                enc[i * k + j] = GF.exp[(i * j) % 255];
            }
        }
        Codec { k, f, enc }
    }

    pub fn ndata(&self) -> usize {
        self.k
    }

    pub fn nparity(&self) -> usize {
        self.f
    }

    /// Encoding coefficient of data column `col` in parity row `row`
    pub fn coef(&self, row: usize, col: usize) -> u8 {
        self.enc[row * self.k + col]
    }

    /// `dst ^= c · src`, elementwise over GF(2^8)
    pub fn mul_xor(dst: &mut [u8], src: &[u8], c: u8) {
        debug_assert!(dst.len() >= src.len());
        match c {
            0 => {},
            1 => {
                for (d, s) in dst.iter_mut().zip(src.iter()) {
                    *d ^= *s;
                }
            },
            _ => {
                for (d, s) in dst.iter_mut().zip(src.iter()) {
                    *d ^= gf_mul(c, *s);
                }
            }
        }
    }

    /// Accumulate a segment of data column `col` into parity row `row`.
    ///
    /// `dst` must be positioned at the same byte offset within the parity
    /// column as `src` is within the data column.
    pub fn encode_seg(&self, row: usize, col: usize, src: &[u8],
                      dst: &mut [u8])
    {
        Self::mul_xor(dst, src, self.coef(row, col));
    }

    /// Solve for a set of erased data columns.
    ///
    /// `erased` holds the erased data column indices; `parity_avail` the
    /// parity rows that survived.  Fails with [`Error::EIO`] when fewer
    /// parity rows survived than data columns were lost.
    pub fn reconstruction(&self, erased: &FixedBitSet,
                          parity_avail: &FixedBitSet)
        -> Result<Reconstruction>
    {
        let erased: Vec<usize> = erased.ones().collect();
        let e = erased.len();
        debug_assert!(e > 0);
        let parity: Vec<usize> = parity_avail.ones().take(e).collect();
        if parity.len() < e {
            return Err(Error::EIO);
        }
        let data: Vec<usize> = (0..self.k)
            .filter(|j| !erased.contains(j))
            .collect();

        // Invert the e × e submatrix of encoding coefficients covering
        // the erased columns.
        let mut a = vec![0u8; e * e];
        for (ri, &row) in parity.iter().enumerate() {
            for (ci, &col) in erased.iter().enumerate() {
                a[ri * e + ci] = self.coef(row, col);
            }
        }
        let inv = invert(&mut a, e)?;

        // d_m = Σ_r inv[m][r]·p_r + Σ_j (Σ_r inv[m][r]·coef(r, j))·d_j
        let width = data.len() + e;
        let mut coeffs = vec![0u8; e * width];
        for t in 0..e {
            for (ji, &j) in data.iter().enumerate() {
                let mut c = 0u8;
                for (ri, &row) in parity.iter().enumerate() {
                    c ^= gf_mul(inv[t * e + ri], self.coef(row, j));
                }
                coeffs[t * width + ji] = c;
            }
            for ri in 0..e {
                coeffs[t * width + data.len() + ri] = inv[t * e + ri];
            }
        }
        Ok(Reconstruction { data, parity, erased, coeffs })
    }
}

/// A solved reconstruction: for each erased data column, one coefficient
/// per surviving data column followed by one per parity row used.
#[derive(Debug)]
pub struct Reconstruction {
    /// Surviving data columns, ascending
    pub data: Vec<usize>,
    /// Parity rows used, ascending
    pub parity: Vec<usize>,
    /// Erased data columns, ascending
    pub erased: Vec<usize>,
    coeffs: Vec<u8>,
}

impl Reconstruction {
    /// Coefficient of the `s`-th input (surviving data columns first,
    /// then parity rows) in the combination recovering the `t`-th erased
    /// column.
    pub fn coef(&self, t: usize, s: usize) -> u8 {
        let width = self.data.len() + self.parity.len();
        self.coeffs[t * width + s]
    }
}

/// Invert an n × n matrix over GF(2^8) by Gauss-Jordan elimination.
/// `a` is destroyed.
fn invert(a: &mut [u8], n: usize) -> Result<Vec<u8>> {
    let mut inv = vec![0u8; n * n];
    for i in 0..n {
        inv[i * n + i] = 1;
    }
    for col in 0..n {
        // Find a pivot
        let pivot = (col..n).find(|&r| a[r * n + col] != 0)
            .ok_or(Error::EIO)?;
        if pivot != col {
            for j in 0..n {
                a.swap(col * n + j, pivot * n + j);
                inv.swap(col * n + j, pivot * n + j);
            }
        }
        let pinv = gf_inv(a[col * n + col]);
        for j in 0..n {
            a[col * n + j] = gf_mul(a[col * n + j], pinv);
            inv[col * n + j] = gf_mul(inv[col * n + j], pinv);
        }
        for r in 0..n {
            if r == col || a[r * n + col] == 0 {
                continue;
            }
            let c = a[r * n + col];
            for j in 0..n {
                let av = a[col * n + j];
                let iv = inv[col * n + j];
                a[r * n + j] ^= gf_mul(c, av);
                inv[r * n + j] ^= gf_mul(c, iv);
            }
        }
    }
    Ok(inv)
}
