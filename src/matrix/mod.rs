//! Owned band matrices.

pub mod faer;

use crate::band::BandLayout;
use crate::error::{Error, Result};
use crate::norm::Norm;

/// Square band matrix that owns its compact band storage.
#[derive(Debug, Clone, PartialEq)]
pub struct BandMat {
    layout: BandLayout,
    data: Vec<f64>,
}

impl BandMat {
    /// Zero matrix of order `n` with row stride `kl + 1 + ku`.
    pub fn zeros(n: usize, kl: usize, ku: usize) -> Result<Self> {
        let layout = BandLayout::tight(n, kl, ku)?;
        Ok(Self {
            data: vec![0.0; layout.required_len()],
            layout,
        })
    }

    /// Builds a matrix from `f(i, j)`, which is called for every position
    /// inside the band.
    pub fn from_fn<F>(n: usize, kl: usize, ku: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut mat = Self::zeros(n, kl, ku)?;
        let ldab = mat.layout.ldab();
        for i in 0..n {
            for k in mat.layout.row_range(i) {
                let j = mat.layout.column(i, k);
                mat.data[i * ldab + k] = f(i, j);
            }
        }
        Ok(mat)
    }

    /// Wraps an existing band buffer, which must be at least
    /// [`BandLayout::required_len`] long. Trailing entries beyond that
    /// are kept but never read.
    pub fn from_vec(layout: BandLayout, data: Vec<f64>) -> Result<Self> {
        layout.check_buffer(&data)?;
        Ok(Self { layout, data })
    }

    pub fn layout(&self) -> &BandLayout {
        &self.layout
    }

    /// The band buffer, in the format read by [`langb`](crate::langb).
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Returns `a[i][j]`, zero outside the band.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        match self.layout.offset(i, j) {
            Some(k) => self.data[i * self.layout.ldab() + k],
            None => 0.0,
        }
    }

    /// Sets `a[i][j]`, which must lie inside the band.
    pub fn set(&mut self, i: usize, j: usize, v: f64) -> Result<()> {
        let k = self
            .layout
            .offset(i, j)
            .ok_or(Error::OutOfBand { row: i, col: j })?;
        self.data[i * self.layout.ldab() + k] = v;
        Ok(())
    }

    /// Computes `norm`, allocating the column-sum workspace when needed.
    pub fn norm(&self, norm: Norm) -> Result<f64> {
        let mut work = if norm.needs_work() {
            vec![0.0; self.layout.n()]
        } else {
            Vec::new()
        };
        self.layout.norm(norm, &self.data, Some(&mut work[..]))
    }
}
