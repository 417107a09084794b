// Copyright ©2021 The Gonum Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license.

// See lapack/gonum/dlangb.go in Gonum.

use tracing::{debug, trace};

use crate::band::BandLayout;
use crate::error::{Error, Result};
use crate::norm::Norm;
use crate::vector::{combssq, l1_norm, lassq};

/// Returns the given norm of an `n x n` band matrix with `kl` sub-diagonals
/// and `ku` super-diagonals stored in `ab` with row stride `ldab`.
///
/// See [`BandLayout`] for the storage convention. Padding positions of
/// `ab` are never read, so they may hold anything, NaN included.
///
/// When `norm` is [`Norm::MaxColumnSum`], `work` must hold at least `n`
/// entries. It is overwritten with the column sums; other norms ignore it.
///
/// All arguments are checked before any entry of `ab` is read:
/// ```txt
///     ldab < kl + 1 + ku                     Error::BadStride
///     n == 0                                 returns 0
///     ab.len() < (n-1)*ldab + kl + 1 + ku    Error::ShortBuffer
///     work shorter than n (MaxColumnSum)     Error::ShortWork
/// ```
///
/// A NaN entry inside the band makes every norm NaN.
pub fn langb(
    norm: Norm,
    n: usize,
    kl: usize,
    ku: usize,
    ab: &[f64],
    ldab: usize,
    work: Option<&mut [f64]>,
) -> Result<f64> {
    BandLayout::new(n, kl, ku, ldab)?.norm(norm, ab, work)
}

impl BandLayout {
    /// Computes `norm` of the band matrix in `ab`. Same as [`langb`] for an
    /// already validated layout.
    pub fn norm(&self, norm: Norm, ab: &[f64], work: Option<&mut [f64]>) -> Result<f64> {
        let n = self.n();

        // Quick return if possible.
        if n == 0 {
            trace!(%norm, "empty band matrix");
            return Ok(0.0);
        }

        self.check_buffer(ab)?;
        trace!(%norm, n, kl = self.kl(), ku = self.ku(), "band norm");

        let value = match norm {
            Norm::MaxAbs => max_abs(self, ab),
            Norm::MaxRowSum => max_row_sum(self, ab),
            Norm::MaxColumnSum => {
                let work = match work {
                    Some(work) if work.len() >= n => work,
                    work => {
                        let got = work.map_or(0, |w| w.len());
                        debug!(need = n, got, "band norm workspace too short");
                        return Err(Error::ShortWork { need: n, got });
                    }
                };
                max_column_sum(self, ab, &mut work[..n])
            }
            Norm::Frobenius => frobenius(self, ab),
        };
        Ok(value)
    }
}

fn max_abs(layout: &BandLayout, ab: &[f64]) -> f64 {
    let mut value: f64 = 0.0;
    for i in 0..layout.n() {
        for aij in layout.row(i, ab) {
            let aij = aij.abs();
            if aij > value || aij.is_nan() {
                value = aij;
            }
        }
    }
    value
}

fn max_row_sum(layout: &BandLayout, ab: &[f64]) -> f64 {
    let mut value: f64 = 0.0;
    for i in 0..layout.n() {
        let sum = l1_norm(layout.row(i, ab));
        if sum > value || sum.is_nan() {
            value = sum;
        }
    }
    value
}

// work must have length n.
fn max_column_sum(layout: &BandLayout, ab: &[f64], work: &mut [f64]) -> f64 {
    work.fill(0.0);
    for i in 0..layout.n() {
        let offsets = layout.row_range(i);
        for (k, aij) in offsets.zip(layout.row(i, ab)) {
            work[layout.column(i, k)] += aij.abs();
        }
    }

    let mut value: f64 = 0.0;
    for &sum in work.iter() {
        if sum > value || sum.is_nan() {
            value = sum;
        }
    }
    value
}

fn frobenius(layout: &BandLayout, ab: &[f64]) -> f64 {
    let mut scale = 0.0;
    let mut ssq = 1.0;
    for i in 0..layout.n() {
        let row = lassq(layout.row(i, ab), 0.0, 1.0);
        (scale, ssq) = combssq((scale, ssq), row);
    }
    scale * ssq.sqrt()
}
