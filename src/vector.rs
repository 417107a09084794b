// Copyright The Gonum Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license.

// See lapack/gonum/dlassq.go and lapack/gonum/dcombssq.go in Gonum.

//! Reductions over contiguous slices used by the band norms.

/// Returns the sum of the absolute values of `x`.
pub fn l1_norm(x: &[f64]) -> f64 {
    let mut sum: f64 = 0.0;
    for v in x {
        sum += v.abs();
    }
    sum
}

/// Updates a scaled sum of squares with the entries of `x`.
///
/// Returns `(scl, smsq)` such that
/// ```txt
///     scl^2 * smsq == x[0]^2 + ... + x[n-1]^2 + scale^2 * sumsq
/// ```
/// where `scl` is the largest of `scale` and the magnitudes in `x`, so
/// no entry is ever squared unscaled. Zero entries are skipped. A NaN in
/// `x` makes both outputs NaN.
pub fn lassq(x: &[f64], scale: f64, sumsq: f64) -> (f64, f64) {
    let mut scale = scale;
    let mut sumsq = sumsq;
    for &xi in x {
        if xi == 0.0 {
            continue;
        }
        let absxi = xi.abs();
        if scale < absxi || absxi.is_nan() {
            sumsq = 1.0 + sumsq * (scale / absxi).powi(2);
            scale = absxi;
        } else if absxi == scale {
            // Also reached when both are infinite.
            sumsq += 1.0;
        } else {
            sumsq += (absxi / scale).powi(2);
        }
    }
    (scale, sumsq)
}

/// Combines two scaled sums of squares.
///
/// The sum with the smaller scale is rescaled by `(small/large)^2` and
/// added to the other, so the result satisfies
/// ```txt
///     scale^2 * ssq == scale1^2 * ssq1 + scale2^2 * ssq2
/// ```
pub fn combssq((scale1, ssq1): (f64, f64), (scale2, ssq2): (f64, f64)) -> (f64, f64) {
    if scale1.is_nan() || scale2.is_nan() {
        return (f64::NAN, f64::NAN);
    }
    if scale1 == scale2 {
        (scale1, ssq1 + ssq2)
    } else if scale1 > scale2 {
        (scale1, ssq1 + (scale2 / scale1).powi(2) * ssq2)
    } else {
        (scale2, ssq2 + (scale1 / scale2).powi(2) * ssq1)
    }
}
