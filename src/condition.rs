use anyhow::{format_err, Result};

use crate::band::BandLayout;
use crate::norm::Norm;

/// Returns the 1-norm condition number of a band matrix given the 1-norm
/// of its inverse, as produced by an estimator or a factorization.
/// ```txt
///     norm1(A) * norm1(inv(A))
/// ```
pub fn estimate(layout: &BandLayout, ab: &[f64], norm_a_inv: f64) -> Result<f64> {
    if norm_a_inv.is_nan() || norm_a_inv < 0.0 {
        return Err(format_err!(
            "norm of matrix inverse must be non-negative, got {}",
            norm_a_inv
        ));
    }

    let mut work = vec![0.0; layout.n()];
    let norm_a = layout.norm(Norm::MaxColumnSum, ab, Some(&mut work[..]))?;

    Ok(norm_a * norm_a_inv)
}

/// Returns a cheap estimate of the reciprocal of the condition number
/// of a band matrix.
/// ```txt
///     min(abs(diag(A))) / max(abs(diag(A)))
/// ```
/// Zero when any diagonal entry is zero or NaN.
pub fn reciprocal(layout: &BandLayout, ab: &[f64]) -> Result<f64> {
    layout.check_buffer(ab)?;

    let mut min_a = f64::INFINITY;
    let mut max_a: f64 = 0.0;

    for u in band_diag(layout, ab) {
        if u == 0.0 || u.is_nan() {
            return Ok(0.0);
        }
        let ui = u.abs();
        if ui < min_a {
            min_a = ui;
        }
        if ui > max_a {
            max_a = ui;
        }
    }

    if max_a == 0.0 {
        return Ok(0.0);
    }
    let rc = min_a / max_a;

    if rc.is_nan() {
        Ok(0.0)
    } else {
        Ok(rc)
    }
}

// The diagonal sits at offset kl of every stored row.
fn band_diag<'a>(layout: &'a BandLayout, ab: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
    (0..layout.n()).map(move |i| ab[i * layout.ldab() + layout.kl()])
}
