use ::faer::{Mat, MatRef};

use super::BandMat;
use crate::error::{Error, Result};

/// Packs the band of a dense square matrix into compact band storage.
/// Entries outside the band are dropped.
pub fn from_dense(a: MatRef<f64>, kl: usize, ku: usize) -> Result<BandMat> {
    let (rows, cols) = (a.nrows(), a.ncols());
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    BandMat::from_fn(rows, kl, ku, |i, j| a.read(i, j))
}

/// Expands a band matrix into a dense matrix with explicit zeros.
pub fn to_dense(a: &BandMat) -> Mat<f64> {
    let n = a.layout().n();
    Mat::from_fn(n, n, |i, j| a.get(i, j))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Norm;

    #[test]
    fn test_from_dense() {
        let dense = Mat::from_fn(4, 4, |i, j| (1 + 4 * i + j) as f64);
        let band = from_dense(dense.as_ref(), 1, 0).unwrap();
        assert_eq!(band.get(2, 1), 10.0);
        assert_eq!(band.get(2, 2), 11.0);
        assert_eq!(band.get(1, 2), 0.0);
        assert_eq!(band.norm(Norm::MaxRowSum).unwrap(), 15.0 + 16.0);
    }

    #[test]
    fn test_not_square() {
        let dense = Mat::<f64>::zeros(2, 3);
        assert_eq!(
            from_dense(dense.as_ref(), 0, 0),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_to_dense() {
        let band = BandMat::from_fn(3, 1, 1, |i, j| if i == j { 2.0 } else { -1.0 })
            .unwrap();
        let dense = to_dense(&band);
        assert_eq!(dense.nrows(), 3);
        assert_eq!(dense.read(0, 0), 2.0);
        assert_eq!(dense.read(0, 1), -1.0);
        assert_eq!(dense.read(0, 2), 0.0);
        assert_eq!(dense.read(2, 0), 0.0);

        let back = from_dense(dense.as_ref(), 1, 1).unwrap();
        assert_eq!(back, band);
    }
}
