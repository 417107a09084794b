use std::ops::Range;

use tracing::debug;

use crate::error::{Error, Result};

/// Shape of an `n x n` band matrix with `kl` sub-diagonals and `ku`
/// super-diagonals in compact band storage.
///
/// Row `i` of the matrix occupies `ab[i*ldab..i*ldab + kl + 1 + ku]` and
/// the diagonal entry `a[i][i]` sits at offset `kl` in that row:
/// ```txt
///     a[i][j] == ab[i*ldab + j + kl - i]    for max(0, i-kl) <= j <= min(n-1, i+ku)
/// ```
/// For `n = 5, kl = 1, ku = 2` the stored rows are (`*` is padding that
/// is never read):
/// ```txt
///     *   a00 a01 a02
///     a10 a11 a12 a13
///     a21 a22 a23 a24
///     a32 a33 a34 *
///     a43 a44 *   *
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandLayout {
    n: usize,
    kl: usize,
    ku: usize,
    ncol: usize,
    ldab: usize,
}

// kl + 1 + ku, or None when it does not fit in a usize.
fn band_width(kl: usize, ku: usize) -> Option<usize> {
    kl.checked_add(1)?.checked_add(ku)
}

fn bad_stride(ldab: i64, ncol: usize) -> Error {
    debug!(ldab, ncol, "band stride too small");
    Error::BadStride { ldab, ncol }
}

impl BandLayout {
    /// Validates the band dimensions against the row stride `ldab`.
    ///
    /// A band width `kl + 1 + ku` that overflows `usize` is reported as
    /// [`Error::BadStride`] with `ncol == usize::MAX`.
    pub fn new(n: usize, kl: usize, ku: usize, ldab: usize) -> Result<Self> {
        let ncol = match band_width(kl, ku) {
            Some(ncol) if ldab >= ncol => ncol,
            ncol => {
                let ldab = i64::try_from(ldab).unwrap_or(i64::MAX);
                return Err(bad_stride(ldab, ncol.unwrap_or(usize::MAX)));
            }
        };
        Ok(Self {
            n,
            kl,
            ku,
            ncol,
            ldab,
        })
    }

    /// Layout with no slack between rows: `ldab == kl + 1 + ku`.
    pub fn tight(n: usize, kl: usize, ku: usize) -> Result<Self> {
        let ldab = band_width(kl, ku).ok_or_else(|| bad_stride(0, usize::MAX))?;
        Self::new(n, kl, ku, ldab)
    }

    /// Like [`BandLayout::new`] but for signed LAPACK-style integers.
    pub fn from_lapack(n: i32, kl: i32, ku: i32, ldab: i32) -> Result<Self> {
        for (name, value) in [("n", n), ("kl", kl), ("ku", ku)] {
            if value < 0 {
                debug!(name, value, "negative band dimension");
                return Err(Error::NegativeDimension {
                    name,
                    value: value as i64,
                });
            }
        }
        let (n, kl, ku) = (n as usize, kl as usize, ku as usize);
        if ldab < 0 {
            let ncol = band_width(kl, ku).unwrap_or(usize::MAX);
            return Err(bad_stride(ldab as i64, ncol));
        }
        Self::new(n, kl, ku, ldab as usize)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn kl(&self) -> usize {
        self.kl
    }

    pub fn ku(&self) -> usize {
        self.ku
    }

    pub fn ldab(&self) -> usize {
        self.ldab
    }

    /// Number of stored columns per row: `kl + 1 + ku`.
    pub fn ncol(&self) -> usize {
        self.ncol
    }

    /// Minimum length of a band buffer: `(n-1)*ldab + ncol`, or zero for
    /// an empty matrix. Saturates instead of overflowing.
    pub fn required_len(&self) -> usize {
        if self.n == 0 {
            return 0;
        }
        (self.n - 1)
            .saturating_mul(self.ldab)
            .saturating_add(self.ncol)
    }

    /// Checks that `ab` holds every stored row.
    pub fn check_buffer(&self, ab: &[f64]) -> Result<()> {
        let need = self.required_len();
        if ab.len() < need {
            debug!(need, got = ab.len(), "band buffer too short");
            return Err(Error::ShortBuffer {
                need,
                got: ab.len(),
            });
        }
        Ok(())
    }

    /// Storage offsets of row `i` that hold entries of the matrix:
    /// `max(0, kl-i)..min(n+kl-i, ncol)`.
    ///
    /// `i` must be less than `n`. The leading offsets of the first `kl`
    /// rows and the trailing offsets of the last `ku` rows are padding.
    pub fn row_range(&self, i: usize) -> Range<usize> {
        debug_assert!(i < self.n);
        let l = self.kl.saturating_sub(i);
        let u = usize::min((self.n - i).saturating_add(self.kl), self.ncol);
        l..u
    }

    /// Logical column of storage offset `k` in row `i`.
    ///
    /// `k` must lie in [`row_range(i)`](BandLayout::row_range).
    pub fn column(&self, i: usize, k: usize) -> usize {
        if k >= self.kl {
            i + (k - self.kl)
        } else {
            i - (self.kl - k)
        }
    }

    /// Storage offset of `a[i][j]` within row `i`, or `None` when the
    /// position is outside the matrix or outside the band.
    pub fn offset(&self, i: usize, j: usize) -> Option<usize> {
        if i >= self.n || j >= self.n {
            return None;
        }
        if j >= i {
            (j - i <= self.ku).then(|| self.kl + (j - i))
        } else {
            (i - j <= self.kl).then(|| self.kl - (i - j))
        }
    }

    /// Valid entries of row `i` of `ab`.
    ///
    /// # Panics
    ///
    /// Panics if `ab` is shorter than [`required_len`](BandLayout::required_len).
    pub fn row<'a>(&self, i: usize, ab: &'a [f64]) -> &'a [f64] {
        let r = self.row_range(i);
        let start = i * self.ldab;
        &ab[start + r.start..start + r.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_stride() {
        assert_eq!(
            BandLayout::new(4, 1, 2, 3),
            Err(Error::BadStride { ldab: 3, ncol: 4 })
        );
        assert!(BandLayout::new(4, 1, 2, 4).is_ok());
        assert!(BandLayout::new(4, 1, 2, 7).is_ok());
    }

    #[test]
    fn test_band_width_overflow() {
        assert_eq!(
            BandLayout::new(0, usize::MAX, 0, 0),
            Err(Error::BadStride {
                ldab: 0,
                ncol: usize::MAX
            })
        );
        assert_eq!(
            BandLayout::new(1, usize::MAX / 2 + 1, usize::MAX / 2, 7),
            Err(Error::BadStride {
                ldab: 7,
                ncol: usize::MAX
            })
        );
        assert!(BandLayout::tight(3, usize::MAX, 1).is_err());
        assert!(BandLayout::tight(3, 0, usize::MAX).is_err());

        // Widest band that still fits.
        let layout = BandLayout::tight(2, usize::MAX - 1, 0).unwrap();
        assert_eq!(layout.ncol(), usize::MAX);
        assert_eq!(layout.row_range(1), usize::MAX - 2..usize::MAX);
        assert_eq!(layout.column(1, usize::MAX - 2), 0);
        assert_eq!(layout.offset(1, 0), Some(usize::MAX - 2));
        assert_eq!(layout.offset(0, 1), None);
    }

    #[test]
    fn test_tight() {
        let layout = BandLayout::tight(4, 1, 2).unwrap();
        assert_eq!(layout.ldab(), 4);
        assert_eq!(layout, BandLayout::new(4, 1, 2, 4).unwrap());
    }

    #[test]
    fn test_from_lapack() {
        assert_eq!(
            BandLayout::from_lapack(-1, 0, 0, 1),
            Err(Error::NegativeDimension {
                name: "n",
                value: -1
            })
        );
        assert_eq!(
            BandLayout::from_lapack(3, -2, 0, 1),
            Err(Error::NegativeDimension {
                name: "kl",
                value: -2
            })
        );
        assert_eq!(
            BandLayout::from_lapack(3, 0, -1, 1),
            Err(Error::NegativeDimension {
                name: "ku",
                value: -1
            })
        );
        assert_eq!(
            BandLayout::from_lapack(3, 1, 1, -3),
            Err(Error::BadStride { ldab: -3, ncol: 3 })
        );
        assert_eq!(
            BandLayout::from_lapack(3, 1, 1, 2),
            Err(Error::BadStride { ldab: 2, ncol: 3 })
        );
        let layout = BandLayout::from_lapack(3, 1, 1, 3).unwrap();
        assert_eq!(layout, BandLayout::new(3, 1, 1, 3).unwrap());
    }

    #[test]
    fn test_required_len() {
        assert_eq!(BandLayout::new(0, 2, 2, 5).unwrap().required_len(), 0);
        assert_eq!(BandLayout::new(1, 2, 2, 8).unwrap().required_len(), 5);
        assert_eq!(BandLayout::new(4, 1, 1, 5).unwrap().required_len(), 18);
    }

    #[test]
    fn test_row_range() {
        let layout = BandLayout::new(5, 1, 2, 4).unwrap();
        assert_eq!(layout.row_range(0), 1..4);
        assert_eq!(layout.row_range(1), 0..4);
        assert_eq!(layout.row_range(2), 0..4);
        assert_eq!(layout.row_range(3), 0..3);
        assert_eq!(layout.row_range(4), 0..2);
    }

    #[test]
    fn test_row_range_wide_band() {
        // Band wider than the matrix.
        let layout = BandLayout::new(2, 3, 3, 7).unwrap();
        assert_eq!(layout.row_range(0), 3..5);
        assert_eq!(layout.row_range(1), 2..4);
    }

    #[test]
    fn test_column_offset() {
        let layout = BandLayout::new(5, 1, 2, 4).unwrap();
        for i in 0..5 {
            for k in layout.row_range(i) {
                let j = layout.column(i, k);
                assert_eq!(layout.offset(i, j), Some(k));
            }
        }
        assert_eq!(layout.offset(2, 0), None);
        assert_eq!(layout.offset(0, 3), None);
        assert_eq!(layout.offset(4, 5), None);
        assert_eq!(layout.offset(3, 2), Some(0));
    }

    #[test]
    fn test_row() {
        let layout = BandLayout::new(3, 1, 1, 3).unwrap();
        let ab = [9., 2., -1., -1., 2., -1., -1., 2., 9.];
        assert_eq!(layout.row(0, &ab), &[2., -1.]);
        assert_eq!(layout.row(1, &ab), &[-1., 2., -1.]);
        assert_eq!(layout.row(2, &ab), &[-1., 2.]);
    }

    #[test]
    fn test_check_buffer() {
        let layout = BandLayout::new(3, 1, 1, 4).unwrap();
        assert_eq!(
            layout.check_buffer(&[0.0; 10]),
            Err(Error::ShortBuffer { need: 11, got: 10 })
        );
        assert!(layout.check_buffer(&[0.0; 11]).is_ok());
    }
}
