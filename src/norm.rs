use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Matrix norm computed by [`langb`](crate::langb).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Norm {
    /// Largest absolute value of any entry.
    MaxAbs,
    /// Largest row sum of absolute values (the infinity norm).
    MaxRowSum,
    /// Largest column sum of absolute values (the 1-norm).
    MaxColumnSum,
    /// Square root of the sum of squares of all entries.
    Frobenius,
}

impl Norm {
    /// Parses a LAPACK norm character.
    ///
    /// ```txt
    ///     'M'        MaxAbs
    ///     'O', '1'   MaxColumnSum
    ///     'I'        MaxRowSum
    ///     'F', 'E'   Frobenius
    /// ```
    /// Letters are accepted in either case.
    pub fn from_lapack(c: u8) -> Result<Norm> {
        match c.to_ascii_uppercase() {
            b'M' => Ok(Norm::MaxAbs),
            b'O' | b'1' => Ok(Norm::MaxColumnSum),
            b'I' => Ok(Norm::MaxRowSum),
            b'F' | b'E' => Ok(Norm::Frobenius),
            _ => Err(Error::InvalidNorm((c as char).to_string())),
        }
    }

    /// Returns the canonical LAPACK character for this norm.
    pub fn as_lapack(self) -> u8 {
        match self {
            Norm::MaxAbs => b'M',
            Norm::MaxRowSum => b'I',
            Norm::MaxColumnSum => b'O',
            Norm::Frobenius => b'F',
        }
    }

    /// Whether the norm accumulates into a caller supplied workspace.
    ///
    /// Rows are contiguous in band storage, so only the column sums need
    /// an auxiliary array.
    pub fn needs_work(self) -> bool {
        matches!(self, Norm::MaxColumnSum)
    }
}

impl FromStr for Norm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Norm> {
        match s.as_bytes() {
            [c] => Norm::from_lapack(*c),
            _ => Err(Error::InvalidNorm(s.to_string())),
        }
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Norm::MaxAbs => "max-abs",
            Norm::MaxRowSum => "max-row-sum",
            Norm::MaxColumnSum => "max-column-sum",
            Norm::Frobenius => "frobenius",
        };
        f.write_str(name)
    }
}
