//! Validated occupation-count arrays.
//!
//! The raw [`energy`](super::energy::energy) reduction accepts any numbers.
//! `Density` is the hardened entry point: every element must be a finite,
//! non-negative integer, otherwise construction fails with
//! [`CoreError::InvalidInput`].

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{CoreError, CoreResult};

/// Upper bound (exclusive) for an `f64` that still fits in a `u64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density(Vec<u64>);

impl Density {
    pub fn new(counts: Vec<u64>) -> Self {
        Self(counts)
    }

    /// Convert arbitrary numeric values, rejecting anything that is not a
    /// non-negative integer.
    pub fn from_values(values: &[f64]) -> CoreResult<Self> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| count_from_f64(v).ok_or_else(|| not_a_count(i, &v.to_string())))
            .collect::<CoreResult<Vec<_>>>()
            .map(Self)
    }

    /// Parse counts separated by commas and/or whitespace, optionally wrapped
    /// in `[` `]`.
    pub fn parse(text: &str) -> CoreResult<Self> {
        let trimmed = text.trim();
        let body = match (trimmed.strip_prefix('['), trimmed.strip_suffix(']')) {
            (Some(_), Some(_)) => &trimmed[1..trimmed.len() - 1],
            (None, None) => trimmed,
            _ => {
                return Err(CoreError::invalid_input(&format!(
                    "unbalanced brackets in {trimmed:?}"
                )))
            }
        };

        let counts = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .enumerate()
            .map(|(i, tok)| parse_count(tok).ok_or_else(|| not_a_count(i, tok)))
            .collect::<CoreResult<Vec<_>>>()?;

        debug_log!("[density] parsed {} sites from {:?}", counts.len(), trimmed);
        Ok(Self(counts))
    }

    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let txt = fs::read_to_string(path)
            .map_err(|e| CoreError::io_error(&format!("{}: {e}", path.display())))?;
        Self::parse(&txt)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<u64> {
        self.0
    }

    pub fn total_particles(&self) -> CoreResult<u64> {
        self.0.iter().try_fold(0u64, |acc, &n| {
            acc.checked_add(n)
                .ok_or_else(|| CoreError::overflow("total particle count exceeds u64"))
        })
    }

    /// Checked Σ n(n - 1); fails with `Overflow` instead of wrapping.
    pub fn energy(&self) -> CoreResult<u64> {
        self.0.iter().enumerate().try_fold(0u64, |acc, (i, &n)| {
            let term = n.checked_mul(n.saturating_sub(1)).ok_or_else(|| {
                CoreError::overflow(&format!("site {i} with {n} particles exceeds u64"))
            })?;
            acc.checked_add(term)
                .ok_or_else(|| CoreError::overflow(&format!("energy exceeds u64 at site {i}")))
        })
    }
}

fn count_from_f64(v: f64) -> Option<u64> {
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < U64_LIMIT {
        Some(v as u64)
    } else {
        None
    }
}

fn parse_count(tok: &str) -> Option<u64> {
    tok.parse::<u64>()
        .ok()
        .or_else(|| tok.parse::<f64>().ok().and_then(count_from_f64))
}

fn not_a_count(index: usize, token: &str) -> CoreError {
    CoreError::invalid_input(&format!(
        "element {index} ({token:?}) is not a non-negative integer"
    ))
}

impl FromStr for Density {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Density::parse(s)
    }
}

impl<'a> IntoIterator for &'a Density {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{n}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_separators_and_brackets() {
        assert_eq!(Density::parse("1, 2 3").unwrap().as_slice(), &[1, 2, 3]);
        assert_eq!(Density::parse("[5,0,2]").unwrap().as_slice(), &[5, 0, 2]);
        assert_eq!(Density::parse(" [ 4\n7 ] ").unwrap().as_slice(), &[4, 7]);
        assert_eq!("3.0".parse::<Density>().unwrap().as_slice(), &[3]);
    }

    #[test]
    fn empty_inputs() {
        assert!(Density::parse("").unwrap().is_empty());
        assert!(Density::parse("[]").unwrap().is_empty());
        assert_eq!(Density::parse("[]").unwrap().energy(), Ok(0));
    }

    #[test]
    fn rejects_non_numeric() {
        let err = Density::parse("1,x").unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid Input: element 1 (\"x\") is not a non-negative integer"
        );
    }

    #[test]
    fn rejects_negative_and_fractional() {
        assert!(Density::parse("-1").unwrap_err().is_invalid_input());
        assert!(Density::parse("2.5").unwrap_err().is_invalid_input());
        assert!(Density::parse("[1, 2").unwrap_err().is_invalid_input());
    }

    #[test]
    fn from_values_checks_each_element() {
        assert_eq!(Density::from_values(&[3.0, 0.0]).unwrap().as_slice(), &[3, 0]);
        for bad in [-1.0, 2.5, f64::NAN, f64::INFINITY, 1e20] {
            let err = Density::from_values(&[1.0, bad]).unwrap_err();
            assert!(err.to_string().contains("element 1"), "{err}");
        }
    }

    #[test]
    fn checked_energy_matches_and_overflows() {
        assert_eq!(Density::new(vec![5, 0, 2]).energy(), Ok(22));
        assert_eq!(Density::new(vec![1, 2, 3]).total_particles(), Ok(6));
        assert!(matches!(
            Density::new(vec![u64::MAX, 1]).total_particles(),
            Err(CoreError::Overflow(_))
        ));

        let big = Density::new(vec![u64::MAX]);
        assert!(matches!(big.energy(), Err(CoreError::Overflow(_))));
        let many = Density::new(vec![1u64 << 32, 1u64 << 32]);
        assert!(matches!(many.energy(), Err(CoreError::Overflow(_))));
    }

    #[test]
    fn reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("density.txt");
        fs::write(&path, "5 0\n2\n").unwrap();
        assert_eq!(Density::from_file(&path).unwrap().as_slice(), &[5, 0, 2]);

        let missing = Density::from_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(missing, CoreError::IoError(_)));
    }

    #[test]
    fn displays_like_a_list() {
        assert_eq!(Density::new(vec![5, 0, 2]).to_string(), "[5, 0, 2]");
        assert_eq!(Density::default().to_string(), "[]");
    }
}
