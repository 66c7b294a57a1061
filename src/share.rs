use std::fmt;

use num_bigint::BigInt;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::lagrange::{interpolate_at_zero, select_shares};
use crate::rational::Rational;

/// One point (x, y) on the secret polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Share {
    x: BigInt,
    y: BigInt,
}

impl Share {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Share {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// All available shares together with the threshold k.
#[derive(Clone, Debug)]
pub struct ShareSet {
    shares: Vec<Share>,
    threshold: usize,
}

/// Outcome of a successful reconstruction, in the shape the report needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconstruction {
    pub threshold: usize,
    pub selected: Vec<Share>,
    pub secret: Rational,
}

impl ShareSet {
    pub fn new(shares: Vec<Share>, threshold: usize) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold(threshold));
        }
        if shares.len() < threshold {
            return Err(Error::InsufficientShares {
                required: threshold,
                available: shares.len(),
            });
        }
        Ok(ShareSet { shares, threshold })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// The first k shares in ascending x order.
    pub fn selected(&self) -> Result<Vec<Share>> {
        select_shares(&self.shares, self.threshold)
    }

    #[instrument(skip_all, fields(k = self.threshold, available = self.shares.len()))]
    pub fn reconstruct(&self) -> Result<Reconstruction> {
        let selected = self.selected()?;
        let secret = interpolate_at_zero(&selected)?;
        debug!(%secret, integer = secret.is_integer(), "reconstructed secret");

        Ok(Reconstruction {
            threshold: self.threshold,
            selected,
            secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_display() {
        assert_eq!(Share::new(3, -12).to_string(), "(3, -12)");
    }

    #[test]
    fn test_share_set_rejects_zero_threshold() {
        let shares = vec![Share::new(1, 1)];
        assert!(matches!(
            ShareSet::new(shares, 0),
            Err(Error::InvalidThreshold(0))
        ));
    }

    #[test]
    fn test_share_set_rejects_too_few_shares() {
        let shares = vec![Share::new(1, 4), Share::new(2, 7)];
        assert!(matches!(
            ShareSet::new(shares, 3),
            Err(Error::InsufficientShares {
                required: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn test_selected_sorts_and_truncates() {
        let shares = vec![
            Share::new(4, 19),
            Share::new(2, 7),
            Share::new(3, 12),
            Share::new(1, 4),
        ];
        let set = ShareSet::new(shares, 3).unwrap();
        let selected = set.selected().unwrap();
        assert_eq!(
            selected,
            vec![Share::new(1, 4), Share::new(2, 7), Share::new(3, 12)]
        );
    }

    #[test]
    fn test_reconstruct_bundles_selection() {
        let shares = vec![Share::new(3, 12), Share::new(1, 4), Share::new(2, 7)];
        let result = ShareSet::new(shares, 3).unwrap().reconstruct().unwrap();

        assert_eq!(result.threshold, 3);
        assert_eq!(result.selected[0], Share::new(1, 4));
        assert_eq!(result.secret, Rational::from(3));
    }
}
