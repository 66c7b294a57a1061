use std::collections::HashSet;

use num_bigint::BigInt;
use tracing::debug;

use crate::error::{Error, Result};
use crate::rational::Rational;
use crate::share::Share;

/// Sort shares by x ascending and keep the first `k`.
///
/// The sort is stable, so shares with equal x keep their input order.
pub fn select_shares(shares: &[Share], k: usize) -> Result<Vec<Share>> {
    if k == 0 {
        return Err(Error::InvalidThreshold(k));
    }
    if shares.len() < k {
        return Err(Error::InsufficientShares {
            required: k,
            available: shares.len(),
        });
    }

    let mut sorted = shares.to_vec();
    sorted.sort_by(|a, b| a.x().cmp(b.x()));
    sorted.truncate(k);

    debug!(selected = sorted.len(), available = shares.len(), "selected shares");
    Ok(sorted)
}

fn find_duplicate(xs: &[BigInt]) -> Option<&BigInt> {
    let mut seen = HashSet::with_capacity(xs.len());
    xs.iter().find(|x| !seen.insert(*x))
}

// Compute the Lagrange basis values at x = 0 for the given nodes
// L_i(0) = ∏(j≠i) (0 - x_j) / (x_i - x_j)
pub fn lagrange_coefficients_at_zero(xs: &[BigInt]) -> Result<Vec<Rational>> {
    if let Some(x) = find_duplicate(xs) {
        return Err(Error::DuplicateXCoordinate { x: x.clone() });
    }

    let mut coefficients = Vec::with_capacity(xs.len());

    for (i, x_i) in xs.iter().enumerate() {
        let mut basis = Rational::one();

        for (j, x_j) in xs.iter().enumerate() {
            if i != j {
                // distinct nodes, so x_i - x_j is never zero
                let factor = Rational::new(-x_j, x_i - x_j)?;
                basis = basis.multiply(&factor);
            }
        }

        coefficients.push(basis);
    }

    Ok(coefficients)
}

/// Evaluate at x = 0 the unique polynomial of degree `points.len() - 1`
/// through `points`.
///
/// The result is exact and returned as-is; a non-integer value usually means
/// the shares are corrupted or the threshold is wrong.
pub fn interpolate_at_zero(points: &[Share]) -> Result<Rational> {
    let xs: Vec<BigInt> = points.iter().map(|p| p.x().clone()).collect();
    let coefficients = lagrange_coefficients_at_zero(&xs)?;

    let mut secret = Rational::zero();
    for (point, coefficient) in points.iter().zip(&coefficients) {
        let term = Rational::from_integer(point.y().clone()).multiply(coefficient);
        secret = secret.add(&term);
    }

    Ok(secret)
}

/// Recover f(0) from the first `k` shares in ascending x order.
///
/// Fails with [`Error::InvalidThreshold`] when `k` is zero, with
/// [`Error::InsufficientShares`] when fewer than `k` shares are
/// given and with [`Error::DuplicateXCoordinate`] when two selected shares
/// have the same x. Shares beyond the first `k` are never inspected.
pub fn reconstruct_secret(shares: &[Share], k: usize) -> Result<Rational> {
    let selected = select_shares(shares, k)?;
    interpolate_at_zero(&selected)
}
