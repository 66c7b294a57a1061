pub mod document;
pub mod error;
pub mod lagrange;
pub mod radix;
pub mod rational;
pub mod report;
pub mod samples;
pub mod share;

pub use document::{RawShare, ShareDocument};
pub use error::{Error, Result};
pub use lagrange::{
    interpolate_at_zero, lagrange_coefficients_at_zero, reconstruct_secret, select_shares,
};
pub use rational::Rational;
pub use report::Report;
pub use share::{Reconstruction, Share, ShareSet};
