use std::fmt;

use crate::share::Reconstruction;

/// Plain-text summary of a reconstruction:
///
/// ```text
/// k = 3
/// selected points = (1, 4), (2, 7), (3, 12)
/// secret f(0) = 3
/// ```
pub struct Report<'a> {
    reconstruction: &'a Reconstruction,
}

impl<'a> Report<'a> {
    pub fn new(reconstruction: &'a Reconstruction) -> Self {
        Report { reconstruction }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.reconstruction;
        writeln!(f, "k = {}", r.threshold)?;

        write!(f, "selected points = ")?;
        for (i, share) in r.selected.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", share)?;
        }
        writeln!(f)?;

        write!(f, "secret f(0) = {}", r.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::{Share, ShareSet};

    #[test]
    fn test_report_layout() {
        let shares = vec![Share::new(2, 7), Share::new(3, 12), Share::new(1, 4)];
        let reconstruction = ShareSet::new(shares, 3).unwrap().reconstruct().unwrap();

        assert_eq!(
            Report::new(&reconstruction).to_string(),
            "k = 3\nselected points = (1, 4), (2, 7), (3, 12)\nsecret f(0) = 3"
        );
    }

    #[test]
    fn test_report_fractional_secret() {
        let shares = vec![Share::new(1, 1), Share::new(3, 2)];
        let reconstruction = ShareSet::new(shares, 2).unwrap().reconstruct().unwrap();

        let text = Report::new(&reconstruction).to_string();
        assert!(text.ends_with("secret f(0) = 1/2"));
    }
}
