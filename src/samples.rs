use clap::ValueEnum;

use crate::document::{Keys, RawShare, ShareDocument};

/// Built-in share sets for trying the tool without an input file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    /// Three shares of x^2 + 3
    Sample1,
    /// Seven shares with values in bases 3 through 16
    Sample2,
}

impl Sample {
    pub fn document(self) -> ShareDocument {
        let shares = match self {
            Sample::Sample1 => vec![
                RawShare::new("1", 10, "4"),
                RawShare::new("2", 2, "111"),
                RawShare::new("3", 10, "12"),
            ],
            Sample::Sample2 => vec![
                RawShare::new("1", 6, "13444211440455345511"),
                RawShare::new("2", 15, "aed7015a346d635"),
                RawShare::new("3", 15, "6aeeb69631c227c"),
                RawShare::new("4", 16, "e1b5e05623d881f"),
                RawShare::new("5", 8, "316034514573652620673"),
                RawShare::new("6", 3, "2122212201122002221120200210011020220200"),
                RawShare::new("7", 3, "20120221122211000100210021102001201112121"),
            ],
        };

        ShareDocument {
            keys: Keys {
                n: shares.len(),
                k: shares.len(),
            },
            shares,
        }
    }
}
