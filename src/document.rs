//! Share documents: the JSON input format and its conversion into a
//! [`ShareSet`].
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every top-level key other than `keys` names a share by its base-10 x
//! coordinate. `base` may be written as a JSON number or a numeric string.
//! Entries without a `base` and a string `value` are skipped.

use std::collections::BTreeMap;
use std::str::FromStr;

use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};
use crate::radix;
use crate::share::{Share, ShareSet};

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BaseField {
    Number(u32),
    Text(String),
}

#[derive(Deserialize)]
struct Entry {
    base: BaseField,
    value: String,
}

#[derive(Deserialize)]
struct RawDocument {
    keys: Option<Keys>,
    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

/// A share as written in the document, before any decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawShare {
    pub x: String,
    pub base: u32,
    pub value: String,
}

impl RawShare {
    pub fn new(x: &str, base: u32, value: &str) -> Self {
        RawShare {
            x: x.to_string(),
            base,
            value: value.to_string(),
        }
    }

    pub fn decode(&self) -> Result<Share> {
        let x = self.x.trim();
        // BigInt's parser would also accept digit separators
        if x.contains('_') {
            return Err(Error::InvalidCoordinate(self.x.clone()));
        }
        let x = BigInt::from_str(x).map_err(|_| Error::InvalidCoordinate(self.x.clone()))?;
        let y = radix::decode(self.value.trim(), self.base)?;
        Ok(Share::new(x, y))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareDocument {
    pub keys: Keys,
    pub shares: Vec<RawShare>,
}

impl ShareDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(json)?;
        let keys = raw
            .keys
            .ok_or_else(|| Error::MalformedDocument("missing \"keys\" object".to_string()))?;

        let mut shares = Vec::with_capacity(raw.entries.len());
        for (x, value) in raw.entries {
            let entry: Entry = match serde_json::from_value(value) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(key = %x, error = %e, "skipping entry that is not a share");
                    continue;
                }
            };
            let base = match entry.base {
                BaseField::Number(base) => base,
                BaseField::Text(text) => text.trim().parse().map_err(|_| {
                    Error::MalformedDocument(format!("share {x:?} has non-numeric base {text:?}"))
                })?,
            };
            shares.push(RawShare {
                x,
                base,
                value: entry.value,
            });
        }

        Ok(ShareDocument { keys, shares })
    }

    /// Decode every share and pair them with `keys.k`.
    pub fn into_share_set(self) -> Result<ShareSet> {
        if self.shares.len() != self.keys.n {
            warn!(
                declared = self.keys.n,
                found = self.shares.len(),
                "share count does not match keys.n"
            );
        }

        let shares = self
            .shares
            .iter()
            .map(RawShare::decode)
            .collect::<Result<Vec<_>>>()?;
        ShareSet::new(shares, self.keys.k)
    }
}
