// Target taxonomy for category normalization

use serde::{Deserialize, Serialize};

pub const DEFAULT_TAXONOMY: [&str; 12] = [
    "Dexes",
    "Lending",
    "Yield",
    "Bridge",
    "Stablecoin",
    "Gaming",
    "NFT",
    "Derivatives",
    "Launchpad",
    "Wallet",
    "Exchange",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy(Vec<String>);

impl Taxonomy {
    /// Trims and de-duplicates entries; `None` when nothing usable remains.
    pub fn new(entries: Vec<String>) -> Option<Self> {
        let mut out: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            let trimmed = entry.trim();
            if trimmed.is_empty() || out.iter().any(|seen| seen.eq_ignore_ascii_case(trimmed)) {
                continue;
            }
            out.push(trimmed.to_string());
        }
        (!out.is_empty()).then_some(Self(out))
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self(DEFAULT_TAXONOMY.iter().map(ToString::to_string).collect())
    }
}
