use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dashboard filter bucket for an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCategory {
    Equities,
    Forex,
    Commodities,
    Crypto,
    Uncategorized,
}

/// Static instrument label → category table. Exact match on the configured
/// label; unknown labels land in the catch-all bucket.
const CATEGORY_TABLE: &[(&str, MarketCategory)] = &[
    ("Gold market", MarketCategory::Commodities),
    ("WTI Oil", MarketCategory::Commodities),
    ("EURUSD", MarketCategory::Forex),
    ("GBPUSD", MarketCategory::Forex),
    ("USDJPY", MarketCategory::Forex),
    ("Bitcoin", MarketCategory::Crypto),
    ("S&P 500", MarketCategory::Equities),
    ("Nasdaq 100", MarketCategory::Equities),
    ("Apple stock", MarketCategory::Equities),
    ("Tesla stock", MarketCategory::Equities),
    ("Nvidia stock", MarketCategory::Equities),
];

impl MarketCategory {
    pub fn for_instrument(label: &str) -> Self {
        CATEGORY_TABLE
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, c)| *c)
            .unwrap_or(MarketCategory::Uncategorized)
    }

    pub fn all() -> &'static [MarketCategory] {
        &[
            MarketCategory::Equities,
            MarketCategory::Forex,
            MarketCategory::Commodities,
            MarketCategory::Crypto,
            MarketCategory::Uncategorized,
        ]
    }

    /// Human label for filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            MarketCategory::Equities => "Equities",
            MarketCategory::Forex => "Forex",
            MarketCategory::Commodities => "Commodities",
            MarketCategory::Crypto => "Crypto",
            MarketCategory::Uncategorized => "Other",
        }
    }
}

impl fmt::Display for MarketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketCategory::Equities => write!(f, "equities"),
            MarketCategory::Forex => write!(f, "forex"),
            MarketCategory::Commodities => write!(f, "commodities"),
            MarketCategory::Crypto => write!(f, "crypto"),
            MarketCategory::Uncategorized => write!(f, "uncategorized"),
        }
    }
}

impl FromStr for MarketCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equities" => Ok(MarketCategory::Equities),
            "forex" => Ok(MarketCategory::Forex),
            "commodities" => Ok(MarketCategory::Commodities),
            "crypto" => Ok(MarketCategory::Crypto),
            "uncategorized" | "other" => Ok(MarketCategory::Uncategorized),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}
