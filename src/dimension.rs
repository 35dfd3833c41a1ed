use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six capability areas an answer set is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "positioning")]
    Positioning,
    #[serde(rename = "product")]
    Product,
    #[serde(rename = "content")]
    Content,
    #[serde(rename = "shortVideo")]
    ShortVideo,
    #[serde(rename = "sales")]
    Sales,
    #[serde(rename = "operations")]
    Operations,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Positioning,
        Dimension::Product,
        Dimension::Content,
        Dimension::ShortVideo,
        Dimension::Sales,
        Dimension::Operations,
    ];

    /// Stable key used in persisted answers, exports and chart data.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Positioning => "positioning",
            Dimension::Product => "product",
            Dimension::Content => "content",
            Dimension::ShortVideo => "shortVideo",
            Dimension::Sales => "sales",
            Dimension::Operations => "operations",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Descriptive metadata for a dimension. Never affects scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionMeta {
    pub key: Dimension,
    pub label: String,
    pub description: String,
    pub color: String,
}

impl DimensionMeta {
    pub fn new(key: Dimension, label: &str, description: &str, color: &str) -> Self {
        DimensionMeta {
            key,
            label: label.to_string(),
            description: description.to_string(),
            color: color.to_string(),
        }
    }
}

/// Score band selecting canned insight text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Mid,
    Low,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::High, Tier::Mid, Tier::Low];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::High => write!(f, "high"),
            Tier::Mid => write!(f, "mid"),
            Tier::Low => write!(f, "low"),
        }
    }
}
