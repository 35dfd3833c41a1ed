pub mod templates;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::dimension::Tier;

/// Canned coaching text for one entity at one tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightBlock {
    pub summary: String,
    pub detail: String,
    pub actions: Vec<String>,
    pub signals: Vec<String>,
}

impl InsightBlock {
    pub fn new(summary: &str, detail: &str, actions: &[&str], signals: &[&str]) -> Self {
        InsightBlock {
            summary: summary.to_string(),
            detail: detail.to_string(),
            actions: actions.iter().map(|s| s.to_string()).collect(),
            signals: signals.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Score thresholds for tier selection. A score equal to a threshold
/// belongs to the upper tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierBands {
    pub high: u32,
    pub mid: u32,
}

impl TierBands {
    pub const STANDARD: TierBands = TierBands { high: 75, mid: 50 };

    pub fn tier(&self, score: u32) -> Tier {
        if score >= self.high {
            Tier::High
        } else if score >= self.mid {
            Tier::Mid
        } else {
            Tier::Low
        }
    }
}

impl Default for TierBands {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, Default)]
struct TierSet {
    high: Option<InsightBlock>,
    mid: Option<InsightBlock>,
    low: Option<InsightBlock>,
}

impl TierSet {
    fn slot(&mut self, tier: Tier) -> &mut Option<InsightBlock> {
        match tier {
            Tier::High => &mut self.high,
            Tier::Mid => &mut self.mid,
            Tier::Low => &mut self.low,
        }
    }

    fn get(&self, tier: Tier) -> Option<&InsightBlock> {
        match tier {
            Tier::High => self.high.as_ref(),
            Tier::Mid => self.mid.as_ref(),
            Tier::Low => self.low.as_ref(),
        }
    }
}

/// Lookup from (entity key, tier) to a canned insight block.
///
/// Used with [`crate::dimension::Dimension`] keys for the per-dimension
/// narrative and with question ids for per-question notes.
#[derive(Debug, Clone)]
pub struct InsightTable<K> {
    entries: HashMap<K, TierSet>,
}

impl<K: Eq + Hash> Default for InsightTable<K> {
    fn default() -> Self {
        InsightTable {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> InsightTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K, tier: Tier, block: InsightBlock) {
        *self.entries.entry(key).or_default().slot(tier) = Some(block);
    }

    /// Registers all three tiers for `key` at once.
    pub fn with_tiers(
        mut self,
        key: K,
        high: InsightBlock,
        mid: InsightBlock,
        low: InsightBlock,
    ) -> Self {
        let set = TierSet {
            high: Some(high),
            mid: Some(mid),
            low: Some(low),
        };
        self.entries.insert(key, set);
        self
    }

    pub fn lookup<Q>(&self, key: &Q, tier: Tier) -> Option<&InsightBlock>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key).and_then(|set| set.get(tier))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Whether every tier is populated for `key`.
    pub fn is_complete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        Tier::ALL
            .iter()
            .all(|tier| self.lookup(key, *tier).is_some())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
