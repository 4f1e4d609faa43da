//! Data models for pricing tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One pricing tier, with price and storage text kept exactly as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Displayed price, e.g. "$5"
    pub price: String,
    /// Displayed storage, e.g. "1GB"
    pub storage: String,
    /// Number of databases included
    pub databases: u32,
}

impl Plan {
    pub fn new(price: impl Into<String>, storage: impl Into<String>, databases: u32) -> Self {
        Self { price: price.into(), storage: storage.into(), databases }
    }
}

/// Plans keyed by display name.
///
/// Backed by a sorted map so that serializing the same page twice gives
/// identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    plans: BTreeMap<String, Plan>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a plan, returning it back if the name is already taken.
    pub fn insert(&mut self, name: impl Into<String>, plan: Plan) -> Result<(), (String, Plan)> {
        let name = name.into();
        if self.contains(&name) {
            return Err((name, plan));
        }
        self.plans.insert(name, plan);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Plan> {
        self.plans.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plans.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Iterates plans in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Plan)> {
        self.plans.iter().map(|(name, plan)| (name.as_str(), plan))
    }
}
