//! Fitment matching - join OEM tire sizes against the inventory
//!
//! The wanted set is built by normalizing every fitment size and dropping the
//! unparseable ones; a record matches when it is in stock and its canonical
//! size is wanted. Output preserves inventory order.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::size::{normalize, TireSize};
use crate::inventory::TireRecord;

/// Outcome of matching a set of OEM sizes against the inventory.
///
/// Serializes in the shape consumed by the storefront: raw sizes, the
/// deduplicated canonical set, and the matched records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// Raw size strings as supplied by the fitment source
    pub sizes: Vec<String>,
    /// Deduplicated canonical forms; unparseable inputs are dropped
    pub sizes_normalized: BTreeSet<TireSize>,
    /// In-stock records whose canonical size is wanted, in inventory order
    pub results: Vec<TireRecord>,
}

/// Normalize a sequence of raw size strings into a deduplicated canonical set.
pub fn wanted_sizes<'a, I>(raw: I) -> BTreeSet<TireSize>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter().filter_map(normalize).collect()
}

/// Match OEM fitment sizes against the inventory.
///
/// Records that are out of stock or have no canonical size never match.
/// Empty inputs yield an empty report, never an error.
pub fn match_inventory(fitment_sizes: &[String], inventory: &[TireRecord]) -> MatchReport {
    let wanted = wanted_sizes(fitment_sizes.iter().map(String::as_str));
    let results = inventory
        .iter()
        .filter(|r| r.in_stock)
        .filter(|r| r.size_norm.is_some_and(|s| wanted.contains(&s)))
        .cloned()
        .collect();
    MatchReport {
        sizes: fitment_sizes.to_vec(),
        sizes_normalized: wanted,
        results,
    }
}
