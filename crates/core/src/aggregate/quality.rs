//! Data-quality checks over grouping keys.

use std::collections::BTreeMap;

/// Reports groups of keys that collide once case and inner whitespace are
/// ignored.
///
/// The aggregator never merges such keys: "Fire Dept" and "fire  dept" stay
/// distinct groups. This check surfaces them so curation staff can reconcile
/// the source data instead.
///
/// Each returned group holds at least two distinct original keys, sorted
/// ascending; groups are ordered by their shared canonical form.
#[must_use]
pub fn case_insensitive_collisions<'a, I>(keys: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut by_canonical: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for key in keys {
        let originals = by_canonical.entry(canonical(key)).or_default();
        if !originals.iter().any(|k| k == key) {
            originals.push(key.to_string());
        }
    }

    by_canonical
        .into_values()
        .filter(|originals| originals.len() > 1)
        .map(|mut originals| {
            originals.sort();
            originals
        })
        .collect()
}

/// Collapses inner whitespace runs and lowercases ASCII.
fn canonical(key: &str) -> String {
    key.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}
