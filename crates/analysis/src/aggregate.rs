//! Sum classifications over partitions.

use crate::records::{ClassificationRecord, SummaryRecord};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Grouping key; floats are ordered with `total_cmp`.
#[derive(Debug, Clone, Copy)]
struct GroupKey {
    mu: f64,
    mya: f64,
    depth: f64,
    introgression_proportion: f64,
    og_time: u32,
}

impl GroupKey {
    fn of(record: &ClassificationRecord) -> Self {
        let k = &record.key;
        Self {
            mu: k.mu,
            mya: k.mya,
            depth: k.depth,
            introgression_proportion: k.introgression_proportion,
            og_time: k.og_time,
        }
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.mu
            .total_cmp(&other.mu)
            .then(self.mya.total_cmp(&other.mya))
            .then(self.depth.total_cmp(&other.depth))
            .then(self.introgression_proportion.total_cmp(&other.introgression_proportion))
            .then(self.og_time.cmp(&other.og_time))
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

/// Running per-key totals.
#[derive(Debug, Default)]
pub struct Summary {
    groups: BTreeMap<GroupKey, [u64; 4]>,
}

impl Summary {
    pub fn add(&mut self, record: &ClassificationRecord) {
        let counts = self.groups.entry(GroupKey::of(record)).or_default();
        counts[record.tree_type.index()] += 1;
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// One row per key, ascending by key.
    pub fn into_records(self) -> Vec<SummaryRecord> {
        self.groups
            .into_iter()
            .map(|(k, [t, h, w, s])| SummaryRecord {
                mu: k.mu,
                mya: k.mya,
                depth: k.depth,
                introgression_proportion: k.introgression_proportion,
                og_time: k.og_time,
                true_count: t,
                hybrid_count: h,
                wrong_count: w,
                star_count: s,
            })
            .collect()
    }
}

/// Group `records` by parameters and og_time and count each call.
pub fn summarize<'a>(
    records: impl IntoIterator<Item = &'a ClassificationRecord>,
) -> Vec<SummaryRecord> {
    let mut summary = Summary::default();
    for record in records {
        summary.add(record);
    }
    summary.into_records()
}
