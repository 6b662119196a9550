//! Weighted frequency accumulator.

use std::collections::HashMap;

/// One bucket of a [`FrequencyMap`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    /// Normalized grouping key
    pub key: String,
    /// Display value of the first insertion
    pub display: String,
    pub weight: u32,
}

/// Normalized key → (display value, accumulated weight), in insertion order.
///
/// Callers normalize keys before inserting, so variants of one value share a
/// bucket. Ranking is stable: equal weights keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    buckets: Vec<Bucket>,
    index: HashMap<String, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `weight` to the bucket for `key`, creating it with `display` if new.
    pub fn add(&mut self, key: &str, display: &str, weight: u32) {
        match self.index.get(key) {
            Some(&i) => self.buckets[i].weight += weight,
            None => {
                self.index.insert(key.to_string(), self.buckets.len());
                self.buckets.push(Bucket {
                    key: key.to_string(),
                    display: display.to_string(),
                    weight,
                });
            }
        }
    }

    pub fn weight(&self, key: &str) -> u32 {
        self.index
            .get(key)
            .map(|&i| self.buckets[i].weight)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Top `limit` buckets by raw weight.
    pub fn top(&self, limit: usize) -> Vec<Bucket> {
        self.top_by(limit, |b| b.weight)
    }

    /// Top `limit` buckets ordered by `rank`, highest first.
    pub fn top_by<F>(&self, limit: usize, rank: F) -> Vec<Bucket>
    where
        F: Fn(&Bucket) -> u32,
    {
        let mut ranked: Vec<&Bucket> = self.buckets.iter().collect();
        ranked.sort_by_key(|b| std::cmp::Reverse(rank(b)));
        ranked.into_iter().take(limit).cloned().collect()
    }
}
