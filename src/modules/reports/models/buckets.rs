use rust_decimal::Decimal;
use std::collections::HashMap;

/// Partial accumulators that can be combined across shards
pub trait Merge {
    /// Fold `other` into `self`; `other` comes after `self` in encounter order
    fn merge(&mut self, other: Self);
}

impl Merge for Decimal {
    fn merge(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

/// Keyed accumulators iterated in the order keys were first seen.
///
/// Lookup never reorders entries, so output built from these buckets is
/// stable for identical input.
#[derive(Debug, Clone)]
pub struct OrderedBuckets<A> {
    index: HashMap<String, usize>,
    buckets: Vec<(String, A)>,
}

impl<A> Default for OrderedBuckets<A> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            buckets: Vec::new(),
        }
    }
}

impl<A: Default> OrderedBuckets<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator for `key`, created empty on first sight
    pub fn entry(&mut self, key: &str) -> &mut A {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                self.buckets.push((key.to_string(), A::default()));
                let position = self.buckets.len() - 1;
                self.index.insert(key.to_string(), position);
                position
            }
        };
        &mut self.buckets[position].1
    }
}

impl<A> OrderedBuckets<A> {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&A> {
        self.index.get(key).map(|&position| &self.buckets[position].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &A)> {
        self.buckets.iter().map(|(key, acc)| (key.as_str(), acc))
    }
}

impl<A: Default + Merge> OrderedBuckets<A> {
    /// Combine with a later shard. Keys new to `self` are appended in the
    /// order `other` first saw them.
    pub fn merge(&mut self, other: OrderedBuckets<A>) {
        for (key, acc) in other.buckets {
            self.entry(&key).merge(acc);
        }
    }
}

impl<A> IntoIterator for OrderedBuckets<A> {
    type Item = (String, A);
    type IntoIter = std::vec::IntoIter<(String, A)>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}
