use serde::Serialize;
use std::collections::HashMap;
use std::ops::AddAssign;

/// A labelled value in a ranking or distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked<T> {
    pub label: String,
    pub value: T,
}

impl<T> Ranked<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Ranked {
            label: label.into(),
            value,
        }
    }
}

/// Accumulates values per label, remembering the order in which labels
/// first appeared.
pub struct Tally<T> {
    index: HashMap<String, usize>,
    entries: Vec<Ranked<T>>,
}

impl<T> Tally<T>
where
    T: Copy + Default + Ord + AddAssign,
{
    pub fn new() -> Self {
        Tally {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, label: &str, amount: T) {
        let slot = match self.index.get(label) {
            Some(&slot) => slot,
            None => {
                self.entries.push(Ranked::new(label, T::default()));
                self.index.insert(label.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[slot].value += amount;
    }

    /// Entries in first-appearance order.
    pub fn into_entries(self) -> Vec<Ranked<T>> {
        self.entries
    }

    /// Entries sorted by value, highest first. `sort_by` is stable, so equal
    /// values keep first-appearance order.
    pub fn into_ranked(self) -> Vec<Ranked<T>> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.value.cmp(&a.value));
        entries
    }

    pub fn top(self, limit: usize) -> Vec<Ranked<T>> {
        let mut ranked = self.into_ranked();
        ranked.truncate(limit);
        ranked
    }
}

impl<T> Default for Tally<T>
where
    T: Copy + Default + Ord + AddAssign,
{
    fn default() -> Self {
        Self::new()
    }
}
