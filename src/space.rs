//! Ordered label spaces for states and actions.
//!
//! A [`Space`] fixes the set of identifiers a value table is indexed by and
//! the order in which they were supplied. The order matters: greedy action
//! selection breaks ties in favour of the action that came first.

use std::{collections::HashMap, fmt, hash::Hash};

use crate::error::{Error, Result};

/// Anything usable as a state or action identifier.
pub trait Label: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Label for T {}

/// Finite, ordered set of distinct labels with constant-time index lookup.
#[derive(Debug, Clone)]
pub struct Space<T: Label> {
    labels: Vec<T>,
    index: HashMap<T, usize>,
}

/// Space of state identifiers (table columns)
pub type StateSpace<S> = Space<S>;

/// Space of action identifiers (table rows)
pub type ActionSpace<A> = Space<A>;

impl<T: Label> Space<T> {
    /// Build a space from labels in the given order.
    ///
    /// `kind` names the space in error messages ("state", "action").
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `labels` is empty or
    /// contains the same label twice.
    pub fn new(kind: &str, labels: impl IntoIterator<Item = T>) -> Result<Self> {
        let labels: Vec<T> = labels.into_iter().collect();
        if labels.is_empty() {
            return Err(Error::invalid_configuration(format!(
                "{kind} space must not be empty"
            )));
        }

        let mut index = HashMap::with_capacity(labels.len());
        for (position, label) in labels.iter().enumerate() {
            if let Some(first) = index.insert(label.clone(), position) {
                return Err(Error::invalid_configuration(format!(
                    "duplicate {kind} {label:?} at positions {first} and {position}"
                )));
            }
        }

        Ok(Self { labels, index })
    }

    pub fn index_of(&self, label: &T) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.labels.get(index)
    }

    pub fn contains(&self, label: &T) -> bool {
        self.index.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a constructed space.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in construction order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.labels.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.labels
    }
}

impl<'a, T: Label> IntoIterator for &'a Space<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
