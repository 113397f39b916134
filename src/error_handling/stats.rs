//! Processing statistics tracking.
//!
//! Counters are created for every variant up front and only ever incremented,
//! so workers and sinks share one instance through an `Arc` without locking.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType};

/// One atomic counter per variant of `K`.
#[derive(Debug)]
struct Counters<K>(HashMap<K, AtomicUsize>);

impl<K> Counters<K>
where
    K: IntoEnumIterator + Copy + Eq + Hash + Debug,
{
    fn zeroed() -> Self {
        Self(K::iter().map(|key| (key, AtomicUsize::new(0))).collect())
    }

    fn add(&self, key: K, n: usize) {
        match self.0.get(&key) {
            Some(counter) => {
                counter.fetch_add(n, Ordering::Relaxed);
            }
            None => log::error!("No counter registered for {key:?}"),
        }
    }

    fn get(&self, key: K) -> usize {
        self.0
            .get(&key)
            .map_or(0, |counter| counter.load(Ordering::SeqCst))
    }

    fn total(&self) -> usize {
        self.0
            .values()
            .map(|counter| counter.load(Ordering::SeqCst))
            .sum()
    }
}

/// Failure categories and informational events counted during a run.
///
/// - **Errors**: probes reported as diagnostics, by [`ErrorType`]
/// - **Info**: followed hops and policy stops, by [`InfoType`]
#[derive(Debug)]
pub struct ProcessingStats {
    errors: Counters<ErrorType>,
    info: Counters<InfoType>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        Self {
            errors: Counters::zeroed(),
            info: Counters::zeroed(),
        }
    }

    /// Counts one failed probe.
    pub fn increment_error(&self, error: ErrorType) {
        self.errors.add(error, 1);
    }

    /// Counts one informational event.
    pub fn increment_info(&self, info_type: InfoType) {
        self.info.add(info_type, 1);
    }

    /// Adds `n` events at once, e.g. all hops of one redirect chain.
    pub fn add_info(&self, info_type: InfoType, n: usize) {
        self.info.add(info_type, n);
    }

    /// Failed probes in one category.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(error)
    }

    /// Events of one kind.
    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info.get(info_type)
    }

    /// Failed probes across all categories.
    pub fn total_errors(&self) -> usize {
        self.errors.total()
    }

    /// Events across all kinds.
    pub fn total_info(&self) -> usize {
        self.info.total()
    }
}
