//! Bounded LRU memoization of simulator output. A hit draws no entropy.

use std::collections::{HashMap, VecDeque};

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{Result, SimulationError};

use super::brownian::simulate;
use super::params::{OutputMode, SimulationParameters};
use super::paths::PathMatrix;

pub const DEFAULT_CACHE_CAPACITY: usize = 32;

// floats keyed by bit pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    steps: usize,
    scenarios: usize,
    drift: u64,
    volatility: u64,
    initial_value: u64,
    mode: OutputMode,
}

impl CacheKey {
    fn new(params: &SimulationParameters, mode: OutputMode) -> Self {
        CacheKey {
            steps: params.steps(),
            scenarios: params.scenarios(),
            drift: params.drift().to_bits(),
            volatility: params.volatility().to_bits(),
            initial_value: params.initial_value().to_bits(),
            mode,
        }
    }
}

#[derive(Debug)]
pub struct PathCache {
    capacity: usize,
    entries: HashMap<CacheKey, PathMatrix>,
    // front = least recently used
    recency: VecDeque<CacheKey>,
}

impl PathCache {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SimulationError::invalid("capacity", "must be at least 1"));
        }
        Ok(PathCache {
            capacity,
            entries: HashMap::with_capacity(capacity),
            recency: VecDeque::with_capacity(capacity),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, params: &SimulationParameters, mode: OutputMode) -> bool {
        self.entries.contains_key(&CacheKey::new(params, mode))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    fn touch(&mut self, key: CacheKey) {
        if let Some(pos) = self.recency.iter().position(|k| *k == key) {
            self.recency.remove(pos);
        }
        self.recency.push_back(key);
    }

    /// Cached matrix for `params` and `mode`, simulated with `rng` on a miss.
    pub fn get_or_simulate<R: Rng>(
        &mut self,
        params: &SimulationParameters,
        mode: OutputMode,
        rng: &mut R,
    ) -> Result<&PathMatrix> {
        let key = CacheKey::new(params, mode);

        if self.entries.contains_key(&key) {
            trace!(?key, "path cache hit");
        } else {
            debug!(?key, "path cache miss");
            let paths = simulate(params, mode, rng)?;
            if self.entries.len() >= self.capacity {
                if let Some(evicted) = self.recency.pop_front() {
                    self.entries.remove(&evicted);
                    debug!(key = ?evicted, "path cache eviction");
                }
            }
            self.entries.insert(key, paths);
        }
        self.touch(key);

        Ok(&self.entries[&key])
    }
}

impl Default for PathCache {
    fn default() -> Self {
        PathCache {
            capacity: DEFAULT_CACHE_CAPACITY,
            entries: HashMap::with_capacity(DEFAULT_CACHE_CAPACITY),
            recency: VecDeque::with_capacity(DEFAULT_CACHE_CAPACITY),
        }
    }
}
