use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::configuration::IdPoolSettings;

/// Ids handed out to the first customers before any are generated.
pub const INITIAL_CUSTOMER_IDS: [i64; 6] = [892474, 643270, 286516, 412396, 456454, 651286];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdPoolError {
    #[error("Invalid id pool settings: {0}")]
    InvalidSettings(String),
    #[error("No unused id left in range {min}..{max}")]
    Exhausted { min: i64, max: i64 },
}

/// Dispenses unique ids, generating a new batch of random ids whenever
/// the pool runs dry.
///
/// Generated ids never collide with any id that was ever part of the
/// pool, so no id is dispensed twice.
#[derive(Debug)]
pub struct IdPool<R = StdRng> {
    ids: Vec<i64>,
    known: HashSet<i64>,
    cursor: usize,
    settings: IdPoolSettings,
    rng: R,
}

impl IdPool<StdRng> {
    /// Seeds the generator from `settings.seed`, or from entropy if unset.
    pub fn from_settings(initial: &[i64], settings: IdPoolSettings) -> Result<Self, IdPoolError> {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(initial, settings, rng)
    }
}

impl<R: Rng> IdPool<R> {
    pub fn with_rng(initial: &[i64], settings: IdPoolSettings, rng: R) -> Result<Self, IdPoolError> {
        settings.validate()?;

        let mut pool = Self {
            ids: Vec::with_capacity(initial.len()),
            known: HashSet::new(),
            cursor: 0,
            settings,
            rng,
        };
        for &id in initial {
            if id <= 0 {
                tracing::warn!(id, "Skipping non-positive initial id");
                continue;
            }
            if pool.known.insert(id) {
                pool.ids.push(id);
            }
        }

        Ok(pool)
    }

    /// Returns the next unused id, expanding the pool first if exhausted.
    pub fn next_id(&mut self) -> Result<i64, IdPoolError> {
        if self.cursor >= self.ids.len() {
            self.expand()?;
        }

        let id = self.ids[self.cursor];
        self.cursor += 1;
        Ok(id)
    }

    /// Number of ids ever added to the pool, dispensed or not.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of ids handed out so far.
    pub fn dispensed(&self) -> usize {
        self.cursor
    }

    fn expand(&mut self) -> Result<(), IdPoolError> {
        let IdPoolSettings {
            batch_size,
            min_id,
            max_id,
            ..
        } = self.settings;
        let range = min_id..max_id;

        let taken = self.known.iter().filter(|&id| range.contains(id)).count();
        let capacity = usize::try_from(max_id - min_id).unwrap_or(usize::MAX);
        let batch = batch_size.min(capacity.saturating_sub(taken));
        if batch == 0 {
            return Err(IdPoolError::Exhausted {
                min: min_id,
                max: max_id,
            });
        }

        let mut added = 0;
        while added < batch {
            let candidate = self.rng.gen_range(range.clone());
            if self.known.insert(candidate) {
                self.ids.push(candidate);
                added += 1;
            }
        }
        tracing::debug!(added, pool_size = self.ids.len(), "Expanded id pool");

        Ok(())
    }
}
