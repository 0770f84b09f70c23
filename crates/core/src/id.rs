//! Character id space and random id selection.

use rand::Rng;

use crate::error::CoreError;

/// Lowest valid character id.
pub const MIN_CHARACTER_ID: i64 = 1;

/// Highest valid character id in the dataset.
pub const MAX_CHARACTER_ID: i64 = 826;

/// Inclusive range of character ids to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    min: i64,
    max: i64,
}

impl Default for IdRange {
    fn default() -> Self {
        Self {
            min: MIN_CHARACTER_ID,
            max: MAX_CHARACTER_ID,
        }
    }
}

impl IdRange {
    /// Build a range, rejecting non-positive lower bounds and inverted
    /// bounds.
    pub fn new(min: i64, max: i64) -> Result<Self, CoreError> {
        if min < MIN_CHARACTER_ID {
            return Err(CoreError::Validation(format!(
                "id range must start at {MIN_CHARACTER_ID} or above, got {min}"
            )));
        }
        if min > max {
            return Err(CoreError::Validation(format!(
                "id range is empty: {min} > {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, id: i64) -> bool {
        (self.min..=self.max).contains(&id)
    }

    /// Draw an id uniformly from the inclusive range.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.min..=self.max)
    }
}

/// Draw a random id from the full dataset using the thread-local RNG.
pub fn random_character_id() -> i64 {
    IdRange::default().pick(&mut rand::rng())
}
