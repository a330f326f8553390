//! The sequence of magnitudes being sorted

use crate::error::ConfigError;
use rand::Rng;
use rustc_hash::FxHashMap;

/// Magnitudes are drawn from `0..MAX_MAGNITUDE`; also the full bar height
pub const MAX_MAGNITUDE: u32 = 500;

/// Smallest element count accepted from the user
pub const MIN_ELEMENTS: usize = 10;

/// Largest element count accepted from the user
pub const MAX_ELEMENTS: usize = 1000;

/// Number of bars to generate, always within `MIN_ELEMENTS..=MAX_ELEMENTS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementCount(usize);

impl ElementCount {
    /// Validate a user-supplied count
    pub fn new(count: usize) -> Result<Self, ConfigError> {
        if (MIN_ELEMENTS..=MAX_ELEMENTS).contains(&count) {
            Ok(ElementCount(count))
        } else {
            Err(ConfigError::ElementCount(count))
        }
    }

    /// Clamp any count into the accepted range
    pub fn saturating(count: usize) -> Self {
        ElementCount(count.clamp(MIN_ELEMENTS, MAX_ELEMENTS))
    }

    /// Shift the count by `delta`, staying in range
    pub fn adjust(self, delta: isize) -> Self {
        Self::saturating(self.0.saturating_add_signed(delta))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for ElementCount {
    fn default() -> Self {
        ElementCount(200)
    }
}

/// Ordered sequence of non-negative magnitudes, rendered one bar per element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<u32>,
}

impl Dataset {
    /// Fill a new dataset with `count` random magnitudes in `0..MAX_MAGNITUDE`
    pub fn generate<R: Rng>(count: ElementCount, rng: &mut R) -> Self {
        let values = (0..count.get())
            .map(|_| rng.random_range(0..MAX_MAGNITUDE))
            .collect();
        Dataset { values }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Mutable view for a driver sorting in place
    pub fn values_mut(&mut self) -> &mut [u32] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace the contents wholesale (used when a finished run is written back)
    pub fn replace(&mut self, values: Vec<u32>) {
        self.values = values;
    }

    /// Non-decreasing order check
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// True if both datasets hold the same multiset of magnitudes
    pub fn is_permutation_of(&self, other: &[u32]) -> bool {
        if self.values.len() != other.len() {
            return false;
        }
        let mut counts: FxHashMap<u32, isize> = FxHashMap::default();
        for &v in &self.values {
            *counts.entry(v).or_default() += 1;
        }
        for &v in other {
            *counts.entry(v).or_default() -= 1;
        }
        counts.values().all(|&c| c == 0)
    }

    pub fn into_values(self) -> Vec<u32> {
        self.values
    }
}

impl From<Vec<u32>> for Dataset {
    fn from(values: Vec<u32>) -> Self {
        Dataset { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_element_count_bounds() {
        assert!(ElementCount::new(9).is_err());
        assert!(ElementCount::new(1001).is_err());
        assert_eq!(ElementCount::new(10).unwrap().get(), 10);
        assert_eq!(ElementCount::new(1000).unwrap().get(), 1000);
    }

    #[test]
    fn test_element_count_adjust_saturates() {
        let count = ElementCount::new(15).unwrap();
        assert_eq!(count.adjust(-10).get(), MIN_ELEMENTS);
        assert_eq!(count.adjust(5000).get(), MAX_ELEMENTS);
        assert_eq!(count.adjust(10).get(), 25);
    }

    #[test]
    fn test_generate_respects_count_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let dataset = Dataset::generate(ElementCount::new(300).unwrap(), &mut rng);

        assert_eq!(dataset.len(), 300);
        assert!(dataset.values().iter().all(|&v| v < MAX_MAGNITUDE));
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let count = ElementCount::default();
        let a = Dataset::generate(count, &mut StdRng::seed_from_u64(99));
        let b = Dataset::generate(count, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_permutation_check() {
        let dataset = Dataset::from(vec![3, 1, 3, 2]);
        assert!(dataset.is_permutation_of(&[1, 2, 3, 3]));
        assert!(!dataset.is_permutation_of(&[1, 2, 2, 3]));
        assert!(!dataset.is_permutation_of(&[1, 2, 3]));
    }
}
