//! The FilterExecutor applies one predicate across all records.
//!
//! Records are selected by reference; nothing is copied or reordered.

use crate::predicate::Predicate;
use rayon::prelude::*;
use records::Property;

/// Collections at least this large are evaluated in parallel
pub const PARALLEL_THRESHOLD: usize = 10_000;

/// Applies a single predicate, optionally inverted.
///
/// ## Usage
/// ```ignore
/// let executor = FilterExecutor::new(Predicate::parse(PredicateKind::Rooms, &["4"])?, true);
/// let selected = executor.apply(&properties);
/// ```
#[derive(Debug, Clone)]
pub struct FilterExecutor {
    predicate: Predicate,
    exclude: bool,
}

impl FilterExecutor {
    /// Create a new FilterExecutor.
    ///
    /// # Arguments
    /// * `predicate` - The parsed predicate to evaluate
    /// * `exclude` - Keep the records the predicate rejects instead
    pub fn new(predicate: Predicate, exclude: bool) -> Self {
        Self { predicate, exclude }
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn exclude(&self) -> bool {
        self.exclude
    }

    /// Whether one record survives the filter
    pub fn keeps(&self, property: &Property) -> bool {
        self.predicate.matches(property) != self.exclude
    }

    /// Select the surviving records.
    ///
    /// ## Algorithm
    /// 1. Log predicate name and input count
    /// 2. Keep each record where `matches != exclude`, in input order
    /// 3. Log output count
    ///
    /// Large inputs go through rayon; `collect` keeps the original order, so
    /// the result is the same as the sequential pass.
    pub fn apply<'a>(&self, records: &'a [Property]) -> Vec<&'a Property> {
        tracing::debug!(
            "Applying filter: {} (exclude: {}, input count: {})",
            self.predicate.name(),
            self.exclude,
            records.len()
        );

        let selected: Vec<&Property> = if records.len() >= PARALLEL_THRESHOLD {
            records.par_iter().filter(|p| self.keeps(p)).collect()
        } else {
            records.iter().filter(|p| self.keeps(p)).collect()
        };

        tracing::debug!(
            "Filter applied: {} (output count: {})",
            self.predicate.name(),
            selected.len()
        );
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_property;
    use crate::predicate::PredicateKind;

    fn with_rooms(rooms: &[u64]) -> Vec<Property> {
        rooms
            .iter()
            .map(|&r| {
                let mut p = test_property();
                p.rooms = r;
                p
            })
            .collect()
    }

    fn rooms_of(selected: &[&Property]) -> Vec<u64> {
        selected.iter().map(|p| p.rooms).collect()
    }

    #[test]
    fn test_keeps_order_and_duplicates() {
        let records = with_rooms(&[5, 1, 4, 4, 2, 6]);
        let predicate = Predicate::parse(PredicateKind::Rooms, &["4"]).unwrap();

        let selected = FilterExecutor::new(predicate, false).apply(&records);
        assert_eq!(rooms_of(&selected), vec![5, 4, 4, 6]);
    }

    #[test]
    fn test_exclude_is_complement() {
        let records = with_rooms(&[5, 1, 4, 4, 2, 6]);
        let predicate = Predicate::parse(PredicateKind::Rooms, &["2", "4"]).unwrap();

        let kept = FilterExecutor::new(predicate.clone(), false).apply(&records);
        let dropped = FilterExecutor::new(predicate, true).apply(&records);

        assert_eq!(rooms_of(&kept), vec![4, 4, 2]);
        assert_eq!(rooms_of(&dropped), vec![5, 1, 6]);
        assert_eq!(kept.len() + dropped.len(), records.len());
    }

    #[test]
    fn test_selects_references_not_copies() {
        let records = with_rooms(&[1, 2]);
        let predicate = Predicate::parse(PredicateKind::Rooms, &["2"]).unwrap();

        let selected = FilterExecutor::new(predicate, false).apply(&records);
        assert!(std::ptr::eq(selected[0], &records[1]));
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let rooms: Vec<u64> = (0..PARALLEL_THRESHOLD as u64 + 17).map(|i| i % 7).collect();
        let records = with_rooms(&rooms);
        let executor =
            FilterExecutor::new(Predicate::parse(PredicateKind::Rooms, &["3", "5"]).unwrap(), false);

        let parallel = executor.apply(&records);
        let sequential: Vec<&Property> = records.iter().filter(|p| executor.keeps(p)).collect();

        assert_eq!(parallel.len(), sequential.len());
        assert!(parallel.iter().zip(&sequential).all(|(a, b)| std::ptr::eq(*a, *b)));
    }

    #[test]
    fn test_empty_input() {
        let executor =
            FilterExecutor::new(Predicate::parse(PredicateKind::Amenities, &["pool"]).unwrap(), true);
        assert!(executor.apply(&[]).is_empty());
    }
}
