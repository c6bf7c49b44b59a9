//! Enumeration of variable assignments
//!
//! Assignments come out in binary counting order with the first variable as
//! the most significant bit, so the first row is all-false and the last row is
//! all-true.

use crate::MAX_VARIABLES;
use std::iter::FusedIterator;

/// Iterator over all `2^n` assignment vectors for `n` variables
///
/// Rows are produced lazily; nothing is buffered.
///
/// # Examples
///
/// ```
/// use latex_truth_table::assignment::Assignments;
///
/// let rows: Vec<Vec<bool>> = Assignments::new(2).collect();
/// assert_eq!(
///     rows,
///     vec![
///         vec![false, false],
///         vec![false, true],
///         vec![true, false],
///         vec![true, true],
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Assignments {
    width: usize,
    next: u64,
    end: u64,
}

impl Assignments {
    /// Enumerate assignments for `width` variables
    ///
    /// # Panics
    ///
    /// Panics if `width` exceeds [`MAX_VARIABLES`]; there are only that many
    /// single-letter variable names.
    pub fn new(width: usize) -> Self {
        assert!(
            width <= MAX_VARIABLES,
            "{} variables requested, at most {} are supported",
            width,
            MAX_VARIABLES
        );
        Assignments {
            width,
            next: 0,
            end: 1u64 << width,
        }
    }

    /// Number of variables per assignment
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of assignments, `2^width`
    pub fn total(&self) -> u64 {
        1u64 << self.width
    }

    /// Assignment number `counter` in enumeration order
    fn assignment(&self, counter: u64) -> Vec<bool> {
        (0..self.width)
            .rev()
            .map(|bit| (counter >> bit) & 1 == 1)
            .collect()
    }
}

impl Iterator for Assignments {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let assignment = self.assignment(self.next);
        self.next += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

impl FusedIterator for Assignments {}

/// All `2^n` assignment vectors for `n` variables, collected
pub fn generate_combinations(n: usize) -> Vec<Vec<bool>> {
    Assignments::new(n).collect()
}
