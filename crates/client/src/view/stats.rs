//! Summary statistics derived from the in-memory show list.

use watchme_core::show::Show;

/// Totals shown above the list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShowStats {
    pub total: usize,
    /// Shows whose status is `Finished` (including legacy "Completed").
    pub finished: usize,
    /// Mean rating rounded to one decimal; `0.0` for an empty list.
    pub average_rating: f64,
}

impl ShowStats {
    pub fn compute(shows: &[Show]) -> Self {
        let total = shows.len();
        if total == 0 {
            return Self::default();
        }

        let finished = shows.iter().filter(|s| s.status.is_finished()).count();
        let sum: i64 = shows.iter().map(|s| i64::from(s.rating)).sum();
        let mean = sum as f64 / total as f64;

        Self {
            total,
            finished,
            average_rating: (mean * 10.0).round() / 10.0,
        }
    }
}
