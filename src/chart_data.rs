//! Chart data preprocessing.
//!
//! The trend endpoints return sparse age→count buckets with values that may
//! be JSON numbers or numeric strings. This module turns them into the dense,
//! range-filtered series the charts consume and keeps that logic free of any
//! DOM or network dependency.

use serde_json::Value;

use crate::api_client::trends::{AgeCountRow, GenderAgeRow};

/// Upper bound of the age axis; buckets cover ages `1..=MAX_AGE`.
pub const MAX_AGE: usize = 100;

/// Parse a backend value as an integer. Accepts JSON numbers and trimmed
/// numeric strings; fractional values truncate toward zero.
fn value_as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
        }
        _ => None,
    }
}

/// Parse a backend value as a float, mirroring the integer rules.
fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Build a dense counts array of length [`MAX_AGE`] (index = age - 1).
///
/// Rows whose age is non-numeric or outside `1..=MAX_AGE`, or whose count is
/// non-numeric, are skipped and the slot keeps its current value (zero unless
/// an earlier row wrote it). When several rows carry the same age, the last
/// row wins; counts are never accumulated.
pub fn dense_counts(rows: &[GenderAgeRow]) -> Vec<i64> {
    let mut counts = vec![0i64; MAX_AGE];
    for row in rows {
        let Some(age) = value_as_int(&row.age) else {
            continue;
        };
        if !(1..=MAX_AGE as i64).contains(&age) {
            continue;
        }
        let Some(count) = value_as_int(&row.count) else {
            continue;
        };
        counts[(age - 1) as usize] = count;
    }
    counts
}

/// Map line-series rows to `(ages, counts)` point coordinates, dropping any
/// row where either side fails numeric parsing.
pub fn line_points(rows: &[AgeCountRow]) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::with_capacity(rows.len());
    let mut ys = Vec::with_capacity(rows.len());
    for row in rows {
        if let (Some(x), Some(y)) = (value_as_f64(&row.age), value_as_f64(&row.count)) {
            xs.push(x);
            ys.push(y);
        }
    }
    (xs, ys)
}

/// Inclusive age range selected by the bar chart sliders.
///
/// The two bounds are linked: moving one clamps against the other, so
/// `1 <= min <= max <= MAX_AGE` holds after any sequence of updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    min: usize,
    max: usize,
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 1, max: MAX_AGE }
    }
}

impl AgeRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of ages covered by the range.
    pub fn span(&self) -> usize {
        self.max - self.min + 1
    }

    /// Set the lower bound, clamped into `[1, max]`.
    pub fn set_min(&mut self, value: i64) {
        self.min = value.clamp(1, self.max as i64) as usize;
    }

    /// Set the upper bound, clamped into `[min, MAX_AGE]`.
    pub fn set_max(&mut self, value: i64) {
        self.max = value.clamp(self.min as i64, MAX_AGE as i64) as usize;
    }

    /// Age labels covered by the range, in order.
    pub fn labels(&self) -> Vec<usize> {
        (self.min..=self.max).collect()
    }

    /// Slice a dense counts array down to the selected range (inclusive).
    ///
    /// `counts` must hold at least `max` entries, i.e. come from
    /// [`dense_counts`] or be otherwise [`MAX_AGE`]-long; shorter input
    /// panics.
    pub fn clip<'a>(&self, counts: &'a [i64]) -> &'a [i64] {
        debug_assert!(
            counts.len() >= self.max,
            "counts has {} entries, range needs {}",
            counts.len(),
            self.max
        );
        &counts[self.min - 1..=self.max - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gender_rows(rows: Value) -> Vec<GenderAgeRow> {
        serde_json::from_value(rows).unwrap()
    }

    fn age_rows(rows: Value) -> Vec<AgeCountRow> {
        serde_json::from_value(rows).unwrap()
    }

    #[test]
    fn dense_counts_is_always_full_length() {
        assert_eq!(dense_counts(&[]).len(), MAX_AGE);

        let rows = gender_rows(json!([{"age": 40, "number_male": 3}]));
        assert_eq!(dense_counts(&rows).len(), MAX_AGE);
    }

    #[test]
    fn dense_counts_places_count_at_age_minus_one() {
        let rows = gender_rows(json!([
            {"age": 1, "number_male": 2},
            {"age": 100, "number_male": 9},
        ]));
        let counts = dense_counts(&rows);
        assert_eq!(counts[0], 2);
        assert_eq!(counts[99], 9);
        assert_eq!(counts.iter().filter(|&&c| c != 0).count(), 2);
    }

    #[test]
    fn string_age_and_count_are_parsed() {
        // The documented scenario: age "5" / count "12" lands in bucket 4.
        let rows = gender_rows(json!([{"age": "5", "number_male": "12"}]));
        let counts = dense_counts(&rows);
        assert_eq!(counts[4], 12);
        assert!(counts.iter().enumerate().all(|(i, &c)| i == 4 || c == 0));

        let mut range = AgeRange::new();
        range.set_min(1);
        range.set_max(10);
        assert_eq!(range.clip(&counts).len(), 10);
        assert_eq!(range.clip(&counts)[4], 12);
    }

    #[test]
    fn out_of_range_or_malformed_ages_are_dropped() {
        let rows = gender_rows(json!([
            {"age": 0, "number_male": 5},
            {"age": 101, "number_male": 5},
            {"age": -3, "number_male": 5},
            {"age": "abc", "number_male": 5},
            {"age": null, "number_male": 5},
            {"number_male": 5},
        ]));
        assert!(dense_counts(&rows).iter().all(|&c| c == 0));
    }

    #[test]
    fn malformed_count_skips_the_write() {
        let rows = gender_rows(json!([
            {"age": 7, "number_male": 4},
            {"age": 7, "number_male": "not a number"},
        ]));
        // The bad row is skipped entirely rather than clearing the slot.
        assert_eq!(dense_counts(&rows)[6], 4);
    }

    #[test]
    fn duplicate_ages_last_write_wins() {
        let rows = gender_rows(json!([
            {"age": 30, "number_male": 2},
            {"age": 30, "number_male": 8},
        ]));
        assert_eq!(dense_counts(&rows)[29], 8);
    }

    #[test]
    fn fractional_values_truncate() {
        let rows = gender_rows(json!([{"age": "5.9", "number_male": 12.7}]));
        assert_eq!(dense_counts(&rows)[4], 12);
    }

    #[test]
    fn range_starts_full_and_clips_inclusively() {
        let range = AgeRange::new();
        assert_eq!((range.min(), range.max()), (1, MAX_AGE));

        let counts = vec![0i64; MAX_AGE];
        assert_eq!(range.clip(&counts).len(), MAX_AGE);
        assert_eq!(range.labels().first(), Some(&1));
        assert_eq!(range.labels().last(), Some(&MAX_AGE));
    }

    #[test]
    fn clip_length_matches_span() {
        let counts = vec![0i64; MAX_AGE];
        let mut range = AgeRange::new();
        range.set_min(20);
        range.set_max(35);
        assert_eq!(range.span(), 16);
        assert_eq!(range.clip(&counts).len(), 16);
        assert_eq!(range.labels(), (20..=35).collect::<Vec<_>>());
    }

    #[test]
    fn range_invariant_holds_under_any_sequence() {
        let mut range = AgeRange::new();
        let updates: [(bool, i64); 10] = [
            (true, 50),
            (false, 20),
            (true, 80),
            (false, 200),
            (true, -5),
            (false, 0),
            (true, 100),
            (false, 1),
            (true, 62),
            (false, 61),
        ];
        for (is_min, value) in updates {
            if is_min {
                range.set_min(value);
            } else {
                range.set_max(value);
            }
            assert!(1 <= range.min(), "min fell below 1: {:?}", range);
            assert!(range.min() <= range.max(), "bounds crossed: {:?}", range);
            assert!(range.max() <= MAX_AGE, "max above cap: {:?}", range);
        }
    }

    #[test]
    #[should_panic(expected = "entries")]
    fn clip_rejects_counts_shorter_than_the_range() {
        let range = AgeRange::new();
        let short = vec![0i64; MAX_AGE / 2];
        range.clip(&short);
    }

    #[test]
    fn min_clamps_to_max_and_max_clamps_to_min() {
        let mut range = AgeRange::new();
        range.set_max(40);
        range.set_min(70);
        assert_eq!(range.min(), 40);

        range.set_max(10);
        assert_eq!(range.max(), 40);
    }

    #[test]
    fn line_points_keeps_parseable_pairs_only() {
        let rows = age_rows(json!([
            {"_id": 20, "number_vaccinated": 5},
            {"_id": "21", "number_vaccinated": "6"},
            {"_id": "abc", "number_vaccinated": 5},
            {"_id": 22, "number_vaccinated": "n/a"},
        ]));
        let (xs, ys) = line_points(&rows);
        assert_eq!(xs, vec![20.0, 21.0]);
        assert_eq!(ys, vec![5.0, 6.0]);
    }

    #[test]
    fn line_points_of_unparseable_series_is_empty() {
        let rows = age_rows(json!([{"_id": "abc", "number_vaccinated": 5}]));
        let (xs, ys) = line_points(&rows);
        assert!(xs.is_empty());
        assert!(ys.is_empty());
    }
}
