use std::cmp::Ordering;

use rand::Rng;

use crate::range::ScoreRange;
use crate::record::{MovieRecord, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Optional steps applied by [`transform`], always in the order filter, sample, sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformConfig {
    pub score_range: Option<ScoreRange>,
    pub sample_count: Option<usize>,
    pub sort_order: Option<SortOrder>,
}

/// Applies the configured filter, sample and sort steps; absent options are skipped.
pub fn transform<R: Rng + ?Sized>(
    mut records: Vec<MovieRecord>,
    config: &TransformConfig,
    rng: &mut R,
) -> Vec<MovieRecord> {
    if let Some(range) = config.score_range {
        records = filter_by_score(records, range);
    }

    if let Some(count) = config.sample_count.filter(|&n| n > 0) {
        if !records.is_empty() {
            records = sample_with_replacement(&records, count, rng);
        }
    }

    if let Some(order) = config.sort_order {
        sort_movies(&mut records, order);
    }
    records
}

pub fn filter_by_score(records: Vec<MovieRecord>, range: ScoreRange) -> Vec<MovieRecord> {
    records
        .into_iter()
        .filter(|record| range.contains(record.score))
        .collect()
}

/// Draws `count` records independently and uniformly, with replacement.
/// An empty input yields an empty output.
pub fn sample_with_replacement<R: Rng + ?Sized>(
    records: &[MovieRecord],
    count: usize,
    rng: &mut R,
) -> Vec<MovieRecord> {
    if records.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| records[rng.random_range(0..records.len())].clone())
        .collect()
}

/// Stable sort by score. Records without a score come first in both directions.
pub fn sort_movies(records: &mut [MovieRecord], order: SortOrder) {
    records.sort_by(|a, b| compare_scores(a.score, b.score, order));
}

fn compare_scores(a: Option<Score>, b: Option<Score>, order: SortOrder) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => match order {
            SortOrder::Ascending => x.cmp(&y),
            SortOrder::Descending => y.cmp(&x),
        },
    }
}
