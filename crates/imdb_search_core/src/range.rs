use crate::record::Score;

/// Inclusive score bounds. `min > max` is accepted and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange {
    pub min: Score,
    pub max: Score,
}

impl ScoreRange {
    pub fn new(min: Score, max: Score) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: Option<Score>) -> bool {
        in_range(value, self.min, self.max)
    }
}

/// True iff `value` is present and `min <= value <= max`.
pub fn in_range(value: Option<Score>, min: Score, max: Score) -> bool {
    matches!(value, Some(v) if min <= v && v <= max)
}
