//! Search core: movie records and the pure filter/sample/sort transformer.
mod range;
mod record;
mod transform;

pub use range::{in_range, ScoreRange};
pub use record::{MovieRecord, Score, IMDB_ORIGIN};
pub use transform::{
    filter_by_score, sample_with_replacement, sort_movies, transform, SortOrder, TransformConfig,
};
