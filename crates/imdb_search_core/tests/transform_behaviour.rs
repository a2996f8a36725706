use std::sync::Once;

use imdb_search_core::{
    filter_by_score, sample_with_replacement, sort_movies, transform, MovieRecord, ScoreRange,
    SortOrder, TransformConfig,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn movie(title: &str, score: Option<i32>) -> MovieRecord {
    MovieRecord::new(title, score, format!("https://www.imdb.com/title/{title}/"))
}

fn titles(records: &[MovieRecord]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}

fn seeded() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

#[test]
fn empty_input_with_no_options_is_empty() {
    init_logging();
    let out = transform(Vec::new(), &TransformConfig::default(), &mut seeded());
    assert_eq!(out, Vec::<MovieRecord>::new());
}

#[test]
fn no_options_is_pass_through() {
    init_logging();
    let records = vec![movie("A", Some(8)), movie("B", None), movie("C", Some(2))];
    let out = transform(records.clone(), &TransformConfig::default(), &mut seeded());
    assert_eq!(out, records);
}

#[test]
fn sort_ascending_puts_missing_scores_first() {
    let mut records = vec![movie("A", Some(8)), movie("B", None), movie("C", Some(2))];
    sort_movies(&mut records, SortOrder::Ascending);
    assert_eq!(titles(&records), vec!["B", "C", "A"]);
}

#[test]
fn sort_descending_still_puts_missing_scores_first() {
    let mut records = vec![movie("A", Some(8)), movie("B", None), movie("C", Some(2))];
    sort_movies(&mut records, SortOrder::Descending);
    assert_eq!(titles(&records), vec!["B", "A", "C"]);
}

#[test]
fn missing_scores_precede_any_magnitude() {
    let mut records = vec![
        movie("low", Some(-50)),
        movie("none1", None),
        movie("high", Some(100)),
        movie("none2", None),
    ];
    sort_movies(&mut records, SortOrder::Ascending);
    assert_eq!(titles(&records), vec!["none1", "none2", "low", "high"]);

    sort_movies(&mut records, SortOrder::Descending);
    assert_eq!(titles(&records), vec!["none1", "none2", "high", "low"]);
}

#[test]
fn sort_is_stable_for_equal_scores() {
    let mut records = vec![
        movie("first", Some(5)),
        movie("second", Some(5)),
        movie("third", Some(1)),
    ];
    sort_movies(&mut records, SortOrder::Descending);
    assert_eq!(titles(&records), vec!["first", "second", "third"]);

    sort_movies(&mut records, SortOrder::Ascending);
    assert_eq!(titles(&records), vec!["third", "first", "second"]);
}

#[test]
fn sorting_is_idempotent() {
    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let mut once = vec![
            movie("A", Some(70)),
            movie("B", None),
            movie("C", Some(12)),
            movie("D", Some(70)),
            movie("E", None),
        ];
        sort_movies(&mut once, order);
        let mut twice = once.clone();
        sort_movies(&mut twice, order);
        assert_eq!(once, twice);
    }
}

#[test]
fn filter_keeps_only_scores_within_bounds() {
    let records = vec![
        movie("A", Some(40)),
        movie("B", None),
        movie("C", Some(60)),
        movie("D", Some(61)),
    ];
    let out = filter_by_score(records, ScoreRange::new(40, 60));
    assert_eq!(titles(&out), vec!["A", "C"]);
}

#[test]
fn sampling_draws_exact_count_from_input() {
    let records = vec![movie("A", Some(1)), movie("B", None)];
    let sample = sample_with_replacement(&records, 25, &mut seeded());
    assert_eq!(sample.len(), 25);
    assert!(sample.iter().all(|r| records.contains(r)));
}

#[test]
fn sampling_single_record_repeats_it() {
    let records = vec![movie("only", Some(3))];
    let sample = sample_with_replacement(&records, 4, &mut seeded());
    assert_eq!(sample, vec![records[0].clone(); 4]);
}

#[test]
fn sampling_empty_input_is_empty() {
    let sample = sample_with_replacement(&[], 10, &mut seeded());
    assert!(sample.is_empty());
}

#[test]
fn zero_sample_count_skips_sampling() {
    let records = vec![movie("A", Some(1)), movie("B", Some(2))];
    let config = TransformConfig {
        sample_count: Some(0),
        ..TransformConfig::default()
    };
    let out = transform(records.clone(), &config, &mut seeded());
    assert_eq!(out, records);
}

#[test]
fn sampling_after_empty_filter_produces_nothing() {
    init_logging();
    let records = vec![movie("A", Some(10)), movie("B", None)];
    let config = TransformConfig {
        score_range: Some(ScoreRange::new(90, 100)),
        sample_count: Some(3),
        sort_order: Some(SortOrder::Ascending),
    };
    let out = transform(records, &config, &mut seeded());
    assert!(out.is_empty());
}

#[test]
fn steps_apply_filter_then_sample_then_sort() {
    init_logging();
    let records = vec![
        movie("A", Some(90)),
        movie("B", None),
        movie("C", Some(50)),
        movie("D", Some(10)),
    ];
    let config = TransformConfig {
        score_range: Some(ScoreRange::new(40, 100)),
        sample_count: Some(6),
        sort_order: Some(SortOrder::Descending),
    };
    let out = transform(records, &config, &mut seeded());

    assert_eq!(out.len(), 6);
    assert!(out.iter().all(|r| r.title == "A" || r.title == "C"));
    let scores: Vec<i32> = out.iter().filter_map(|r| r.score).collect();
    let mut expected = scores.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, expected);
}

#[test]
fn inverted_range_filters_everything_without_error() {
    let records = vec![movie("A", Some(50))];
    let config = TransformConfig {
        score_range: Some(ScoreRange::new(100, 0)),
        ..TransformConfig::default()
    };
    assert!(transform(records, &config, &mut seeded()).is_empty());
}
