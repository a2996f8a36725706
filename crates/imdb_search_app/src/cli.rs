use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use engine_logging::LogDestination;
use imdb_search_core::{ScoreRange, SortOrder, TransformConfig};
use imdb_search_engine::{FetchSettings, SearchRequest};
use log::LevelFilter;

/// Extends the IMDb advanced title search with metascore filtering,
/// random picks and sorting.
#[derive(Parser, Debug)]
#[command(name = "imdb_ext_search", version)]
pub struct Cli {
    /// Full URL of the IMDb search request
    pub url: String,

    /// Exclude movies with a metascore outside of this range
    /// (repeating the flag keeps the last pair)
    #[arg(
        long,
        num_args = 2,
        value_names = ["MIN", "MAX"],
        allow_negative_numbers = true
    )]
    pub metascore: Option<Vec<i32>>,

    /// Sort the movie list by metascore
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Number of movies to pick at random (with replacement) from the list;
    /// 0 keeps the list as is, negative values are rejected
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,

    /// Export the movie list to this CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Give up on the request after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Give up connecting after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    pub connect_timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}

impl Cli {
    pub fn search_request(&self) -> SearchRequest {
        SearchRequest {
            url: self.url.clone(),
            transform: self.transform_config(),
            csv_path: self.csv.clone(),
        }
    }

    pub fn transform_config(&self) -> TransformConfig {
        TransformConfig {
            score_range: self
                .metascore
                .as_deref()
                .and_then(|bounds| bounds.chunks_exact(2).last())
                .map(|pair| ScoreRange::new(pair[0], pair[1])),
            sample_count: self.random,
            sort_order: self.sort.map(SortOrder::from),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: self.connect_timeout.map(Duration::from_secs),
            request_timeout: self.timeout.map(Duration::from_secs),
            ..FetchSettings::default()
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(path) => LogDestination::Both(path.clone()),
            None => LogDestination::Terminal,
        }
    }
}
