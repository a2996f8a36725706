//! Search engine: fetch, decode, extract, export and the run pipeline.
mod decode;
mod export;
mod extract;
mod fetch;
mod persist;
mod pipeline;
mod types;

pub use decode::{decode_body, DecodedPage};
pub use export::{export_csv, records_to_csv, ExportError, ExportSummary};
pub use extract::{AdvancedListExtractor, Extractor};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{run_search, PipelineError, RunOutcome, SearchRequest, DEFAULT_SEARCH_URL};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
