use std::io::{self, Write};
use std::path::PathBuf;

use engine_logging::{engine_info, engine_warn};
use imdb_search_core::{transform, MovieRecord, TransformConfig};
use rand::Rng;

use crate::decode::decode_body;
use crate::export::{export_csv, ExportError};
use crate::extract::Extractor;
use crate::fetch::Fetcher;
use crate::FetchError;

/// Used when the request carries an empty URL.
pub const DEFAULT_SEARCH_URL: &str = "https://www.imdb.com/search/title";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub url: String,
    pub transform: TransformConfig,
    pub csv_path: Option<PathBuf>,
}

impl SearchRequest {
    pub fn target_url(&self) -> &str {
        if self.url.is_empty() {
            DEFAULT_SEARCH_URL
        } else {
            &self.url
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The page was fetched; these records were printed (and exported if requested).
    Completed { records: Vec<MovieRecord> },
    /// The server answered with something other than `200 OK`; nothing was printed or exported.
    Unsuccessful { status: u16 },
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("request failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// Fetch, extract, transform, then print each record to `out` and export if requested.
///
/// A non-200 response is not an error: a one-line notice is written to `out`
/// and the run ends with [`RunOutcome::Unsuccessful`].
pub async fn run_search<R: Rng + ?Sized>(
    fetcher: &dyn Fetcher,
    extractor: &dyn Extractor,
    request: &SearchRequest,
    out: &mut dyn Write,
    rng: &mut R,
) -> Result<RunOutcome, PipelineError> {
    let url = request.target_url();
    engine_info!("fetching {}", url);

    let fetched = match fetcher.fetch(url).await {
        Ok(fetched) => fetched,
        Err(err) => match err.http_status() {
            Some(status) => {
                engine_warn!("request to {} returned status {}", url, status);
                writeln!(out, "Request not successful (status code: {status})")?;
                return Ok(RunOutcome::Unsuccessful { status });
            }
            None => return Err(err.into()),
        },
    };

    let page = decode_body(&fetched.bytes, fetched.metadata.content_type.as_deref());
    if page.had_errors {
        engine_warn!("body of {} had malformed {} sequences", url, page.encoding_label);
    }

    let extracted = extractor.extract(&page.text);
    engine_info!(
        "extracted {} records from {} bytes ({})",
        extracted.len(),
        fetched.metadata.byte_len,
        page.encoding_label
    );

    let records = transform(extracted, &request.transform, rng);
    for record in &records {
        writeln!(out, "{record}")?;
    }

    if let Some(path) = request.csv_path.as_deref() {
        export_csv(&records, path)?;
    }

    Ok(RunOutcome::Completed { records })
}
