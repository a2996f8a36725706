use std::path::{Path, PathBuf};

use engine_logging::engine_info;
use imdb_search_core::MovieRecord;

use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub row_count: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Serialise records as headerless `title,score,url` rows with CRLF line endings.
pub fn records_to_csv(records: &[MovieRecord]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

/// Write every record to `path`, replacing any existing file.
pub fn export_csv(records: &[MovieRecord], path: &Path) -> Result<ExportSummary, ExportError> {
    let content = records_to_csv(records)?;
    let output_path = AtomicFileWriter.write(path, &content)?;
    engine_info!("exported {} rows to {}", records.len(), output_path.display());
    Ok(ExportSummary {
        row_count: records.len(),
        output_path,
    })
}
