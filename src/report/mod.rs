// src/report/mod.rs
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::listing::models::{KeywordSet, ScholarshipRecord};
use crate::utils::error::ReportError;

pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    /// Creates a writer targeting the given report path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Writes the ordered records to the report file, replacing any previous
    /// contents. Each record occupies four lines: name, deadline, URL, and a
    /// blank separator line.
    pub fn write_report(&self, records: &[ScholarshipRecord]) -> Result<PathBuf, ReportError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ReportError::Io)?;
            }
        }

        let mut file = fs::File::create(&self.path).map_err(ReportError::Io)?;
        for record in records {
            writeln!(file, "Name: {}", record.name).map_err(ReportError::Io)?;
            writeln!(file, "Deadline: {}", record.deadline).map_err(ReportError::Io)?;
            writeln!(file, "URL: {}", record.url).map_err(ReportError::Io)?;
            writeln!(file).map_err(ReportError::Io)?;
        }

        tracing::info!("Saved {} scholarships to {}", records.len(), self.path.display());

        Ok(self.path.clone())
    }

    /// Writes a JSON sidecar next to the report describing the run: the
    /// keywords used, the record count, an extraction timestamp, and the
    /// records themselves.
    pub fn write_metadata(
        &self,
        records: &[ScholarshipRecord],
        keywords: &KeywordSet,
    ) -> Result<PathBuf, ReportError> {
        let mut file_path = self.path.clone();
        let mut file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "scholarships.txt".to_string());
        file_name.push_str(".meta.json");
        file_path.set_file_name(file_name);

        let metadata = serde_json::json!({
            "keywords": keywords.as_slice(),
            "record_count": records.len(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
            "records": records,
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| ReportError::Serialization(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(ReportError::Io)?;

        tracing::info!("Saved run metadata to {}", file_path.display());

        Ok(file_path)
    }
}
