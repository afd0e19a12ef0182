//! Per-session summary cache.
//!
//! Re-uploading the same document must not discard the user's edits to the
//! summary table, so the table is only rebuilt when the document's
//! fingerprint or the selected staff category changes.

use tracing::debug;

use crate::config::{ConfigLoader, StaffCategory};
use crate::error::{ExportError, ExtractionError};
use crate::export::{AttendanceTable, SUMMARY_FILE_STEM, SummaryTable, TableRenderer};
use crate::extraction::process_document;
use crate::fingerprint::fingerprint;
use crate::models::{ExtractionOutcome, SummaryRecord};
use crate::source::TextSource;
use crate::summary::build_summary_with_nature;

#[derive(Debug, Clone)]
struct CacheEntry {
    fingerprint: String,
    category: StaffCategory,
    outcome: ExtractionOutcome,
    table: SummaryTable,
}

/// Holds the most recent document's extraction and its editable summary.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::{ConfigLoader, StaffCategory};
/// use timesheet_engine::session::SummaryCache;
/// use timesheet_engine::source::PlainTextSource;
///
/// let mut cache = SummaryCache::new(ConfigLoader::default());
/// let bytes = b"Employee Name : Asha Rao\n16/06/2025\nMon\n09:00\n18:30\n";
///
/// let table = cache.refresh(bytes, &PlainTextSource, StaffCategory::Male)?;
/// assert_eq!(table.len(), 1);
///
/// cache.delete_row(0)?;
/// // Same document: the edit survives.
/// let table = cache.refresh(bytes, &PlainTextSource, StaffCategory::Male)?;
/// assert!(table.is_empty());
/// # Ok::<(), timesheet_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SummaryCache {
    config: ConfigLoader,
    entry: Option<CacheEntry>,
}

impl SummaryCache {
    /// Creates an empty cache using `config` for standards and layout.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config,
            entry: None,
        }
    }

    /// Returns the summary table for `bytes`, extracting only when the
    /// document or category differs from the cached one.
    ///
    /// On error the previous entry is kept.
    pub fn refresh(
        &mut self,
        bytes: &[u8],
        source: &dyn TextSource,
        category: StaffCategory,
    ) -> Result<&SummaryTable, ExtractionError> {
        let digest = fingerprint(bytes);

        let entry = match self.entry.take() {
            Some(entry) if entry.fingerprint == digest && entry.category == category => {
                debug!(fingerprint = %digest, %category, "Summary cache hit");
                entry
            }
            previous => {
                debug!(fingerprint = %digest, %category, "Summary cache miss, extracting");
                let policy = self.config.policy(category);
                let outcome =
                    match process_document(bytes, source, &policy, self.config.layout()) {
                        Ok(outcome) => outcome,
                        Err(err) => {
                            self.entry = previous;
                            return Err(err);
                        }
                    };
                let summary = build_summary_with_nature(
                    &outcome.employee,
                    outcome.aggregate.total_extra_seconds,
                    outcome.aggregate.absent_count,
                    self.config.work_nature(),
                );

                CacheEntry {
                    fingerprint: digest,
                    category,
                    outcome,
                    table: SummaryTable::from_record(summary),
                }
            }
        };

        Ok(&self.entry.insert(entry).table)
    }

    /// The cached summary table, if a document has been processed.
    pub fn table(&self) -> Option<&SummaryTable> {
        self.entry.as_ref().map(|e| &e.table)
    }

    /// The cached extraction, if a document has been processed.
    pub fn outcome(&self) -> Option<&ExtractionOutcome> {
        self.entry.as_ref().map(|e| &e.outcome)
    }

    /// Per-day detail of the cached document.
    pub fn attendance_table(&self) -> Option<AttendanceTable> {
        self.outcome()
            .map(|o| AttendanceTable::from_records(o.records.clone()))
    }

    /// Fingerprint of the cached document.
    pub fn fingerprint(&self) -> Option<&str> {
        self.entry.as_ref().map(|e| e.fingerprint.as_str())
    }

    /// Deletes a row from the cached summary table.
    ///
    /// With nothing cached, every index is out of range.
    pub fn delete_row(&mut self, index: usize) -> Result<SummaryRecord, ExportError> {
        match self.entry.as_mut() {
            Some(entry) => entry.table.delete_row(index),
            None => Err(ExportError::RowOutOfRange { index, len: 0 }),
        }
    }

    /// Renders the cached summary table for download.
    ///
    /// Returns the file name (`CoE_Summary.<ext>`) and the rendered bytes.
    /// With nothing cached, only the header row is rendered.
    pub fn export_summary(
        &self,
        renderer: &dyn TableRenderer,
    ) -> Result<(String, Vec<u8>), ExportError> {
        let empty = SummaryTable::new();
        let table = self.table().unwrap_or(&empty);
        let bytes = renderer.render(table)?;
        let file_name = format!("{SUMMARY_FILE_STEM}.{}", renderer.extension());
        debug!(file_name, rows = table.len(), "Exported summary table");
        Ok((file_name, bytes))
    }

    /// Drops the cached entry so the next refresh extracts again.
    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            debug!("Summary cache invalidated");
        }
    }
}

impl Default for SummaryCache {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PlainTextSource;
    use std::cell::Cell;

    const DOCUMENT: &[u8] = b"Employee Name : Asha Rao\nEmployee Code : E1042\n\
16/06/2025\nMon\n09:00\n18:30\n";

    /// Counts how often the document is actually read.
    struct CountingSource {
        calls: Cell<usize>,
    }

    impl CountingSource {
        fn new() -> Self {
            Self { calls: Cell::new(0) }
        }
    }

    impl TextSource for CountingSource {
        fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
            self.calls.set(self.calls.get() + 1);
            PlainTextSource.extract_pages(bytes)
        }
    }

    #[test]
    fn test_first_refresh_builds_summary() {
        let mut cache = SummaryCache::default();
        let table = cache
            .refresh(DOCUMENT, &PlainTextSource, StaffCategory::Male)
            .unwrap();

        let record = &table.records()[0];
        assert_eq!(record.label, "Asha Rao - E1042");
        assert_eq!(record.extra_hours_formatted, "00:20");
        assert_eq!(record.work_nature, "CoE Work");
        assert_eq!(record.remarks, "0 Absent Days");
        assert_eq!(cache.fingerprint(), Some(fingerprint(DOCUMENT).as_str()));
    }

    #[test]
    fn test_same_document_is_not_reextracted() {
        let source = CountingSource::new();
        let mut cache = SummaryCache::default();

        cache.refresh(DOCUMENT, &source, StaffCategory::Male).unwrap();
        cache.refresh(DOCUMENT, &source, StaffCategory::Male).unwrap();
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_deleted_row_survives_same_upload() {
        let mut cache = SummaryCache::default();
        cache
            .refresh(DOCUMENT, &PlainTextSource, StaffCategory::Male)
            .unwrap();

        let removed = cache.delete_row(0).unwrap();
        assert_eq!(removed.label, "Asha Rao - E1042");

        let table = cache
            .refresh(DOCUMENT, &PlainTextSource, StaffCategory::Male)
            .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_new_document_replaces_table() {
        let mut cache = SummaryCache::default();
        cache
            .refresh(DOCUMENT, &PlainTextSource, StaffCategory::Male)
            .unwrap();
        cache.delete_row(0).unwrap();

        let other = b"Employee Name : Ravi K\n17/06/2025\nTue\nAB\n";
        let table = cache
            .refresh(other, &PlainTextSource, StaffCategory::Male)
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].label, "Ravi K - ");
        assert_eq!(table.records()[0].remarks, "1 Absent Days");
    }

    #[test]
    fn test_category_change_recomputes() {
        let source = CountingSource::new();
        let mut cache = SummaryCache::default();

        cache.refresh(DOCUMENT, &source, StaffCategory::Male).unwrap();
        let table = cache
            .refresh(DOCUMENT, &source, StaffCategory::Female)
            .unwrap();

        // 9h30 worked against 8h25.
        assert_eq!(table.records()[0].extra_hours_formatted, "01:05");
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_entry() {
        let mut cache = SummaryCache::default();
        cache
            .refresh(DOCUMENT, &PlainTextSource, StaffCategory::Male)
            .unwrap();

        let err = cache
            .refresh(b"", &PlainTextSource, StaffCategory::Male)
            .unwrap_err();
        assert_eq!(err, ExtractionError::EmptyDocument);
        assert_eq!(cache.table().map(SummaryTable::len), Some(1));
    }

    #[test]
    fn test_invalidate_forces_extraction() {
        let source = CountingSource::new();
        let mut cache = SummaryCache::default();

        cache.refresh(DOCUMENT, &source, StaffCategory::Male).unwrap();
        cache.invalidate();
        assert!(cache.table().is_none());

        cache.refresh(DOCUMENT, &source, StaffCategory::Male).unwrap();
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn test_export_summary_names_file_by_format() {
        use crate::export::{CsvRenderer, JsonRenderer};

        let mut cache = SummaryCache::default();
        cache
            .refresh(DOCUMENT, &PlainTextSource, StaffCategory::Male)
            .unwrap();

        let (name, bytes) = cache.export_summary(&CsvRenderer::new()).unwrap();
        assert_eq!(name, "CoE_Summary.csv");
        assert!(String::from_utf8(bytes).unwrap().contains("Asha Rao - E1042,00:20"));

        let (name, _) = cache.export_summary(&JsonRenderer::new()).unwrap();
        assert_eq!(name, "CoE_Summary.json");
    }

    #[test]
    fn test_export_summary_without_entry_has_headers_only() {
        let cache = SummaryCache::default();
        let (_, bytes) = cache
            .export_summary(&crate::export::CsvRenderer::new())
            .unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "CoE Faculty Name,Extra working hours,Work Nature,Remarks\n"
        );
    }

    #[test]
    fn test_delete_row_without_entry() {
        let mut cache = SummaryCache::default();
        assert_eq!(
            cache.delete_row(0),
            Err(ExportError::RowOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_attendance_table_from_cache() {
        let mut cache = SummaryCache::default();
        assert!(cache.attendance_table().is_none());

        cache
            .refresh(DOCUMENT, &PlainTextSource, StaffCategory::Male)
            .unwrap();
        let table = cache.attendance_table().unwrap();
        assert_eq!(table.records().len(), 1);
    }

    #[test]
    fn test_configured_work_nature() {
        let config = ConfigLoader::from_yaml(
            "standards:\n  male: \"09:10\"\n  female: \"08:25\"\n  saturday: \"07:10\"\n\
             summary:\n  work_nature: \"Exam Duty\"\n",
            "inline",
        )
        .unwrap();
        let mut cache = SummaryCache::new(config);

        let table = cache
            .refresh(DOCUMENT, &PlainTextSource, StaffCategory::Male)
            .unwrap();
        assert_eq!(table.records()[0].work_nature, "Exam Duty");
    }
}
