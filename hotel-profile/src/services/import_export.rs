//! Hotel spreadsheet export, template generation and import reconciliation
//!
//! Import reads a workbook by fixed column position, validates every data row
//! on its own and reconciles it against the store by exact hotel name. Bad
//! rows are reported in the summary and never stop the batch; all accepted
//! rows are committed together at the end.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::excel::{self, HotelRow, Sheet};
use crate::model::{HotelStatus, NewHotel};
use crate::repository::{HotelStore, ImportBatch};

const TEMPLATE_FILE_NAME: &str = "hotel_import_template.xlsx";

/// How the calling layer should hand a produced file to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Attachment,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Attachment => "attachment",
        }
    }
}

/// A workbook written to disk for download; the caller owns cleanup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedFile {
    pub file_path: PathBuf,
    /// Suggested download name
    pub file_name: String,
    pub disposition: Disposition,
}

/// Result of one import call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// False only when the import as a whole failed
    pub success: bool,
    pub import_count: usize,
    /// Row errors in sheet order
    pub errors: Vec<String>,
}

impl Default for ImportSummary {
    fn default() -> Self {
        Self {
            success: true,
            import_count: 0,
            errors: Vec::new(),
        }
    }
}

impl ImportSummary {
    fn failed(message: String) -> Self {
        Self {
            success: false,
            import_count: 0,
            errors: vec![message],
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Why a row was not imported
#[derive(Debug)]
enum RowRejection {
    Incomplete,
    InvalidStarLevel,
    Failed(anyhow::Error),
}

impl RowRejection {
    fn message(&self, row: u32) -> String {
        match self {
            RowRejection::Incomplete => format!("row {} incomplete data", row),
            RowRejection::InvalidStarLevel => format!("row {} invalid star-level data", row),
            RowRejection::Failed(e) => format!("row {} processing failed: {:#}", row, e),
        }
    }
}

/// Export, template and import operations over a [`HotelStore`]
pub struct HotelImportExport<S> {
    store: S,
    export_dir: PathBuf,
}

impl<S: HotelStore> HotelImportExport<S> {
    /// Files are written to the system temp directory
    pub fn new(store: S) -> Self {
        Self {
            store,
            export_dir: std::env::temp_dir(),
        }
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Write every stored hotel to a new workbook
    pub async fn export_hotels(&self) -> Result<ExportedFile> {
        let hotels = self.store.find_all().await.context("Failed to load hotels")?;

        let file_path = self.temp_file("hotel_export_")?;
        excel::write_hotels_excel(&hotels, &file_path)?;

        log::info!("Exported {} hotels to {}", hotels.len(), file_path.display());

        Ok(ExportedFile {
            file_path,
            file_name: format!("hotels_{}.xlsx", Local::now().format("%Y-%m-%d_%H-%M-%S")),
            disposition: Disposition::Attachment,
        })
    }

    /// Write the blank import template
    pub fn create_import_template(&self) -> Result<ExportedFile> {
        let file_path = self.temp_file("hotel_template_")?;
        excel::write_import_template(&file_path)?;

        log::debug!("Import template written to {}", file_path.display());

        Ok(ExportedFile {
            file_path,
            file_name: TEMPLATE_FILE_NAME.to_string(),
            disposition: Disposition::Attachment,
        })
    }

    /// Import hotels from an xlsx byte stream
    pub async fn import_hotels(&self, bytes: &[u8]) -> ImportSummary {
        match self.run_import(bytes).await {
            Ok(summary) => summary,
            Err(e) => {
                log::error!("Excel import failed: {:#}", e);
                ImportSummary::failed(format!("import failed: {:#}", e))
            }
        }
    }

    /// Import hotels from a workbook on disk
    pub async fn import_hotels_from_path(&self, path: &Path) -> ImportSummary {
        match std::fs::read(path) {
            Ok(bytes) => self.import_hotels(&bytes).await,
            Err(e) => {
                log::error!("Failed to read {}: {}", path.display(), e);
                ImportSummary::failed(format!("import failed: {}: {}", path.display(), e))
            }
        }
    }

    async fn run_import(&self, bytes: &[u8]) -> Result<ImportSummary> {
        let sheet = Sheet::from_bytes(bytes)?;
        let rows = excel::read_hotel_rows(&sheet);
        log::debug!("Importing {} rows from sheet {}", rows.len(), sheet.name());

        let mut batch = ImportBatch::new();
        let mut summary = ImportSummary::default();

        for row in &rows {
            match self.reconcile_row(row, &mut batch).await {
                Ok(()) => summary.import_count += 1,
                Err(rejection) => {
                    if let RowRejection::Failed(ref e) = rejection {
                        log::error!(
                            "Failed to import row {} ({}): {:#}",
                            row.row,
                            row.name.as_deref().unwrap_or(""),
                            e
                        );
                    }
                    summary.errors.push(rejection.message(row.row));
                }
            }
        }

        log::debug!(
            "Committing {} changes ({} creates, {} updates)",
            batch.len(),
            batch.create_count(),
            batch.update_count()
        );
        let report = self.store.commit(batch).await?;
        log::info!(
            "Hotel import finished: {} imported ({} created, {} updated), {} rejected",
            summary.import_count,
            report.created.len(),
            report.updated,
            summary.errors.len()
        );

        Ok(summary)
    }

    /// Queue the row as a create or update. A name already queued earlier in
    /// the same file amends that pending change instead of adding a second record.
    async fn reconcile_row(&self, row: &HotelRow, batch: &mut ImportBatch) -> Result<(), RowRejection> {
        let candidate = candidate_from_row(row)?;
        candidate
            .validate()
            .map_err(|e| RowRejection::Failed(e.into()))?;

        if let Some(pending) = batch.pending_mut(&candidate.name) {
            log::debug!("Hotel {} repeats in row {}, later values win", candidate.name, row.row);
            pending.apply_import(&candidate);
            return Ok(());
        }

        let existing = self
            .store
            .find_by_name(&candidate.name)
            .await
            .map_err(RowRejection::Failed)?;

        match existing {
            Some(mut hotel) => {
                hotel.apply_import(&candidate);
                log::info!("Updating hotel {} ({})", hotel.id, hotel.name);
                batch.update(hotel);
            }
            None => {
                log::info!("Creating hotel {}", candidate.name);
                batch.persist(candidate);
            }
        }

        Ok(())
    }

    fn temp_file(&self, prefix: &str) -> Result<PathBuf> {
        let file = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(".xlsx")
            .tempfile_in(&self.export_dir)
            .with_context(|| {
                format!("Failed to create temporary file in {}", self.export_dir.display())
            })?;

        file.into_temp_path()
            .keep()
            .context("Failed to keep temporary file")
    }
}

/// Completeness and star-level checks, then the row as a new operating hotel
///
/// A required cell counts as missing when it is absent or holds only
/// whitespace. Any other text is a value, including `"0"`. Present values are
/// kept verbatim.
fn candidate_from_row(row: &HotelRow) -> Result<NewHotel, RowRejection> {
    if !row.is_complete() {
        return Err(RowRejection::Incomplete);
    }

    if !(1..=5).contains(&row.star_level) {
        return Err(RowRejection::InvalidStarLevel);
    }

    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    let mut hotel = NewHotel::new(
        field(&row.name),
        field(&row.address),
        field(&row.contact_person),
        field(&row.phone),
    )
    .with_star_level(row.star_level)
    .with_status(HotelStatus::Operating);
    hotel.email = row.email.clone();

    Ok(hotel)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use rust_xlsxwriter::Workbook;

    use super::*;
    use crate::model::Hotel;
    use crate::repository::{CommitReport, SqliteHotelStore, hotels, memory_pool};

    /// One sheet row; `None` leaves the cell empty
    type Row<'a> = [Option<&'a str>; 8];

    fn xlsx(rows: &[Row<'_>]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let ws = workbook.add_worksheet();
        for (col, title) in ["ID", "Name", "Address", "StarLevel", "ContactPerson", "Phone", "Email", "Status"]
            .iter()
            .enumerate()
        {
            ws.write_string(0, col as u16, *title).unwrap();
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(value) = cell {
                    ws.write_string((r + 1) as u32, c as u16, *value).unwrap();
                }
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    fn row<'a>(name: &'a str, address: &'a str, star: &'a str, contact: &'a str, phone: &'a str) -> Row<'a> {
        [None, Some(name), Some(address), Some(star), Some(contact), Some(phone), None, None]
    }

    async fn service() -> HotelImportExport<SqliteHotelStore> {
        HotelImportExport::new(SqliteHotelStore::new(memory_pool().await))
    }

    async fn all_hotels(svc: &HotelImportExport<SqliteHotelStore>) -> Vec<Hotel> {
        svc.store().find_all().await.unwrap()
    }

    #[tokio::test]
    async fn test_import_valid_rows() {
        let svc = service().await;
        let mut second = row("Hilltop Lodge", "2 Ridge Way", "3", "Bob", "020-3333");
        second[6] = Some("hill@example.com");
        let bytes = xlsx(&[row("Seaside Resort", "1 Beach Rd", "5", "Alice", "0898-1234"), second]);

        let summary = svc.import_hotels(&bytes).await;

        assert!(summary.success);
        assert_eq!(summary.import_count, 2);
        assert!(!summary.has_errors());

        let hotels = all_hotels(&svc).await;
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].name, "Seaside Resort");
        assert_eq!(hotels[0].star_level, 5);
        assert_eq!(hotels[0].status, HotelStatus::Operating);
        assert!(hotels[0].email.is_none());
        assert_eq!(hotels[1].email.as_deref(), Some("hill@example.com"));
    }

    #[tokio::test]
    async fn test_reimport_is_idempotent() {
        let svc = service().await;
        let bytes = xlsx(&[
            row("A Hotel", "Addr A", "4", "Ann", "111"),
            row("B Hotel", "Addr B", "2", "Ben", "222"),
        ]);

        assert_eq!(svc.import_hotels(&bytes).await.import_count, 2);
        let first_ids: Vec<_> = all_hotels(&svc).await.iter().map(|h| h.id).collect();

        let summary = svc.import_hotels(&bytes).await;
        assert_eq!(summary.import_count, 2);

        let second_ids: Vec<_> = all_hotels(&svc).await.iter().map(|h| h.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[tokio::test]
    async fn test_update_in_place_keeps_id_and_status() {
        let svc = service().await;
        let pool = svc.store().pool().clone();
        let id = hotels::insert_hotel(
            &pool,
            &NewHotel::new("Existing Hotel", "Old", "Carol", "999")
                .with_star_level(2)
                .with_email("old@example.com")
                .with_status(HotelStatus::Suspended),
        )
        .await
        .unwrap();

        let summary = svc
            .import_hotels(&xlsx(&[row("Existing Hotel", "New", "5", "Dave", "13888888888")]))
            .await;
        assert_eq!(summary.import_count, 1);

        let hotels = all_hotels(&svc).await;
        assert_eq!(hotels.len(), 1);
        let hotel = &hotels[0];
        assert_eq!(hotel.id, id);
        assert_eq!(hotel.address, "New");
        assert_eq!(hotel.star_level, 5);
        assert_eq!(hotel.contact_person, "Dave");
        assert_eq!(hotel.phone, "13888888888");
        // The row had no email, so the old one is cleared
        assert!(hotel.email.is_none());
        assert_eq!(hotel.status, HotelStatus::Suspended);
    }

    #[tokio::test]
    async fn test_incomplete_rows_are_rejected() {
        let svc = service().await;
        let mut no_name = row("", "Addr", "3", "Ann", "111");
        no_name[1] = None;
        let mut no_address = row("B", "", "3", "Ann", "111");
        no_address[2] = None;
        let mut no_contact = row("C", "Addr", "3", "", "111");
        no_contact[4] = None;
        let mut no_phone = row("D", "Addr", "3", "Ann", "");
        no_phone[5] = None;

        let summary = svc
            .import_hotels(&xlsx(&[no_name, no_address, no_contact, no_phone]))
            .await;

        assert!(summary.success);
        assert_eq!(summary.import_count, 0);
        assert_eq!(
            summary.errors,
            vec![
                "row 2 incomplete data",
                "row 3 incomplete data",
                "row 4 incomplete data",
                "row 5 incomplete data",
            ]
        );
        assert!(all_hotels(&svc).await.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_only_field_is_incomplete() {
        let svc = service().await;
        let bytes = xlsx(&[
            row("Blank Addr", "   ", "3", "Ann", "111"),
            row("Zero", "0", "3", "Ann", "111"),
        ]);

        let summary = svc.import_hotels(&bytes).await;

        assert!(summary.success);
        assert_eq!(summary.import_count, 1);
        assert_eq!(summary.errors, vec!["row 2 incomplete data"]);

        let hotels = all_hotels(&svc).await;
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name, "Zero");
        assert_eq!(hotels[0].address, "0");
    }

    #[tokio::test]
    async fn test_star_level_boundaries() {
        let svc = service().await;
        let bytes = xlsx(&[
            row("One", "Addr", "1", "Ann", "111"),
            row("Five", "Addr", "5", "Ann", "111"),
            row("Zero", "Addr", "0", "Ann", "111"),
            row("Six", "Addr", "6", "Ann", "111"),
            row("Text", "Addr", "five", "Ann", "111"),
        ]);

        let summary = svc.import_hotels(&bytes).await;

        assert_eq!(summary.import_count, 2);
        assert_eq!(
            summary.errors,
            vec![
                "row 4 invalid star-level data",
                "row 5 invalid star-level data",
                "row 6 invalid star-level data",
            ]
        );
        let names: Vec<_> = all_hotels(&svc).await.into_iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["One", "Five"]);
    }

    #[tokio::test]
    async fn test_missing_star_level_cell_is_invalid() {
        let svc = service().await;
        let mut missing = row("Blank Star", "Addr", "", "Ann", "111");
        missing[3] = None;

        let summary = svc.import_hotels(&xlsx(&[missing])).await;
        assert_eq!(summary.errors, vec!["row 2 invalid star-level data"]);
    }

    #[tokio::test]
    async fn test_completeness_is_checked_before_star_level() {
        let svc = service().await;
        let mut both_bad = row("Bad", "Addr", "9", "Ann", "111");
        both_bad[5] = None;

        let summary = svc.import_hotels(&xlsx(&[both_bad])).await;
        assert_eq!(summary.errors, vec!["row 2 incomplete data"]);
    }

    #[tokio::test]
    async fn test_numeric_cells_are_read_as_text() {
        let svc = service().await;
        let mut workbook = Workbook::new();
        let ws = workbook.add_worksheet();
        ws.write_string(0, 0, "ID").unwrap();
        ws.write_string(1, 1, "Numeric").unwrap();
        ws.write_string(1, 2, "Addr").unwrap();
        ws.write_number(1, 3, 4.0).unwrap();
        ws.write_string(1, 4, "Ann").unwrap();
        ws.write_number(1, 5, 13800000000.0).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let summary = svc.import_hotels(&bytes).await;
        assert_eq!(summary.import_count, 1);

        let hotel = &all_hotels(&svc).await[0];
        assert_eq!(hotel.star_level, 4);
        assert_eq!(hotel.phone, "13800000000");
    }

    #[tokio::test]
    async fn test_mixed_rows_are_independent() {
        let svc = service().await;
        let mut incomplete = row("Broken", "Addr", "3", "Ann", "111");
        incomplete[2] = None;
        let bytes = xlsx(&[
            row("First", "Addr", "3", "Ann", "111"),
            incomplete,
            row("Bad Star", "Addr", "7", "Ann", "111"),
            row("Last", "Addr", "4", "Ann", "111"),
        ]);

        let summary = svc.import_hotels(&bytes).await;

        assert!(summary.success);
        assert_eq!(summary.import_count + summary.errors.len(), 4);
        assert_eq!(summary.import_count, 2);
        assert_eq!(
            summary.errors,
            vec!["row 3 incomplete data", "row 4 invalid star-level data"]
        );
        let names: Vec<_> = all_hotels(&svc).await.into_iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["First", "Last"]);
    }

    #[tokio::test]
    async fn test_constraint_violation_is_a_row_error() {
        let svc = service().await;
        let long_phone = "1".repeat(21);
        let bytes = xlsx(&[
            row("Long Phone", "Addr", "3", "Ann", &long_phone),
            row("Fine", "Addr", "3", "Ann", "111"),
        ]);

        let summary = svc.import_hotels(&bytes).await;

        assert!(summary.success);
        assert_eq!(summary.import_count, 1);
        assert_eq!(
            summary.errors,
            vec!["row 2 processing failed: phone exceeds 20 characters"]
        );
    }

    #[tokio::test]
    async fn test_duplicate_names_in_one_file_create_one_record() {
        let svc = service().await;
        let bytes = xlsx(&[
            row("Twin", "First Addr", "3", "Ann", "111"),
            row("Twin", "Second Addr", "4", "Ann", "111"),
        ]);

        let summary = svc.import_hotels(&bytes).await;
        assert_eq!(summary.import_count, 2);

        let hotels = all_hotels(&svc).await;
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].address, "Second Addr");
        assert_eq!(hotels[0].star_level, 4);
    }

    #[tokio::test]
    async fn test_name_match_is_exact() {
        let svc = service().await;
        hotels::insert_hotel(
            svc.store().pool(),
            &NewHotel::new("Grand Hotel", "Addr", "Ann", "111"),
        )
        .await
        .unwrap();

        svc.import_hotels(&xlsx(&[row("grand hotel", "Other", "3", "Ann", "111")]))
            .await;

        let hotels = all_hotels(&svc).await;
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].address, "Addr");
    }

    #[tokio::test]
    async fn test_header_only_file() {
        let svc = service().await;
        let summary = svc.import_hotels(&xlsx(&[])).await;
        assert_eq!(summary, ImportSummary::default());
    }

    #[tokio::test]
    async fn test_unreadable_file_fails_whole_import() {
        let svc = service().await;
        let summary = svc.import_hotels(b"PK but not really a workbook").await;

        assert!(!summary.success);
        assert_eq!(summary.import_count, 0);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].starts_with("import failed: "));
    }

    #[tokio::test]
    async fn test_missing_path_fails_whole_import() {
        let svc = service().await;
        let summary = svc
            .import_hotels_from_path(Path::new("/definitely/not/here.xlsx"))
            .await;
        assert!(!summary.success);
        assert_eq!(summary.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_export_then_reimport_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service().await.with_export_dir(dir.path());
        let pool = svc.store().pool().clone();

        let original_id = hotels::insert_hotel(
            &pool,
            &NewHotel::new("Test Hotel", "Test Address", "Alice", "13800000000").with_star_level(4),
        )
        .await
        .unwrap();

        let exported = svc.export_hotels().await.unwrap();
        assert!(exported.file_path.starts_with(dir.path()));
        assert_eq!(exported.disposition, Disposition::Attachment);

        hotels::delete_hotel(&pool, original_id).await.unwrap();
        assert!(all_hotels(&svc).await.is_empty());

        let summary = svc.import_hotels_from_path(&exported.file_path).await;
        assert!(summary.success);
        assert_eq!(summary.import_count, 1);

        let hotels = all_hotels(&svc).await;
        assert_eq!(hotels.len(), 1);
        let hotel = &hotels[0];
        assert_ne!(hotel.id, original_id);
        assert_eq!(hotel.name, "Test Hotel");
        assert_eq!(hotel.address, "Test Address");
        assert_eq!(hotel.star_level, 4);
        assert_eq!(hotel.contact_person, "Alice");
        assert_eq!(hotel.phone, "13800000000");
    }

    #[tokio::test]
    async fn test_export_file_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service().await.with_export_dir(dir.path());
        hotels::insert_hotel(svc.store().pool(), &NewHotel::new("Only", "Addr", "Ann", "111"))
            .await
            .unwrap();

        let exported = svc.export_hotels().await.unwrap();

        assert!(exported.file_name.starts_with("hotels_"));
        assert!(exported.file_name.ends_with(".xlsx"));
        // hotels_YYYY-MM-DD_HH-MM-SS.xlsx
        assert_eq!(exported.file_name.len(), "hotels_".len() + 19 + ".xlsx".len());
        let file_stem = exported.file_path.file_name().unwrap().to_string_lossy().to_string();
        assert!(file_stem.starts_with("hotel_export_"));

        let sheet = Sheet::open(&exported.file_path).unwrap();
        assert_eq!(sheet.highest_row(), 2);
        assert_eq!(sheet.text(2, "H").as_deref(), Some("Operating"));
    }

    #[tokio::test]
    async fn test_template_on_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service().await.with_export_dir(dir.path());

        let template = svc.create_import_template().unwrap();

        assert_eq!(template.file_name, "hotel_import_template.xlsx");
        assert_eq!(template.disposition.as_str(), "attachment");
        let sheet = Sheet::open(&template.file_path).unwrap();
        assert_eq!(sheet.populated_rows(), 1);
        assert_eq!(sheet.highest_row(), 1);

        // Importing the untouched template is a no-op
        let summary = svc.import_hotels_from_path(&template.file_path).await;
        assert_eq!(summary, ImportSummary::default());
    }

    #[tokio::test]
    async fn test_export_into_missing_dir_propagates() {
        let svc = service().await.with_export_dir("/definitely/not/here");
        assert!(svc.export_hotels().await.is_err());
        assert!(svc.create_import_template().is_err());
    }

    /// Store that can fail lookups for one name or fail the final commit
    struct FlakyStore {
        inner: SqliteHotelStore,
        fail_lookup_for: &'static str,
        fail_commit: bool,
    }

    #[async_trait]
    impl HotelStore for FlakyStore {
        async fn find_all(&self) -> Result<Vec<Hotel>> {
            self.inner.find_all().await
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Hotel>> {
            if name == self.fail_lookup_for {
                anyhow::bail!("connection reset");
            }
            self.inner.find_by_name(name).await
        }

        async fn commit(&self, batch: ImportBatch) -> Result<CommitReport> {
            if self.fail_commit {
                anyhow::bail!("disk full");
            }
            self.inner.commit(batch).await
        }
    }

    async fn flaky(fail_commit: bool) -> HotelImportExport<FlakyStore> {
        HotelImportExport::new(FlakyStore {
            inner: SqliteHotelStore::new(memory_pool().await),
            fail_lookup_for: "Cursed",
            fail_commit,
        })
    }

    #[tokio::test]
    async fn test_lookup_failure_does_not_stop_batch() {
        let svc = flaky(false).await;
        let bytes = xlsx(&[
            row("Before", "Addr", "3", "Ann", "111"),
            row("Cursed", "Addr", "3", "Ann", "111"),
            row("After", "Addr", "3", "Ann", "111"),
        ]);

        let summary = svc.import_hotels(&bytes).await;

        assert!(summary.success);
        assert_eq!(summary.import_count, 2);
        assert_eq!(summary.errors, vec!["row 3 processing failed: connection reset"]);

        let names: Vec<_> = svc
            .store()
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names, vec!["Before", "After"]);
    }

    #[tokio::test]
    async fn test_commit_failure_fails_whole_import() {
        let svc = flaky(true).await;
        let summary = svc
            .import_hotels(&xlsx(&[row("Lost", "Addr", "3", "Ann", "111")]))
            .await;

        assert!(!summary.success);
        assert_eq!(summary.import_count, 0);
        assert_eq!(summary.errors, vec!["import failed: disk full"]);
        assert!(svc.store().find_all().await.unwrap().is_empty());
    }
}
