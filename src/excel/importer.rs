//! Excel importer implementation - existing .xlsx → workbook model

use crate::error::{SheetError, SheetResult};
use crate::workbook::MovieWorkbook;
use std::path::{Path, PathBuf};
use tracing::info;
use umya_spreadsheet::Spreadsheet;

/// A workbook file loaded for adding sheets
///
/// `workbook` lists the file's sheets as stored placeholders; `book` is the
/// file itself, handed to the exporter so those sheets are saved unchanged.
pub struct LoadedWorkbook {
    pub workbook: MovieWorkbook,
    pub book: Spreadsheet,
}

/// Loads an existing ratings workbook
pub struct ExcelImporter {
    path: PathBuf,
}

impl ExcelImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the workbook file
    pub fn load(&self) -> SheetResult<LoadedWorkbook> {
        if !self.path.exists() {
            return Err(SheetError::WorkbookNotFound(self.path.clone()));
        }

        let book = umya_spreadsheet::reader::xlsx::read(&self.path)
            .map_err(|e| SheetError::Import(format!("Failed to open Excel file: {}", e)))?;

        let sheets = book.get_sheet_collection();
        let names: Vec<String> = sheets.iter().map(|s| s.get_name().to_string()).collect();
        let blank = sheets.len() == 1 && sheets[0].get_cell_collection().is_empty();

        info!(
            path = %self.path.display(),
            sheets = names.len(),
            blank,
            "loaded workbook"
        );

        Ok(LoadedWorkbook {
            workbook: MovieWorkbook::from_stored(names, blank),
            book,
        })
    }
}
