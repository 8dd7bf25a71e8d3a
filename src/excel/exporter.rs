//! Excel exporter implementation

use super::styles::styles;
use crate::error::{SheetError, SheetResult};
use crate::workbook::{Cell, CellValue, MovieWorkbook, Sheet};
use rust_xlsxwriter::{Formula, Workbook, Worksheet, XlsxError};
use std::fs;
use std::io::{self, Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use umya_spreadsheet::Spreadsheet;

/// Windows ERROR_SHARING_VIOLATION / ERROR_LOCK_VIOLATION
const SHARING_VIOLATION_CODES: [i32; 2] = [32, 33];

/// Mode requested for a new workbook file (the umask still applies)
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o666;

/// Renders a [`MovieWorkbook`] to .xlsx
///
/// Sheets written this run are rendered with rust_xlsxwriter. When the
/// workbook came from a file, those sheets are appended to the loaded
/// file so its existing sheets are saved exactly as they were.
pub struct ExcelExporter<'a> {
    workbook: &'a MovieWorkbook,
    stored: Option<&'a Spreadsheet>,
}

impl<'a> ExcelExporter<'a> {
    pub fn new(workbook: &'a MovieWorkbook) -> Self {
        Self {
            workbook,
            stored: None,
        }
    }

    /// Workbook file the stored sheets of `workbook` come from
    pub fn with_stored(mut self, book: &'a Spreadsheet) -> Self {
        self.stored = Some(book);
        self
    }

    /// Render the whole workbook to .xlsx bytes
    pub fn render(&self) -> SheetResult<Vec<u8>> {
        let sheets = self.workbook.sheets();
        if !sheets.iter().any(Sheet::is_stored) {
            return self.render_sheets(sheets.iter());
        }

        let base = self.stored.ok_or_else(|| {
            SheetError::Export("workbook has stored sheets but no loaded file".to_string())
        })?;
        self.merge_into(base)
    }

    fn render_sheets<'s>(&self, sheets: impl Iterator<Item = &'s Sheet>) -> SheetResult<Vec<u8>> {
        let mut xlsx = Workbook::new();

        for sheet in sheets {
            self.export_sheet(&mut xlsx, sheet)?;
        }

        xlsx.save_to_buffer()
            .map_err(|e| SheetError::Export(format!("Failed to build workbook: {}", e)))
    }

    /// Append this run's sheets to the loaded file, leaving its sheets alone
    fn merge_into(&self, base: &Spreadsheet) -> SheetResult<Vec<u8>> {
        let mut book = base.clone();

        let new_sheets: Vec<&Sheet> = self
            .workbook
            .sheets()
            .iter()
            .filter(|s| !s.is_stored())
            .collect();

        if !new_sheets.is_empty() {
            let rendered = self.render_sheets(new_sheets.iter().copied())?;
            let fresh = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(rendered), true)
                .map_err(|e| SheetError::Export(format!("Failed to re-read new sheets: {}", e)))?;

            for sheet in fresh.get_sheet_collection() {
                book.add_sheet(sheet.clone()).map_err(|e| {
                    SheetError::Export(format!("Failed to add sheet '{}': {}", sheet.get_name(), e))
                })?;
                debug!(sheet = sheet.get_name(), "appended sheet to stored workbook");
            }
        }

        let mut out = Cursor::new(Vec::new());
        umya_spreadsheet::writer::xlsx::write_writer(&book, &mut out)
            .map_err(|e| SheetError::Export(format!("Failed to build workbook: {}", e)))?;
        Ok(out.into_inner())
    }

    /// Save to `path`, replacing it in one step
    ///
    /// The file is rendered in memory, written next to the target and renamed
    /// over it, so a failure never leaves a half-written workbook behind.
    pub fn save(&self, path: &Path) -> SheetResult<()> {
        let buffer = self.render()?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut temp = temp_file_in(dir).map_err(|e| save_error(path, e))?;
        temp.write_all(&buffer).map_err(|e| save_error(path, e))?;
        temp.as_file().sync_all().map_err(|e| save_error(path, e))?;

        if let Ok(metadata) = fs::metadata(path) {
            // Best effort: keep the permissions of the file being replaced
            let _ = temp.as_file().set_permissions(metadata.permissions());
        }

        temp.persist(path).map_err(|e| save_error(path, e.error))?;

        info!(path = %path.display(), bytes = buffer.len(), "saved workbook");
        Ok(())
    }

    fn export_sheet(&self, xlsx: &mut Workbook, sheet: &Sheet) -> SheetResult<()> {
        let worksheet = xlsx.add_worksheet();
        worksheet
            .set_name(sheet.name())
            .map_err(|e| export_error("set worksheet name", e))?;

        for (col, width) in sheet.column_widths() {
            worksheet
                .set_column_width(col, width)
                .map_err(|e| export_error("set column width", e))?;
        }

        for ((row, col), cell) in sheet.cells() {
            write_cell(worksheet, row, col, cell)?;
        }

        Ok(())
    }
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> SheetResult<()> {
    let format = cell.style.map(|style| styles().format_for(style));

    let result = match (&cell.value, format) {
        (CellValue::Empty, Some(format)) => worksheet.write_blank(row, col, format),
        (CellValue::Empty, None) => return Ok(()),
        (CellValue::Text(text), Some(format)) => {
            worksheet.write_string_with_format(row, col, text, format)
        }
        (CellValue::Text(text), None) => worksheet.write_string(row, col, text),
        (CellValue::Number(n), Some(format)) => {
            worksheet.write_number_with_format(row, col, *n, format)
        }
        (CellValue::Number(n), None) => worksheet.write_number(row, col, *n),
        (CellValue::Bool(b), Some(format)) => {
            worksheet.write_boolean_with_format(row, col, *b, format)
        }
        (CellValue::Bool(b), None) => worksheet.write_boolean(row, col, *b),
        (CellValue::Formula(f), Some(format)) => {
            worksheet.write_formula_with_format(row, col, Formula::new(f), format)
        }
        (CellValue::Formula(f), None) => worksheet.write_formula(row, col, Formula::new(f)),
    };

    result
        .map(|_| ())
        .map_err(|e| export_error("write cell", e))
}

/// Temp file that ends up with the same mode as a plainly created file
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".movie-ratings");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
    }

    builder.tempfile_in(dir)
}

fn export_error(action: &str, e: XlsxError) -> SheetError {
    SheetError::Export(format!("Failed to {}: {}", action, e))
}

fn save_error(path: &Path, e: io::Error) -> SheetError {
    let locked = e.kind() == io::ErrorKind::PermissionDenied
        || e
            .raw_os_error()
            .is_some_and(|code| SHARING_VIOLATION_CODES.contains(&code));

    if locked {
        SheetError::TargetLocked(path.to_path_buf())
    } else {
        SheetError::SaveFailed(format!("{}: {}", path.display(), e))
    }
}
