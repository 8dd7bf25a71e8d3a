//! Sheet writer: lays movie records out as a styled ratings sheet

use crate::error::{SheetError, SheetResult};
use crate::excel::formula::average_rating_formula;
use crate::types::MovieRecord;
use crate::workbook::{validate_sheet_name, CellStyle, CellValue, MovieWorkbook, Sheet, SheetSlot};
use tracing::debug;

/// Header row: (text, column width)
pub const COLUMNS: [(&str, f64); 3] = [
    ("Movie Title", 50.0),
    ("Rating", 25.0),
    ("Release Date", 25.0),
];

pub const AVERAGE_LABEL: &str = "AVERAGE RATING";

pub const TITLE_COL: u16 = 0;
pub const RATING_COL: u16 = 1;
pub const RELEASE_DATE_COL: u16 = 2;

/// 0-based row of the first record
pub const FIRST_DATA_ROW: u32 = 1;

/// Write `records` into a new sheet named `sheet_name`
///
/// Fails with [`SheetError::DuplicateSheet`] and leaves the workbook
/// untouched if the name is already taken.
pub fn write_movie_sheet(
    workbook: &mut MovieWorkbook,
    sheet_name: &str,
    records: &[MovieRecord],
) -> SheetResult<()> {
    validate_sheet_name(sheet_name)?;

    let index = match workbook.resolve_sheet(sheet_name) {
        SheetSlot::Existing(_) => return Err(SheetError::DuplicateSheet(sheet_name.to_string())),
        SheetSlot::Created(index) | SheetSlot::Renamed(index) => index,
    };

    let sheet = workbook
        .sheet_at_mut(index)
        .ok_or_else(|| SheetError::Export(format!("sheet '{}' vanished", sheet_name)))?;
    lay_out_movie_sheet(sheet, records);

    debug!(sheet = sheet_name, records = records.len(), "wrote movie sheet");
    Ok(())
}

/// Fill `sheet` with header, one row per record and the average row
pub fn lay_out_movie_sheet(sheet: &mut Sheet, records: &[MovieRecord]) {
    write_header(sheet);

    let mut row = FIRST_DATA_ROW;
    for record in records {
        write_record(sheet, row, record);
        row += 1;
    }

    write_average_row(sheet, records.len() as u32);
}

fn write_header(sheet: &mut Sheet) {
    for (col, (text, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.set_cell(0, col, CellValue::Text(text.to_string()), Some(CellStyle::Header));
        sheet.set_column_width(col, *width);
    }
}

fn write_record(sheet: &mut Sheet, row: u32, record: &MovieRecord) {
    sheet.set_cell(
        row,
        TITLE_COL,
        CellValue::Text(record.title.clone()),
        Some(CellStyle::Entry),
    );
    sheet.set_cell(
        row,
        RATING_COL,
        CellValue::Text(record.rating.cell_text()),
        Some(CellStyle::Rating(record.rating.color())),
    );
    sheet.set_cell(
        row,
        RELEASE_DATE_COL,
        CellValue::Text(record.release_date.clone()),
        Some(CellStyle::Entry),
    );
}

/// Average row sits right below the last record
fn write_average_row(sheet: &mut Sheet, record_count: u32) {
    // 1-based: header is row 1, records are rows 2..=last_row
    let last_row = 1 + record_count;
    let average_row = last_row; // 0-based index of 1-based row last_row + 1

    sheet.set_cell(
        average_row,
        TITLE_COL,
        CellValue::Text(AVERAGE_LABEL.to_string()),
        Some(CellStyle::AverageLabel),
    );

    let value = match average_rating_formula(2, last_row) {
        Some(formula) => CellValue::Formula(formula),
        None => CellValue::Empty,
    };
    sheet.set_cell(average_row, RATING_COL, value, Some(CellStyle::AverageValue));
}
