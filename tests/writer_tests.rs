//! Sheet writer tests (in-memory workbook, no files)

use movie_ratings::error::SheetError;
use movie_ratings::excel::formula::average_rating_formula;
use movie_ratings::parser::parse_movies_str;
use movie_ratings::types::{MovieRecord, Rating, RatingColor};
use movie_ratings::workbook::{CellStyle, CellValue, MovieWorkbook, Sheet, SheetSlot};
use movie_ratings::writer::{write_movie_sheet, AVERAGE_LABEL};
use pretty_assertions::assert_eq;

fn records(text: &str) -> Vec<MovieRecord> {
    parse_movies_str(text).unwrap()
}

fn value(sheet: &Sheet, row: u32, col: u16) -> CellValue {
    sheet
        .cell(row, col)
        .map(|c| c.value.clone())
        .unwrap_or(CellValue::Empty)
}

fn style(sheet: &Sheet, row: u32, col: u16) -> Option<CellStyle> {
    sheet.cell(row, col).and_then(|c| c.style)
}

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

// ═══════════════════════════════════════════════════════════════════════════
// SHEET RESOLUTION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_new_workbook_renames_default_sheet() {
    let mut wb = MovieWorkbook::new();
    write_movie_sheet(&mut wb, "horror", &records("It;;;4;;;2017")).unwrap();

    assert_eq!(wb.sheet_names(), vec!["horror"]);
}

#[test]
fn test_second_sheet_is_appended() {
    let mut wb = MovieWorkbook::new();
    write_movie_sheet(&mut wb, "horror", &records("It;;;4;;;2017")).unwrap();
    write_movie_sheet(&mut wb, "comedy", &records("Airplane!;;;5;;;1980")).unwrap();

    assert_eq!(wb.sheet_names(), vec!["horror", "comedy"]);
}

#[test]
fn test_duplicate_sheet_leaves_workbook_unmodified() {
    let mut wb = MovieWorkbook::new();
    write_movie_sheet(&mut wb, "horror", &records("It;;;4;;;2017")).unwrap();
    let before = wb.clone();

    let err = write_movie_sheet(&mut wb, "horror", &records("Us;;;3;;;2019")).unwrap_err();

    assert!(matches!(err, SheetError::DuplicateSheet(ref name) if name == "horror"));
    assert_eq!(wb, before);
}

#[test]
fn test_duplicate_check_ignores_case() {
    let mut wb = MovieWorkbook::new();
    write_movie_sheet(&mut wb, "Horror", &[]).unwrap();

    let err = write_movie_sheet(&mut wb, "HORROR", &[]).unwrap_err();
    assert!(matches!(err, SheetError::DuplicateSheet(_)));
}

#[test]
fn test_resolve_sheet_variants() {
    let mut wb = MovieWorkbook::new();
    assert_eq!(wb.resolve_sheet("a"), SheetSlot::Renamed(0));
    assert_eq!(wb.resolve_sheet("b"), SheetSlot::Created(1));
    assert_eq!(wb.resolve_sheet("a"), SheetSlot::Existing(0));
    assert_eq!(wb.resolve_sheet("b").index(), 1);
}

#[test]
fn test_invalid_sheet_name_is_rejected_before_mutation() {
    let mut wb = MovieWorkbook::new();
    let err = write_movie_sheet(&mut wb, "a:b", &[]).unwrap_err();

    assert!(matches!(err, SheetError::InvalidSheetName { .. }));
    assert!(wb.is_fresh());
}

// ═══════════════════════════════════════════════════════════════════════════
// LAYOUT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_end_to_end_layout() {
    let list = records("Inception;;;4.5;;;2010-07-16\n  ;;; ;;; \nCats;;;1;;;2019-12-20");
    let mut wb = MovieWorkbook::new();
    write_movie_sheet(&mut wb, "example_input", &list).unwrap();
    let sheet = wb.sheet("example_input").unwrap();

    // Header
    assert_eq!(value(sheet, 0, 0), text("Movie Title"));
    assert_eq!(value(sheet, 0, 1), text("Rating"));
    assert_eq!(value(sheet, 0, 2), text("Release Date"));
    for col in 0..3 {
        assert_eq!(style(sheet, 0, col), Some(CellStyle::Header));
    }

    // Data rows
    assert_eq!(value(sheet, 1, 0), text("Inception"));
    assert_eq!(value(sheet, 1, 1), text("4.5 / 5"));
    assert_eq!(value(sheet, 1, 2), text("2010-07-16"));
    assert_eq!(value(sheet, 2, 0), text(""));
    assert_eq!(value(sheet, 2, 1), text(" / 5"));
    assert_eq!(value(sheet, 3, 0), text("Cats"));
    assert_eq!(value(sheet, 3, 1), text("1 / 5"));

    assert_eq!(style(sheet, 1, 0), Some(CellStyle::Entry));
    assert_eq!(style(sheet, 1, 2), Some(CellStyle::Entry));
    assert_eq!(
        style(sheet, 1, 1),
        Some(CellStyle::Rating(Some(RatingColor::Green)))
    );
    assert_eq!(style(sheet, 2, 1), Some(CellStyle::Rating(None)));
    assert_eq!(
        style(sheet, 3, 1),
        Some(CellStyle::Rating(Some(RatingColor::Red)))
    );

    // Average row covers B2:B4
    assert_eq!(value(sheet, 4, 0), text(AVERAGE_LABEL));
    assert_eq!(style(sheet, 4, 0), Some(CellStyle::AverageLabel));
    let expected = "=ROUND(AVERAGE(VALUE(LEFT(B2,FIND(\"/\",B2)-1)),\
                    VALUE(LEFT(B3,FIND(\"/\",B3)-1)),\
                    VALUE(LEFT(B4,FIND(\"/\",B4)-1))),2)";
    assert_eq!(value(sheet, 4, 1), CellValue::Formula(expected.to_string()));
    assert_eq!(style(sheet, 4, 1), Some(CellStyle::AverageValue));

    assert_eq!(sheet.row_count(), 5);
    assert_eq!(sheet.column_width(0), Some(50.0));
    assert_eq!(sheet.column_width(1), Some(25.0));
    assert_eq!(sheet.column_width(2), Some(25.0));
}

#[test]
fn test_rating_text_is_not_reformatted() {
    let mut wb = MovieWorkbook::new();
    write_movie_sheet(&mut wb, "s", &records("A;;;4.50;;;x\nB;;;3.0;;;y")).unwrap();
    let sheet = wb.sheet("s").unwrap();

    assert_eq!(value(sheet, 1, 1), text("4.50 / 5"));
    assert_eq!(value(sheet, 2, 1), text("3.0 / 5"));
    assert_eq!(
        style(sheet, 2, 1),
        Some(CellStyle::Rating(Some(RatingColor::Yellow)))
    );
}

#[test]
fn test_rating_color_boundaries_in_sheet() {
    let cases = [
        ("1.9", RatingColor::Red),
        ("2.0", RatingColor::Orange),
        ("2.99", RatingColor::Orange),
        ("3.0", RatingColor::Yellow),
        ("3.01", RatingColor::Green),
        ("5.0", RatingColor::Green),
    ];

    let list: Vec<MovieRecord> = cases
        .iter()
        .map(|(rating, _)| MovieRecord::new("m", Rating::parse(rating).unwrap(), "d"))
        .collect();

    let mut wb = MovieWorkbook::new();
    write_movie_sheet(&mut wb, "bands", &list).unwrap();
    let sheet = wb.sheet("bands").unwrap();

    for (i, (rating, color)) in cases.iter().enumerate() {
        assert_eq!(
            style(sheet, 1 + i as u32, 1),
            Some(CellStyle::Rating(Some(*color))),
            "rating {rating}"
        );
    }
    assert_eq!(
        value(sheet, 7, 1),
        CellValue::Formula(average_rating_formula(2, 7).unwrap())
    );
}

#[test]
fn test_empty_list_writes_header_and_label_only() {
    let mut wb = MovieWorkbook::new();
    write_movie_sheet(&mut wb, "empty", &[]).unwrap();
    let sheet = wb.sheet("empty").unwrap();

    assert_eq!(value(sheet, 1, 0), text(AVERAGE_LABEL));
    assert_eq!(value(sheet, 1, 1), CellValue::Empty);
    assert_eq!(style(sheet, 1, 1), Some(CellStyle::AverageValue));
    assert_eq!(sheet.row_count(), 2);
}
