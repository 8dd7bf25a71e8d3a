//! Input parser for `title ;;; rating ;;; release date` files

use crate::error::{SheetError, SheetResult};
use crate::types::{MovieRecord, Rating};
use crate::workbook::validate_sheet_name;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Literal field separator
pub const FIELD_DELIMITER: &str = ";;;";

/// Number of fields a kept line must split into
pub const FIELD_COUNT: usize = 3;

/// Parse a movie list file into records, in file order
pub fn parse_movies(path: &Path) -> SheetResult<Vec<MovieRecord>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SheetError::InputNotFound(path.to_path_buf()),
        ErrorKind::InvalidData => SheetError::InputNotText(path.to_path_buf()),
        _ => SheetError::Io(e),
    })?;

    parse_movies_str(&content)
}

/// Parse movie list text
///
/// Blank lines and lines that don't split into exactly three fields are
/// dropped. A non-empty rating that is not a number fails the whole parse.
pub fn parse_movies_str(content: &str) -> SheetResult<Vec<MovieRecord>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if let Some(record) = parse_line(line, index + 1)? {
            records.push(record);
        }
    }

    Ok(records)
}

fn parse_line(line: &str, line_number: usize) -> SheetResult<Option<MovieRecord>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        debug!(
            line = line_number,
            fields = fields.len(),
            "skipping line without exactly {} fields",
            FIELD_COUNT
        );
        return Ok(None);
    }

    let rating = Rating::parse(fields[1]).ok_or_else(|| SheetError::MalformedRecord {
        line: line_number,
        value: fields[1].to_string(),
    })?;

    Ok(Some(MovieRecord::new(fields[0], rating, fields[2])))
}

/// Sheet name for an input file: its file name without the extension
pub fn sheet_name_for(path: &Path) -> SheetResult<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| SheetError::InvalidSheetName {
            name: path.display().to_string(),
            reason: "input path has no usable file name".to_string(),
        })?;

    validate_sheet_name(stem)?;
    Ok(stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_single_line() {
        let records = parse_movies_str("Inception;;;4.5;;;2010-07-16").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Inception");
        assert_eq!(records[0].rating.value(), Some(4.5));
        assert_eq!(records[0].release_date, "2010-07-16");
    }

    #[test]
    fn test_parse_trims_fields() {
        let records = parse_movies_str("  Heat ;;;  4 ;;;   1995-12-15  ").unwrap();
        assert_eq!(records[0].title, "Heat");
        assert_eq!(records[0].rating.raw(), "4");
        assert_eq!(records[0].release_date, "1995-12-15");
    }

    #[test]
    fn test_parse_drops_wrong_field_counts() {
        let text = "only a title\nA;;;1\nA;;;1;;;2;;;3\nB;;;2;;;2001";
        let records = parse_movies_str(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "B");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let records = parse_movies_str("\n   \n\t\nA;;;3;;;2000\n\n").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_keeps_blankish_three_field_line() {
        let records = parse_movies_str("  ;;; ;;; ").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "");
        assert_eq!(records[0].rating, Rating::unrated());
        assert_eq!(records[0].release_date, "");
    }

    #[test]
    fn test_parse_rejects_non_numeric_rating_with_line_number() {
        let err = parse_movies_str("A;;;1;;;2000\n\nB;;;great;;;2001").unwrap_err();
        match err {
            SheetError::MalformedRecord { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "great");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_handles_crlf_and_bom() {
        let records = parse_movies_str("\u{feff}A;;;1;;;2000\r\nB;;;2;;;2001\r\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "A");
        assert_eq!(records[1].release_date, "2001");
    }

    #[test]
    fn test_sheet_name_strips_extension() {
        assert_eq!(
            sheet_name_for(&PathBuf::from("lists/horror.txt")).unwrap(),
            "horror"
        );
        assert_eq!(sheet_name_for(&PathBuf::from("comedy")).unwrap(), "comedy");
    }

    #[test]
    fn test_sheet_name_rejects_invalid_names() {
        let err = sheet_name_for(&PathBuf::from("what?.txt")).unwrap_err();
        assert!(matches!(err, SheetError::InvalidSheetName { .. }));
    }
}
