//! Cell addressing and the average-rating formula

/// Above this many data rows the average is built over a range instead of
/// one term per cell (AVERAGE takes at most 255 arguments and a formula at
/// most 8192 characters).
pub const MAX_INLINE_TERMS: u32 = 200;

/// Column holding the "x / 5" rating text
pub const RATING_COLUMN: &str = "B";

/// Convert a 0-based column index to an Excel column letter
///
/// Examples:
/// - 0 → A
/// - 1 → B
/// - 25 → Z
/// - 26 → AA
pub fn column_index_to_letter(index: usize) -> String {
    let mut result = String::new();
    let mut idx = index;

    loop {
        let remainder = idx % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }

    result
}

/// A1-style address for a 0-based (row, column)
pub fn cell_address(row: u32, col: u16) -> String {
    format!("{}{}", column_index_to_letter(col as usize), row + 1)
}

/// Numeric part of one rating cell: the text before "/"
fn rating_term(cell: &str) -> String {
    format!("VALUE(LEFT({cell},FIND(\"/\",{cell})-1))")
}

/// Formula averaging the ratings in B`first_row`..=B`last_row` (1-based)
///
/// Each cell holds text like `4.5 / 5`; the formula strips everything from
/// the slash onward and rounds the mean to 2 decimals. Returns `None` when
/// the row range is empty.
///
/// Example for rows 2..=3:
/// `=ROUND(AVERAGE(VALUE(LEFT(B2,FIND("/",B2)-1)),VALUE(LEFT(B3,FIND("/",B3)-1))),2)`
pub fn average_rating_formula(first_row: u32, last_row: u32) -> Option<String> {
    if last_row < first_row {
        return None;
    }

    let count = last_row - first_row + 1;
    if count > MAX_INLINE_TERMS {
        let range = format!("{RATING_COLUMN}{first_row}:{RATING_COLUMN}{last_row}");
        return Some(format!(
            "=ROUND(SUMPRODUCT({})/ROWS({range}),2)",
            rating_term(&range)
        ));
    }

    let terms: Vec<String> = (first_row..=last_row)
        .map(|row| rating_term(&format!("{RATING_COLUMN}{row}")))
        .collect();

    Some(format!("=ROUND(AVERAGE({}),2)", terms.join(",")))
}
