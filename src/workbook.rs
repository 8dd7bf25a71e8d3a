//! In-memory workbook model
//!
//! Sheets hold cell values plus style tags. Tags are turned into real
//! formats only when the workbook is exported. Sheets already in the
//! workbook file are stored placeholders: only their names take part in
//! sheet resolution, and the file's own copy is written back untouched.

use crate::error::{SheetError, SheetResult};
use crate::types::RatingColor;
use std::collections::BTreeMap;
use tracing::debug;

/// Name of the single sheet in a brand-new workbook
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Longest sheet name Excel accepts
pub const MAX_SHEET_NAME_LEN: usize = 31;

const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

//==============================================================================
// Cells
//==============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Formula text including the leading `=`
    Formula(String),
}

/// Named style applied at export time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStyle {
    /// Column headers: large bold underlined, light-red fill
    Header,
    /// Title and release date cells: bold, light-blue fill
    Entry,
    /// Rating cells, filled by color band (no fill when unrated)
    Rating(Option<RatingColor>),
    /// "AVERAGE RATING" label
    AverageLabel,
    /// Average formula cell
    AverageValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: Option<CellStyle>,
}

//==============================================================================
// Sheets
//==============================================================================

/// A named grid addressed by 0-based (row, column)
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<(u32, u16), Cell>,
    column_widths: BTreeMap<u16, f64>,
    /// Already in the workbook file; saved back exactly as it was
    stored: bool,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            column_widths: BTreeMap::new(),
            stored: false,
        }
    }

    /// Placeholder for a sheet that lives in the loaded workbook file
    pub fn stored(name: impl Into<String>) -> Self {
        Self {
            stored: true,
            ..Self::new(name)
        }
    }

    pub fn is_stored(&self) -> bool {
        self.stored
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_cell(&mut self, row: u32, col: u16, value: CellValue, style: Option<CellStyle>) {
        self.cells.insert((row, col), Cell { value, style });
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = ((u32, u16), &Cell)> {
        self.cells.iter().map(|(pos, cell)| (*pos, cell))
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn column_width(&self, col: u16) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    pub fn column_widths(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.column_widths.iter().map(|(col, width)| (*col, *width))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of rows in use (last used row + 1)
    pub fn row_count(&self) -> u32 {
        self.cells.keys().map(|(row, _)| row + 1).max().unwrap_or(0)
    }
}

//==============================================================================
// Workbook
//==============================================================================

/// Where a named sheet ended up after [`MovieWorkbook::resolve_sheet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSlot {
    /// A sheet with that name was already there (nothing changed)
    Existing(usize),
    /// A new empty sheet was appended
    Created(usize),
    /// The default sheet of a brand-new workbook was renamed
    Renamed(usize),
}

impl SheetSlot {
    pub fn index(&self) -> usize {
        match self {
            SheetSlot::Existing(i) | SheetSlot::Created(i) | SheetSlot::Renamed(i) => *i,
        }
    }
}

/// Ordered set of named sheets
#[derive(Debug, Clone, PartialEq)]
pub struct MovieWorkbook {
    sheets: Vec<Sheet>,
    /// Only the untouched default sheet exists
    fresh: bool,
}

impl MovieWorkbook {
    /// A brand-new workbook with one empty default sheet
    pub fn new() -> Self {
        Self {
            sheets: vec![Sheet::new(DEFAULT_SHEET_NAME)],
            fresh: true,
        }
    }

    /// A workbook built from the given sheets
    pub fn from_sheets(sheets: Vec<Sheet>) -> Self {
        if sheets.is_empty() {
            return Self::new();
        }
        Self {
            sheets,
            fresh: false,
        }
    }

    /// A workbook mirroring the sheet names of a file on disk
    ///
    /// A file holding a single blank sheet counts as brand-new, so its
    /// default sheet is renamed rather than kept next to the new one.
    pub fn from_stored<I, S>(names: I, blank: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sheets: Vec<Sheet> = names.into_iter().map(Sheet::stored).collect();
        if sheets.is_empty() {
            return Self::new();
        }
        Self {
            fresh: blank && sheets.len() == 1,
            sheets,
        }
    }

    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::name).collect()
    }

    /// Find a sheet by name (case-insensitive, like Excel)
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.position(name).map(|i| &self.sheets[i])
    }

    pub fn sheet_at_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    pub fn contains_sheet(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let wanted = name.to_lowercase();
        self.sheets.iter().position(|s| s.name.to_lowercase() == wanted)
    }

    /// Get the sheet called `name`, creating it if absent
    ///
    /// A brand-new workbook renames its default sheet instead of adding a
    /// second one. An existing sheet is reported and left untouched.
    pub fn resolve_sheet(&mut self, name: &str) -> SheetSlot {
        if self.fresh {
            self.fresh = false;
            self.sheets[0] = Sheet::new(name);
            debug!(sheet = name, "renamed default sheet");
            return SheetSlot::Renamed(0);
        }

        if let Some(index) = self.position(name) {
            return SheetSlot::Existing(index);
        }

        self.sheets.push(Sheet::new(name));
        debug!(sheet = name, index = self.sheets.len() - 1, "created sheet");
        SheetSlot::Created(self.sheets.len() - 1)
    }
}

impl Default for MovieWorkbook {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a name against Excel's sheet naming rules
pub fn validate_sheet_name(name: &str) -> SheetResult<()> {
    let invalid = |reason: String| SheetError::InvalidSheetName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("sheet names cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(invalid(format!(
            "sheet names are limited to {} characters",
            MAX_SHEET_NAME_LEN
        )));
    }
    if let Some(c) = name.chars().find(|c| FORBIDDEN_SHEET_CHARS.contains(c)) {
        return Err(invalid(format!("character '{}' is not allowed", c)));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(invalid(
            "sheet names cannot begin or end with an apostrophe".to_string(),
        ));
    }

    Ok(())
}
