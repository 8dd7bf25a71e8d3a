use std::path::PathBuf;
use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input file {} is not valid UTF-8 text", .0.display())]
    InputNotText(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: rating '{value}' is not a number")]
    MalformedRecord { line: usize, value: String },

    #[error("Invalid sheet name '{name}': {reason}")]
    InvalidSheetName { name: String, reason: String },

    #[error("Workbook not found: {}", .0.display())]
    WorkbookNotFound(PathBuf),

    #[error("A sheet named '{0}' already exists in the workbook")]
    DuplicateSheet(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Workbook {} is locked by another program", .0.display())]
    TargetLocked(PathBuf),

    #[error("Failed to save workbook: {0}")]
    SaveFailed(String),
}

impl SheetError {
    /// Short follow-up advice printed under the error message
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SheetError::TargetLocked(_) => Some("Close the workbook in any other program and run again."),
            SheetError::DuplicateSheet(_) => {
                Some("Rename the input file or remove the existing sheet, then run again.")
            }
            SheetError::InputNotText(_) => {
                Some("Save the movie list as UTF-8 text and run again.")
            }
            SheetError::MalformedRecord { .. } => {
                Some("Each line must look like: title ;;; rating ;;; release date")
            }
            _ => None,
        }
    }
}
