//! Excel import/export for the ratings workbook
//!
//! - Export: new sheets → styled .xlsx, appended to the loaded file, saved all-or-nothing
//! - Import: existing .xlsx → sheet names + the file itself, kept untouched

pub mod formula;
pub mod styles;

mod exporter;
mod importer;

pub use exporter::ExcelExporter;
pub use importer::{ExcelImporter, LoadedWorkbook};
