//! Movie Ratings - styled Excel sheets from plain-text rating lists
//!
//! Each input file holds one `title ;;; rating ;;; release date` record per
//! line. Its records become a sheet (named after the file) in a workbook that
//! accumulates one sheet per list across runs. Every sheet ends with a live
//! formula averaging its ratings.
//!
//! # Example
//!
//! ```no_run
//! use movie_ratings::excel::ExcelExporter;
//! use movie_ratings::parser::parse_movies;
//! use movie_ratings::workbook::MovieWorkbook;
//! use movie_ratings::writer::write_movie_sheet;
//! use std::path::Path;
//!
//! let records = parse_movies(Path::new("horror.txt"))?;
//!
//! let mut workbook = MovieWorkbook::new();
//! write_movie_sheet(&mut workbook, "horror", &records)?;
//!
//! ExcelExporter::new(&workbook).save(Path::new("Movie_Ratings.xlsx"))?;
//! # Ok::<(), movie_ratings::error::SheetError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod parser;
pub mod types;
pub mod workbook;
pub mod writer;

// Re-export commonly used types
pub use error::{SheetError, SheetResult};
pub use types::{MovieRecord, Rating, RatingColor};
pub use workbook::{MovieWorkbook, SheetSlot};
