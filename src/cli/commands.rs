use crate::error::{SheetError, SheetResult};
use crate::excel::{ExcelExporter, ExcelImporter};
use crate::parser;
use crate::workbook::MovieWorkbook;
use crate::writer::write_movie_sheet;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Workbook written when no other path is given
pub const DEFAULT_WORKBOOK: &str = "Movie_Ratings.xlsx";

/// Settings for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Movie list to import
    pub input: PathBuf,
    /// Workbook that accumulates one sheet per movie list
    pub workbook: PathBuf,
    /// Print each step
    pub verbose: bool,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            verbose: false,
        }
    }
}

/// What a successful run did
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub sheet_name: String,
    pub records: usize,
    pub created_workbook: bool,
    pub workbook: PathBuf,
}

/// Install the stderr log subscriber (`RUST_LOG` wins over `verbose`)
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Already installed (tests, embedding): keep the existing subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse the input, add its sheet to the workbook and save
///
/// Nothing is saved unless every earlier step succeeded.
pub fn run(config: &Config) -> SheetResult<RunSummary> {
    println!("{}", "🎬 Movie Ratings".bold().green());
    println!("   Input:    {}", config.input.display());
    println!("   Workbook: {}\n", config.workbook.display());

    let sheet_name = parser::sheet_name_for(&config.input)?;

    if config.verbose {
        println!("{}", "📖 Reading movie list...".cyan());
    }
    let records = parser::parse_movies(&config.input)?;
    if config.verbose {
        println!("   Found {} movies\n", records.len());
    }

    if config.verbose {
        println!("{}", "📂 Loading workbook...".cyan());
    }
    let (mut workbook, stored) = match ExcelImporter::new(&config.workbook).load() {
        Ok(loaded) => (loaded.workbook, Some(loaded.book)),
        Err(SheetError::WorkbookNotFound(path)) => {
            println!(
                "{}",
                format!("   Workbook {} not found, creating it", path.display()).yellow()
            );
            (MovieWorkbook::new(), None)
        }
        Err(e) => return Err(e),
    };
    let created_workbook = stored.is_none();
    if config.verbose && !created_workbook {
        println!("   Sheets: {}\n", workbook.sheet_names().join(", "));
    }

    if config.verbose {
        println!(
            "{}",
            format!("📊 Writing sheet '{}'...", sheet_name).cyan()
        );
    }
    write_movie_sheet(&mut workbook, &sheet_name, &records)?;

    if config.verbose {
        println!("{}", "💾 Saving workbook...".cyan());
    }
    let mut exporter = ExcelExporter::new(&workbook);
    if let Some(book) = &stored {
        exporter = exporter.with_stored(book);
    }
    exporter.save(&config.workbook)?;

    info!(
        sheet = %sheet_name,
        records = records.len(),
        created_workbook,
        "run complete"
    );

    println!("{}", "✅ Sheet written!".bold().green());
    println!(
        "   {} movies → sheet '{}' in {}\n",
        records.len(),
        sheet_name.bright_blue(),
        config.workbook.display()
    );

    Ok(RunSummary {
        sheet_name,
        records: records.len(),
        created_workbook,
        workbook: config.workbook.clone(),
    })
}
