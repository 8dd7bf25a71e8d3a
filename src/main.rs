use clap::Parser;
use colored::Colorize;
use movie_ratings::cli::{self, Config, DEFAULT_WORKBOOK};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "movie-ratings")]
#[command(about = "Turn a ';;;'-delimited movie list into a styled Excel sheet.")]
#[command(long_about = "Movie Ratings - styled Excel sheets from plain-text rating lists

INPUT FORMAT:
  One movie per line, three fields separated by ';;;':

    Inception ;;; 4.5 ;;; 2010-07-16
    Cats      ;;; 1   ;;; 2019-12-20

  Blank lines and lines without exactly three fields are skipped.
  A rating that is not a number stops the run; nothing is written.

OUTPUT:
  A sheet named after the input file (without extension) is added to the
  workbook, which is created if missing. Ratings are colored by band:
    < 2 red | 2 to < 3 orange | 3 yellow | > 3 green
  The last row holds a live AVERAGE RATING formula.

  Importing a list whose sheet already exists is refused.

EXAMPLES:
  movie-ratings horror.txt
  movie-ratings comedy.txt --workbook ~/Documents/Movie_Ratings.xlsx")]
#[command(version)]
struct Cli {
    /// Movie list (one 'title ;;; rating ;;; release date' per line)
    input: PathBuf,

    /// Workbook to add the sheet to
    #[arg(short, long, default_value = DEFAULT_WORKBOOK, env = "MOVIE_RATINGS_WORKBOOK")]
    workbook: PathBuf,

    /// Show each step and debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help / --version print to stdout and succeed; usage errors exit 1
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    cli::init_logging(args.verbose);

    let config = Config {
        input: args.input,
        workbook: args.workbook,
        verbose: args.verbose,
    };

    match cli::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e.to_string().red().bold());
            if let Some(hint) = e.hint() {
                eprintln!("   {}", hint.yellow());
            }
            ExitCode::FAILURE
        }
    }
}
