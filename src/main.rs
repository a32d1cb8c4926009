use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use stundenplan::cli;
use stundenplan::config::{ExportOptions, DEFAULT_OUTPUT_FILE};
use stundenplan::error::TimetableResult;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stundenplan")]
#[command(about = "Turn a school timetable JSON export into an Excel teacher grid.")]
#[command(long_about = "Stundenplan - timetable JSON to Excel

Reads the JSON export of a school timetable (days, slots, teacher cells) and
writes one worksheet: rows are teachers, columns are (day, slot) pairs.
Occupied slots are 1 on a gray background, free slots are empty, and days
where a teacher has no entry at all are 0.

COMMANDS:
  convert   - JSON to Excel (.xlsx)
  inspect   - Summarize a timetable without writing a workbook

EXAMPLES:
  stundenplan convert plan.json                   # → stundenplan2.xlsx
  stundenplan convert plan.json lehrer.xlsx -f    # overwrite existing file
  cat plan.json | stundenplan convert - out.xlsx  # read from stdin
  stundenplan inspect plan.json -v

LOGGING:
  RUST_LOG=stundenplan=debug stundenplan convert plan.json")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert timetable JSON to an Excel workbook.

LAYOUT:
  Row 1:   one merged, bold date header per day
  Row 2:   teacher header, then slot numbers 1..n for every day
  Row 3..: one row per teacher (sorted), 1 = occupied, empty = free,
           0 = teacher has no entry that day

OPTIONS PRECEDENCE:
  defaults < --config YAML < environment < flags

CONFIG FILE (YAML):
  sheet_name: Stundenplan
  teacher_header: Lehrkraft
  slot_column_width: 2.5")]
    /// Convert timetable JSON to Excel .xlsx
    Convert {
        /// Path to timetable JSON ('-' reads stdin)
        input: PathBuf,

        /// Output Excel file path (.xlsx is appended when missing)
        #[arg(default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Overwrite the output file if it exists
        #[arg(short, long)]
        force: bool,

        /// YAML file with export options
        #[arg(short, long, env = "STUNDENPLAN_CONFIG")]
        config: Option<PathBuf>,

        /// Worksheet name
        #[arg(long, env = "STUNDENPLAN_SHEET")]
        sheet: Option<String>,

        /// Header of the teacher column
        #[arg(long, env = "STUNDENPLAN_TEACHER_HEADER")]
        teacher_header: Option<String>,

        /// Width of every slot column
        #[arg(long, env = "STUNDENPLAN_SLOT_WIDTH")]
        slot_width: Option<f64>,

        /// Show verbose conversion steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Summarize a timetable without writing a workbook
    Inspect {
        /// Path to timetable JSON ('-' reads stdin)
        input: PathBuf,

        /// List days and per-teacher occupancy
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Commands::Convert { verbose, .. } | Commands::Inspect { verbose, .. } => *verbose,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "stundenplan=debug"
    } else {
        "stundenplan=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> TimetableResult<()> {
    match command {
        Commands::Convert {
            input,
            output,
            force,
            config,
            sheet,
            teacher_header,
            slot_width,
            verbose,
        } => {
            let base = match config {
                Some(path) => ExportOptions::from_yaml_file(&path)?,
                None => ExportOptions::default(),
            };
            let options = base.with_overrides(sheet, teacher_header, slot_width);
            cli::convert(input, output, force, options, verbose)
        }

        Commands::Inspect { input, verbose } => cli::inspect(input, verbose),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.command.verbose());

    if let Err(e) = run(cli.command) {
        eprintln!("{} {}", "❌ Fehler:".bold().red(), e);
        std::process::exit(1);
    }
}
