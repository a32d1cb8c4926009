use crate::config::ExportOptions;
use crate::core::TimetableGrid;
use crate::error::{TimetableError, TimetableResult};
use crate::excel::TimetableExporter;
use crate::loader::InputSource;
use crate::parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Append `.xlsx` unless the path already ends with it
pub fn normalize_output_path(output: &Path) -> PathBuf {
    let has_xlsx = output
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false);

    if has_xlsx {
        output.to_path_buf()
    } else {
        let mut name = output.as_os_str().to_owned();
        name.push(".xlsx");
        PathBuf::from(name)
    }
}

/// Execute the convert command
pub fn convert(
    input: PathBuf,
    output: PathBuf,
    force: bool,
    options: ExportOptions,
    verbose: bool,
) -> TimetableResult<()> {
    let source = InputSource::from_arg(&input);
    let output = normalize_output_path(&output);

    println!("{}", "📅 Stundenplan - JSON → Excel".bold().green());
    println!("   Input:  {}", source);
    println!("   Output: {}\n", output.display());

    if output.exists() && !force {
        return Err(TimetableError::OutputExists(output));
    }

    if verbose {
        println!("{}", "📖 Reading timetable JSON...".cyan());
    }

    let timetable = parser::parse_timetable(&source)?;
    let grid = TimetableGrid::from_timetable(&timetable);

    if verbose {
        println!(
            "   Found {} days, {} slots per day, {} teachers\n",
            grid.days.len(),
            grid.slot_count,
            grid.rows.len()
        );
        println!("{}", "📊 Writing Excel grid...".cyan());
    }

    let exporter = TimetableExporter::new(grid, options);
    exporter.export(&output)?;

    println!("{}", "✅ Excel gespeichert:".bold().green());
    println!("   {}\n", output.display());

    Ok(())
}

/// Execute the inspect command - summary without writing a workbook
pub fn inspect(input: PathBuf, verbose: bool) -> TimetableResult<()> {
    let source = InputSource::from_arg(&input);

    println!("{}", "🔍 Stundenplan - Inspect".bold().green());
    println!("   Input: {}\n", source);

    let timetable = parser::parse_timetable(&source)?;
    let grid = TimetableGrid::from_timetable(&timetable);

    println!("   Days:     {}", grid.days.len());
    println!("   Slots:    {} per day", grid.slot_count);
    println!("   Teachers: {}", grid.rows.len());
    println!("   Occupied: {} cells\n", grid.occupied_count());

    if verbose {
        println!("{}", "📋 Days:".bold().cyan());
        for day in &grid.days {
            println!("   {}", day.label.bright_blue());
        }
        println!();

        println!("{}", "👩‍🏫 Teachers:".bold().cyan());
        for row in &grid.rows {
            println!(
                "   {:<12} {} occupied",
                row.name.bright_blue(),
                row.occupied_count()
            );
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
