//! Stundenplan - school timetable JSON to Excel
//!
//! This library reads the JSON export of a school timetable and renders it
//! as an Excel teacher occupancy grid.
//!
//! # Features
//!
//! - Chunked loading from files or stdin
//! - Distinct, sorted teacher rows across all days
//! - One column per (day, slot), merged date headers
//! - Configurable sheet name, header text and slot width
//!
//! # Example
//!
//! ```no_run
//! use stundenplan::config::ExportOptions;
//! use stundenplan::core::TimetableGrid;
//! use stundenplan::excel::TimetableExporter;
//! use stundenplan::loader::InputSource;
//! use stundenplan::parser::parse_timetable;
//! use std::path::{Path, PathBuf};
//!
//! let timetable = parse_timetable(&InputSource::File(PathBuf::from("plan.json")))?;
//! let grid = TimetableGrid::from_timetable(&timetable);
//!
//! println!("Teachers: {}", grid.rows.len());
//!
//! TimetableExporter::new(grid, ExportOptions::default()).export(Path::new("plan.xlsx"))?;
//! # Ok::<(), stundenplan::error::TimetableError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod loader;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use error::{TimetableError, TimetableResult};
pub use types::{Day, ResourceRow, SlotCell, Timetable};
