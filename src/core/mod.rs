//! Timetable grid construction

pub mod grid;

pub use grid::{DayColumn, Occupancy, TeacherRow, TimetableGrid};
