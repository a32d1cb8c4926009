//! Excel export of the teacher occupancy grid
//!
//! Export: timetable grid → Excel (.xlsx), one worksheet with merged day
//! headers, slot numbers and one row per teacher.

mod exporter;

pub use exporter::{TimetableExporter, DATE_ROW, FIRST_TEACHER_ROW, SLOT_ROW};
