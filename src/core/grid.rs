use crate::types::{Day, Timetable};
use std::collections::BTreeSet;
use tracing::debug;

/// Zero-based column holding the teacher names
pub const TEACHER_COLUMN: usize = 0;

/// Zero-based column of the first slot of the first day
pub const FIRST_SLOT_COLUMN: usize = 1;

/// Occupancy of one teacher in one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    /// Slot carries at least one grid entry
    Occupied,
    /// Teacher is planned that day but the slot is empty
    Free,
    /// Teacher has no row at all on that day
    Absent,
}

/// Header information for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn {
    pub label: String,
    /// Zero-based column of the day's first slot
    pub first_col: usize,
}

/// One grid row: a teacher and `days * slot_count` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherRow {
    pub name: String,
    pub cells: Vec<Occupancy>,
}

impl TeacherRow {
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Occupancy::Occupied)
            .count()
    }
}

/// Teacher x (day, slot) occupancy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableGrid {
    pub days: Vec<DayColumn>,
    pub slot_count: usize,
    pub rows: Vec<TeacherRow>,
}

impl TimetableGrid {
    /// Build the grid from a parsed timetable
    ///
    /// Teachers are the distinct short names of all days in ascending order.
    /// Each teacher gets exactly `slot_count` cells per day, taken from the
    /// first resource row with a matching short name on that day.
    pub fn from_timetable(timetable: &Timetable) -> Self {
        let slot_count = timetable.slot_count();

        let days = timetable
            .days
            .iter()
            .enumerate()
            .map(|(idx, day)| DayColumn {
                label: day.label().to_string(),
                first_col: FIRST_SLOT_COLUMN + idx * slot_count,
            })
            .collect();

        let names: BTreeSet<&str> = timetable
            .days
            .iter()
            .flat_map(|day| day.resources.iter().map(|r| r.short_name()))
            .collect();

        let rows: Vec<TeacherRow> = names
            .into_iter()
            .map(|name| TeacherRow {
                name: name.to_string(),
                cells: timetable
                    .days
                    .iter()
                    .flat_map(|day| day_cells(day, name, slot_count))
                    .collect(),
            })
            .collect();

        debug!(
            teachers = rows.len(),
            days = timetable.days.len(),
            slot_count,
            "built timetable grid"
        );

        Self {
            days,
            slot_count,
            rows,
        }
    }

    /// Number of slot columns across all days
    pub fn slot_columns(&self) -> usize {
        self.days.len() * self.slot_count
    }

    /// Zero-based index of the last used column
    pub fn last_col(&self) -> usize {
        TEACHER_COLUMN + self.slot_columns()
    }

    pub fn teacher_names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.name.as_str())
    }

    pub fn occupied_count(&self) -> usize {
        self.rows.iter().map(TeacherRow::occupied_count).sum()
    }
}

/// Rows without a short name never match, so their "?" row reads as absent
fn day_cells(day: &Day, teacher: &str, slot_count: usize) -> Vec<Occupancy> {
    let matching = day
        .resources
        .iter()
        .find(|r| r.resource.short_name.as_deref() == Some(teacher));

    match matching {
        None => vec![Occupancy::Absent; slot_count],
        Some(row) => (0..slot_count)
            .map(|slot| match row.cells.get(slot) {
                Some(cell) if cell.is_occupied() => Occupancy::Occupied,
                _ => Occupancy::Free,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_timetable_str;
    use pretty_assertions::assert_eq;
    use super::Occupancy::{Absent, Free, Occupied};

    fn grid(json: &str) -> TimetableGrid {
        TimetableGrid::from_timetable(&parse_timetable_str(json).unwrap())
    }

    #[test]
    fn test_teachers_sorted_and_distinct() {
        let g = grid(
            r#"{
              "slots": [{}],
              "days": [
                {"day": "Mo", "resources": [
                  {"resource": {"shortName": "SCH"}, "cells": [{"gridEntries": []}]},
                  {"resource": {"shortName": "ABE"}, "cells": [{"gridEntries": []}]}
                ]},
                {"day": "Di", "resources": [
                  {"resource": {"shortName": "SCH"}, "cells": [{"gridEntries": []}]},
                  {"resource": {"shortName": "KLE"}, "cells": [{"gridEntries": []}]}
                ]}
              ]
            }"#,
        );

        assert_eq!(g.teacher_names().collect::<Vec<_>>(), vec!["ABE", "KLE", "SCH"]);
    }

    #[test]
    fn test_occupancy_per_day() {
        let g = grid(
            r#"{
              "slots": [{}, {}, {}],
              "days": [
                {"day": "2024-09-02", "resources": [
                  {"resource": {"shortName": "MEI"}, "cells": [
                    {"gridEntries": [{"subject": "M"}]},
                    {"gridEntries": []},
                    {"gridEntries": [{"subject": "D"}, {"subject": "E"}]}
                  ]}
                ]},
                {"day": "2024-09-03", "resources": []}
              ]
            }"#,
        );

        assert_eq!(g.rows.len(), 1);
        assert_eq!(
            g.rows[0].cells,
            vec![Occupied, Free, Occupied, Absent, Absent, Absent]
        );
        assert_eq!(g.occupied_count(), 2);
    }

    #[test]
    fn test_day_columns_layout() {
        let g = grid(
            r#"{"slots": [{}, {}], "days": [{"day": "A"}, {"day": "B"}, {}]}"#,
        );

        assert_eq!(
            g.days,
            vec![
                DayColumn { label: "A".into(), first_col: 1 },
                DayColumn { label: "B".into(), first_col: 3 },
                DayColumn { label: "???".into(), first_col: 5 },
            ]
        );
        assert_eq!(g.slot_columns(), 6);
        assert_eq!(g.last_col(), 6);
        assert!(g.rows.is_empty());
    }

    #[test]
    fn test_first_matching_row_wins() {
        let g = grid(
            r#"{
              "slots": [{}],
              "days": [{"day": "Mo", "resources": [
                {"resource": {"shortName": "DUP"}, "cells": [{"gridEntries": []}]},
                {"resource": {"shortName": "DUP"}, "cells": [{"gridEntries": [1]}]}
              ]}]
            }"#,
        );

        assert_eq!(g.rows.len(), 1);
        assert_eq!(g.rows[0].cells, vec![Free]);
    }

    #[test]
    fn test_cells_are_fitted_to_slot_count() {
        let g = grid(
            r#"{
              "slots": [{}, {}],
              "days": [{"day": "Mo", "resources": [
                {"resource": {"shortName": "SHORT"}, "cells": [{"gridEntries": [1]}]},
                {"resource": {"shortName": "LONG"}, "cells": [
                  {"gridEntries": []}, {"gridEntries": [1]}, {"gridEntries": [1]}
                ]}
              ]}]
            }"#,
        );

        assert_eq!(g.rows[0].name, "LONG");
        assert_eq!(g.rows[0].cells, vec![Free, Occupied]);
        assert_eq!(g.rows[1].name, "SHORT");
        assert_eq!(g.rows[1].cells, vec![Occupied, Free]);
    }

    #[test]
    fn test_missing_short_name_row_is_absent() {
        let g = grid(
            r#"{
              "slots": [{}, {}],
              "days": [{"day": "Mo", "resources": [
                {"resource": {}, "cells": [{"gridEntries": [1]}, {"gridEntries": []}]},
                {"resource": {"shortName": null}, "cells": [{"gridEntries": [1]}, {"gridEntries": [1]}]}
              ]}]
            }"#,
        );

        assert_eq!(g.rows.len(), 1);
        assert_eq!(g.rows[0].name, "?");
        assert_eq!(g.rows[0].cells, vec![Absent, Absent]);
        assert_eq!(g.occupied_count(), 0);
    }

    #[test]
    fn test_literal_question_mark_name_matches() {
        let g = grid(
            r#"{
              "slots": [{}],
              "days": [{"day": "Mo", "resources": [
                {"resource": {}, "cells": [{"gridEntries": []}]},
                {"resource": {"shortName": "?"}, "cells": [{"gridEntries": [1]}]}
              ]}]
            }"#,
        );

        assert_eq!(g.rows.len(), 1);
        assert_eq!(g.rows[0].cells, vec![Occupied]);
    }

    #[test]
    fn test_zero_slots() {
        let g = grid(
            r#"{"slots": [], "days": [{"day": "Mo", "resources": [
                {"resource": {"shortName": "X"}, "cells": []}
            ]}]}"#,
        );

        assert_eq!(g.slot_columns(), 0);
        assert_eq!(g.rows[0].cells, Vec::<Occupancy>::new());
    }
}
