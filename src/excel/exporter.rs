//! Excel exporter implementation - timetable grid → .xlsx

use crate::config::ExportOptions;
use crate::core::grid::{TimetableGrid, FIRST_SLOT_COLUMN, TEACHER_COLUMN};
use crate::core::Occupancy;
use crate::error::{TimetableError, TimetableResult};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;
use tracing::info;

/// Zero-based row of the merged date headers
pub const DATE_ROW: u32 = 0;
/// Zero-based row of the slot numbers
pub const SLOT_ROW: u32 = 1;
/// Zero-based row of the first teacher
pub const FIRST_TEACHER_ROW: u32 = 2;

const EXCEL_MAX_ROWS: usize = 1_048_576;
const EXCEL_MAX_COLS: usize = 16_384;

/// Cell formats shared by the whole sheet
struct GridFormats {
    cell: Format,
    date_header: Format,
    occupied: Format,
}

impl GridFormats {
    fn new() -> Self {
        let cell = Format::new()
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);

        Self {
            date_header: cell.clone().set_bold(),
            occupied: cell.clone().set_background_color(Color::Gray),
            cell,
        }
    }
}

/// Writes a [`TimetableGrid`] as a single worksheet
pub struct TimetableExporter {
    grid: TimetableGrid,
    options: ExportOptions,
}

impl TimetableExporter {
    pub fn new(grid: TimetableGrid, options: ExportOptions) -> Self {
        Self { grid, options }
    }

    /// Export the grid to an Excel .xlsx file
    pub fn export(&self, output_path: &Path) -> TimetableResult<()> {
        let mut workbook = self.build_workbook()?;

        workbook
            .save(output_path)
            .map_err(|e| TimetableError::Export(format!("Failed to save Excel file: {}", e)))?;

        info!(
            path = %output_path.display(),
            teachers = self.grid.rows.len(),
            days = self.grid.days.len(),
            "saved timetable workbook"
        );
        Ok(())
    }

    /// Render the workbook into memory
    pub fn to_buffer(&self) -> TimetableResult<Vec<u8>> {
        let mut workbook = self.build_workbook()?;
        Ok(workbook.save_to_buffer()?)
    }

    fn build_workbook(&self) -> TimetableResult<Workbook> {
        self.options.validate()?;
        self.check_limits()?;

        let mut workbook = Workbook::new();
        let formats = GridFormats::new();

        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&self.options.sheet_name)
            .map_err(|e| TimetableError::Export(format!("Failed to set worksheet name: {}", e)))?;

        self.write_headers(worksheet, &formats)?;
        self.write_teacher_rows(worksheet, &formats)?;
        self.set_column_widths(worksheet)?;

        Ok(workbook)
    }

    fn check_limits(&self) -> TimetableResult<()> {
        let cols = self.grid.last_col() + 1;
        if cols > EXCEL_MAX_COLS {
            return Err(TimetableError::Export(format!(
                "{} days x {} slots needs {} columns, Excel allows {}",
                self.grid.days.len(),
                self.grid.slot_count,
                cols,
                EXCEL_MAX_COLS
            )));
        }

        let rows = FIRST_TEACHER_ROW as usize + self.grid.rows.len();
        if rows > EXCEL_MAX_ROWS {
            return Err(TimetableError::Export(format!(
                "{} teachers need {} rows, Excel allows {}",
                self.grid.rows.len(),
                rows,
                EXCEL_MAX_ROWS
            )));
        }

        Ok(())
    }

    /// Row 1: merged date per day. Row 2: teacher header and slot numbers.
    fn write_headers(&self, worksheet: &mut Worksheet, formats: &GridFormats) -> TimetableResult<()> {
        let slot_count = self.grid.slot_count;

        worksheet.write_blank(DATE_ROW, TEACHER_COLUMN as u16, &formats.cell)?;
        worksheet.write_string_with_format(
            SLOT_ROW,
            TEACHER_COLUMN as u16,
            &self.options.teacher_header,
            &formats.cell,
        )?;

        for day in &self.grid.days {
            let first = day.first_col as u16;

            match slot_count {
                0 => continue,
                1 => {
                    worksheet.write_string_with_format(
                        DATE_ROW,
                        first,
                        &day.label,
                        &formats.date_header,
                    )?;
                }
                n => {
                    let last = (day.first_col + n - 1) as u16;
                    worksheet
                        .merge_range(DATE_ROW, first, DATE_ROW, last, &day.label, &formats.date_header)
                        .map_err(|e| {
                            TimetableError::Export(format!(
                                "Failed to merge header for '{}': {}",
                                day.label, e
                            ))
                        })?;
                }
            }

            for slot in 0..slot_count {
                worksheet.write_number_with_format(
                    SLOT_ROW,
                    first + slot as u16,
                    (slot + 1) as f64,
                    &formats.cell,
                )?;
            }
        }

        Ok(())
    }

    fn write_teacher_rows(
        &self,
        worksheet: &mut Worksheet,
        formats: &GridFormats,
    ) -> TimetableResult<()> {
        for (idx, row) in self.grid.rows.iter().enumerate() {
            let excel_row = FIRST_TEACHER_ROW + idx as u32;

            worksheet.write_string_with_format(
                excel_row,
                TEACHER_COLUMN as u16,
                &row.name,
                &formats.cell,
            )?;

            for (offset, occupancy) in row.cells.iter().enumerate() {
                let col = (FIRST_SLOT_COLUMN + offset) as u16;
                match occupancy {
                    Occupancy::Occupied => {
                        worksheet.write_number_with_format(excel_row, col, 1, &formats.occupied)?;
                    }
                    Occupancy::Free => {
                        worksheet.write_blank(excel_row, col, &formats.cell)?;
                    }
                    Occupancy::Absent => {
                        worksheet.write_number_with_format(excel_row, col, 0, &formats.cell)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Teacher column fitted to content, slot columns fixed narrow
    fn set_column_widths(&self, worksheet: &mut Worksheet) -> TimetableResult<()> {
        worksheet.autofit();

        for offset in 0..self.grid.slot_columns() {
            let col = (FIRST_SLOT_COLUMN + offset) as u16;
            worksheet.set_column_width(col, self.options.slot_column_width)?;
        }

        Ok(())
    }
}
