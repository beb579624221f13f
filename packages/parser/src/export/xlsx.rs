//! Spreadsheet workbook with one sheet per level.

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use super::csv::csv_headers;
use crate::error::Result;
use crate::structure::Level;
use crate::types::{FlatRecord, ParsedData};

/// Build the workbook: sheets `Parts` through `SubClauses`, each with the
/// same columns as the level's CSV table.
pub fn build_workbook(data: &ParsedData) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    for (level, records) in data.levels() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(level.table_name())?;
        write_sheet(worksheet, level, records, &header_format)?;
    }

    Ok(workbook)
}

/// Serialized `.xlsx` bytes of [`build_workbook`].
pub fn generate_xlsx(data: &ParsedData) -> Result<Vec<u8>> {
    Ok(build_workbook(data)?.save_to_buffer()?)
}

fn write_sheet(
    worksheet: &mut Worksheet,
    level: Level,
    records: &[FlatRecord],
    header_format: &Format,
) -> Result<()> {
    for (col, header) in (0u16..).zip(csv_headers(level)) {
        worksheet.write_string_with_format(0, col, header, header_format)?;
    }

    for (row, record) in (1u32..).zip(records) {
        let numbers = level
            .ancestors()
            .iter()
            .map(|ancestor| record.parent_id(*ancestor))
            .chain([record.id]);

        let mut col = 0u16;
        for number in numbers {
            worksheet.write_number(row, col, number)?;
            col += 1;
        }
        worksheet.write_string(row, col, record.name_ru.as_str())?;
        worksheet.write_string(row, col + 1, record.name_kz.as_str())?;
    }

    Ok(())
}
