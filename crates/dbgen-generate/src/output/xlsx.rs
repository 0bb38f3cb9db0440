use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use dbgen_core::columns::{CLIENT_HEADER, CLIENT_SHEET, PURCHASE_HEADER, PURCHASE_SHEET};
use dbgen_core::{ClientRecord, Error, PurchaseRecord};

/// Display format of purchase amounts. Separators follow the viewer's locale
/// (`R$ 1.234,56` under pt-BR).
pub const CURRENCY_FORMAT: &str = "R$ #,##0.00";

/// Data rows that fit in one worksheet below the header row.
pub const MAX_SHEET_ROWS: usize = 1_048_575;

/// Rejects datasets that cannot fit in a single worksheet.
pub fn check_sheet_capacity(rows: usize) -> Result<(), Error> {
    if rows > MAX_SHEET_ROWS {
        return Err(Error::config(format!(
            "{rows} rows exceed the spreadsheet limit of {MAX_SHEET_ROWS}; skip the xlsx output"
        )));
    }
    Ok(())
}

pub fn write_clients_xlsx(path: &Path, records: &[ClientRecord]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(CLIENT_SHEET)?;
    write_header(sheet, &CLIENT_HEADER)?;

    for (idx, record) in records.iter().enumerate() {
        let row = data_row(idx)?;
        sheet.write_string(row, 0, record.code.as_str())?;
        sheet.write_string(row, 1, &record.full_name)?;
        sheet.write_string(row, 2, &record.mobile)?;
        sheet.write_string(row, 3, &record.cpf)?;
        sheet.write_string(row, 4, &record.email)?;
    }

    workbook.save(path)
}

/// Amounts are numeric cells carrying [`CURRENCY_FORMAT`]; dates are ISO text.
pub fn write_purchases_xlsx(path: &Path, records: &[PurchaseRecord]) -> Result<(), XlsxError> {
    let currency = Format::new().set_num_format(CURRENCY_FORMAT);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(PURCHASE_SHEET)?;
    write_header(sheet, &PURCHASE_HEADER)?;

    for (idx, record) in records.iter().enumerate() {
        let row = data_row(idx)?;
        sheet.write_string(row, 0, record.client_ref.as_str())?;
        sheet.write_string(row, 1, record.date.format("%Y-%m-%d").to_string())?;
        sheet.write_number_with_format(row, 2, record.amount.as_f64(), &currency)?;
        sheet.write_string(row, 3, record.branch_code.as_str())?;
    }

    workbook.save(path)
}

fn write_header(sheet: &mut Worksheet, header: &[&str]) -> Result<(), XlsxError> {
    for (col, name) in header.iter().enumerate() {
        let col = u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?;
        sheet.write_string(0, col, *name)?;
    }
    Ok(())
}

// Row 0 holds the header.
fn data_row(idx: usize) -> Result<u32, XlsxError> {
    u32::try_from(idx + 1).map_err(|_| XlsxError::RowColumnLimitError)
}
