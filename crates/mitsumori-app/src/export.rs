//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use mitsumori_domain::model::CustomerRecord;
use mitsumori_types::{Error, Result};

/// Export recorded estimate requests to an Excel file
pub fn export_to_excel(records: &[CustomerRecord], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    // Add summary sheet
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, records)?;

    // Add details sheet
    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, records)?;

    // Save workbook
    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, records: &[CustomerRecord]) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Hikkoshi Mitsumori Report", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Total Requests:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(2, 1, records.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let priced: Vec<_> = records.iter().filter_map(|r| r.result.as_ref()).collect();

    sheet
        .write_string(3, 0, "Priced Requests:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, priced.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let total_yen: u64 = priced.iter().map(|r| r.total_price_yen as u64).sum();
    sheet
        .write_string(4, 0, "Total Quoted (yen):")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(4, 1, total_yen as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, records: &[CustomerRecord]) -> Result<()> {
    sheet
        .set_name("Details")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let headers = [
        "Customer ID",
        "Name",
        "From",
        "To",
        "Requested At",
        "Boxes",
        "Distance (km)",
        "Truck (yen)",
        "Options (yen)",
        "Total (yen)",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet
            .write_number(row, 0, record.customer_id as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &record.customer.customer_name)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, &record.customer.old_prefecture_id)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 3, &record.customer.new_prefecture_id)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 4, &record.requested_at.to_rfc3339())
            .map_err(|e| Error::Excel(e.to_string()))?;

        if let Some(ref result) = record.result {
            sheet
                .write_number(row, 5, result.total_boxes as f64)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number(row, 6, result.distance_km)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number(row, 7, result.truck_price_yen as f64)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number(row, 8, result.option_price_yen as f64)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number(row, 9, result.total_price_yen as f64)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    Ok(())
}
