//! Write hotels to Excel format

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use super::SHEET_NAME;
use crate::model::Hotel;

/// Column indices for the hotel sheet
mod cols {
    pub const ID: u16 = 0;
    pub const NAME: u16 = 1;
    pub const ADDRESS: u16 = 2;
    pub const STAR_LEVEL: u16 = 3;
    pub const CONTACT_PERSON: u16 = 4;
    pub const PHONE: u16 = 5;
    pub const EMAIL: u16 = 6;
    pub const STATUS: u16 = 7;
}

const EXPORT_HEADER: [&str; 8] = [
    "ID",
    "Name",
    "Address",
    "StarLevel",
    "ContactPerson",
    "Phone",
    "Email",
    "Status",
];
const EXPORT_WIDTHS: [f64; 8] = [10.0, 25.0, 35.0, 10.0, 15.0, 15.0, 25.0, 15.0];

const TEMPLATE_HEADER: [&str; 8] = [
    "ID (leave empty on import)",
    "Name (required)",
    "Address (required)",
    "StarLevel (1-5) (required)",
    "ContactPerson (required)",
    "Phone (required)",
    "Email",
    "Status (defaults to \"Operating\" on import)",
];
const TEMPLATE_WIDTHS: [f64; 8] = [20.0, 25.0, 35.0, 15.0, 15.0, 15.0, 25.0, 25.0];

/// Write every hotel to an Excel file, one row each after the header
pub fn write_hotels_excel(hotels: &[Hotel], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(SHEET_NAME)?;
    write_header(worksheet, &EXPORT_HEADER, &EXPORT_WIDTHS)?;

    for (idx, hotel) in hotels.iter().enumerate() {
        write_hotel(worksheet, (idx + 1) as u32, hotel)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    Ok(())
}

/// Write the blank import template: header hints only
pub fn write_import_template(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(SHEET_NAME)?;
    write_header(worksheet, &TEMPLATE_HEADER, &TEMPLATE_WIDTHS)?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    Ok(())
}

fn write_header(ws: &mut Worksheet, titles: &[&str; 8], widths: &[f64; 8]) -> Result<()> {
    let bold = Format::new().set_bold();

    for (col, (title, width)) in titles.iter().zip(widths).enumerate() {
        let col = col as u16;
        ws.write_string_with_format(0, col, *title, &bold)?;
        ws.set_column_width(col, *width)?;
    }

    Ok(())
}

fn write_hotel(ws: &mut Worksheet, row: u32, hotel: &Hotel) -> Result<()> {
    ws.write_number(row, cols::ID, hotel.id as f64)?;
    ws.write_string(row, cols::NAME, &hotel.name)?;
    ws.write_string(row, cols::ADDRESS, &hotel.address)?;
    ws.write_number(row, cols::STAR_LEVEL, hotel.star_level as f64)?;
    ws.write_string(row, cols::CONTACT_PERSON, &hotel.contact_person)?;
    ws.write_string(row, cols::PHONE, &hotel.phone)?;
    if let Some(ref email) = hotel.email {
        ws.write_string(row, cols::EMAIL, email)?;
    }
    ws.write_string(row, cols::STATUS, hotel.status.label())?;
    Ok(())
}
