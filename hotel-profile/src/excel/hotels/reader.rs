//! Read hotel rows from an import sheet

use crate::excel::Sheet;

/// Column letters read on import (A and H are ignored)
mod cols {
    pub const NAME: &str = "B";
    pub const ADDRESS: &str = "C";
    pub const STAR_LEVEL: &str = "D";
    pub const CONTACT_PERSON: &str = "E";
    pub const PHONE: &str = "F";
    pub const EMAIL: &str = "G";
}

/// Raw values of one data row, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelRow {
    /// 1-based sheet row number
    pub row: u32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub star_level: i64,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl HotelRow {
    /// Whether every required text field holds something other than whitespace
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.address, &self.contact_person, &self.phone]
            .iter()
            .all(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

/// Read rows 2 through the last populated row
pub fn read_hotel_rows(sheet: &Sheet) -> Vec<HotelRow> {
    (2..=sheet.highest_row())
        .map(|row| HotelRow {
            row,
            name: sheet.text(row, cols::NAME),
            address: sheet.text(row, cols::ADDRESS),
            star_level: sheet.int(row, cols::STAR_LEVEL),
            contact_person: sheet.text(row, cols::CONTACT_PERSON),
            phone: sheet.text(row, cols::PHONE),
            email: sheet.text(row, cols::EMAIL),
        })
        .collect()
}
