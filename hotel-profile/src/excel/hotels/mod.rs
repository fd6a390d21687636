//! Hotel sheet layout: ID, Name, Address, StarLevel, ContactPerson, Phone,
//! Email, Status in columns A through H. Import reads by position only.

mod reader;
mod writer;

pub use reader::{HotelRow, read_hotel_rows};
pub use writer::{write_hotels_excel, write_import_template};

/// Sheet name used for exports and templates
pub const SHEET_NAME: &str = "Hotels";
