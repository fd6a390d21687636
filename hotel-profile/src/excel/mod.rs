//! Excel import/export for hotel records

pub mod hotels;
pub mod sheet;

pub use hotels::{HotelRow, read_hotel_rows, write_hotels_excel, write_import_template};
pub use sheet::Sheet;
