//! Operations offered to the calling layer

pub mod import_export;
pub mod room_types;

pub use import_export::{Disposition, ExportedFile, HotelImportExport, ImportSummary};
pub use room_types::room_type_options;
