//! Hotel profiles: hotel and room-type records, spreadsheet import/export
//! with name-based reconciliation, and room-type lookup.

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod fixtures;
pub mod model;
pub mod repository;
pub mod services;

pub use error::ProfileError;
