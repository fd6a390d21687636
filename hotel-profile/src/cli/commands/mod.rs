//! Command handlers

pub mod hotels;
pub mod room_types;
pub mod seed;
pub mod statuses;
pub mod transfer;
