//! Hotel and room-type records

pub mod hotel;
pub mod room_type;
mod status;

pub use hotel::{Hotel, NewHotel};
pub use room_type::{NewRoomType, RoomType, RoomTypeOption};
pub use status::{HotelStatus, RoomTypeStatus};
