//! Room-type lookup for selection lists

use anyhow::Result;
use sqlx::SqlitePool;

use crate::model::RoomTypeOption;
use crate::repository::room_types;

/// Room types of one hotel as `(id, name)` pairs, sorted by name
///
/// The hotel id arrives as raw request text. A missing, empty or non-integer
/// id yields an empty list rather than an error.
pub async fn room_type_options(pool: &SqlitePool, hotel_id: Option<&str>) -> Result<Vec<RoomTypeOption>> {
    let Some(hotel_id) = hotel_id.and_then(parse_hotel_id) else {
        log::debug!("Room type lookup without a usable hotel id: {:?}", hotel_id);
        return Ok(Vec::new());
    };

    room_types::list_room_type_options(pool, hotel_id).await
}

fn parse_hotel_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
