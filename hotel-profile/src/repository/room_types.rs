//! Repository for room types

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::{decode_string_list, encode_string_list};
use crate::model::{NewRoomType, RoomType, RoomTypeOption, RoomTypeStatus};

const ROOM_TYPE_COLUMNS: &str = "rt.id, rt.hotel_id, rt.name, rt.code, rt.area, rt.bed_type, \
                                 rt.max_guests, rt.breakfast_count, rt.photos, rt.description, \
                                 rt.status, rt.created_at, rt.updated_at";

fn room_type_from_row(row: &SqliteRow) -> Result<RoomType> {
    let status: String = row.try_get("status")?;

    Ok(RoomType {
        id: row.try_get("id")?,
        hotel_id: row.try_get("hotel_id")?,
        name: row.try_get("name")?,
        code: row.try_get("code")?,
        area: row.try_get("area")?,
        bed_type: row.try_get("bed_type")?,
        max_guests: row.try_get("max_guests")?,
        breakfast_count: row.try_get("breakfast_count")?,
        photos: decode_string_list(row.try_get("photos")?),
        description: row.try_get("description")?,
        status: status.parse()?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn room_types_from_rows(rows: Vec<SqliteRow>) -> Result<Vec<RoomType>> {
    rows.iter().map(room_type_from_row).collect()
}

pub async fn list_room_types(pool: &SqlitePool) -> Result<Vec<RoomType>> {
    let rows = sqlx::query(&format!(
        "SELECT {ROOM_TYPE_COLUMNS} FROM room_types rt ORDER BY rt.id"
    ))
    .fetch_all(pool)
    .await
    .context("Failed to list room types")?;

    room_types_from_rows(rows)
}

/// All room types paired with their hotel's name, ordered by hotel name then room name
pub async fn list_room_types_with_hotel(pool: &SqlitePool) -> Result<Vec<(RoomType, String)>> {
    let rows = sqlx::query(&format!(
        r#"
        SELECT {ROOM_TYPE_COLUMNS}, h.name AS hotel_name
        FROM room_types rt
        JOIN hotels h ON h.id = rt.hotel_id
        ORDER BY h.name, rt.name
        "#
    ))
    .fetch_all(pool)
    .await
    .context("Failed to list room types with hotels")?;

    let mut result = Vec::with_capacity(rows.len());
    for row in &rows {
        result.push((room_type_from_row(row)?, row.try_get("hotel_name")?));
    }

    Ok(result)
}

pub async fn list_room_types_by_status(
    pool: &SqlitePool,
    status: RoomTypeStatus,
) -> Result<Vec<RoomType>> {
    let rows = sqlx::query(&format!(
        "SELECT {ROOM_TYPE_COLUMNS} FROM room_types rt WHERE rt.status = ? ORDER BY rt.id"
    ))
    .bind(status.as_str())
    .fetch_all(pool)
    .await
    .context("Failed to list room types by status")?;

    room_types_from_rows(rows)
}

pub async fn list_active_room_types(pool: &SqlitePool) -> Result<Vec<RoomType>> {
    list_room_types_by_status(pool, RoomTypeStatus::Active).await
}

/// Room types of one hotel in id order
pub async fn list_room_types_by_hotel(pool: &SqlitePool, hotel_id: i64) -> Result<Vec<RoomType>> {
    let rows = sqlx::query(&format!(
        "SELECT {ROOM_TYPE_COLUMNS} FROM room_types rt WHERE rt.hotel_id = ? ORDER BY rt.id"
    ))
    .bind(hotel_id)
    .fetch_all(pool)
    .await
    .context("Failed to list room types by hotel")?;

    room_types_from_rows(rows)
}

pub async fn list_room_types_by_hotel_and_status(
    pool: &SqlitePool,
    hotel_id: i64,
    status: RoomTypeStatus,
) -> Result<Vec<RoomType>> {
    let rows = sqlx::query(&format!(
        "SELECT {ROOM_TYPE_COLUMNS} FROM room_types rt \
         WHERE rt.hotel_id = ? AND rt.status = ? ORDER BY rt.id"
    ))
    .bind(hotel_id)
    .bind(status.as_str())
    .fetch_all(pool)
    .await
    .context("Failed to list room types by hotel and status")?;

    room_types_from_rows(rows)
}

pub async fn get_room_type(pool: &SqlitePool, id: i64) -> Result<Option<RoomType>> {
    let row = sqlx::query(&format!(
        "SELECT {ROOM_TYPE_COLUMNS} FROM room_types rt WHERE rt.id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("Failed to get room type")?;

    row.as_ref().map(room_type_from_row).transpose()
}

pub async fn get_room_types_by_ids(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<RoomType>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!(
        "SELECT {ROOM_TYPE_COLUMNS} FROM room_types rt WHERE rt.id IN ({placeholders}) ORDER BY rt.id"
    );

    let mut query = sqlx::query(&sql);
    for id in ids {
        query = query.bind(*id);
    }

    let rows = query
        .fetch_all(pool)
        .await
        .context("Failed to get room types by ids")?;

    room_types_from_rows(rows)
}

pub async fn find_room_type_by_hotel_and_name(
    pool: &SqlitePool,
    hotel_id: i64,
    name: &str,
) -> Result<Option<RoomType>> {
    let row = sqlx::query(&format!(
        "SELECT {ROOM_TYPE_COLUMNS} FROM room_types rt \
         WHERE rt.hotel_id = ? AND rt.name = ? ORDER BY rt.id LIMIT 1"
    ))
    .bind(hotel_id)
    .bind(name)
    .fetch_optional(pool)
    .await
    .context("Failed to find room type by hotel and name")?;

    row.as_ref().map(room_type_from_row).transpose()
}

/// (id, name) of every room type of a hotel, sorted by name, any status
pub async fn list_room_type_options(pool: &SqlitePool, hotel_id: i64) -> Result<Vec<RoomTypeOption>> {
    sqlx::query_as::<_, RoomTypeOption>(
        "SELECT id, name FROM room_types WHERE hotel_id = ? ORDER BY name ASC",
    )
    .bind(hotel_id)
    .fetch_all(pool)
    .await
    .context("Failed to list room type options")
}

/// Validate and insert a room type, returning its id
pub async fn insert_room_type(pool: &SqlitePool, room_type: &NewRoomType) -> Result<i64> {
    room_type
        .validate()
        .with_context(|| format!("Invalid room type: {}", room_type.name))?;

    let result = sqlx::query(
        r#"
        INSERT INTO room_types (
            hotel_id, name, code, area, bed_type, max_guests, breakfast_count,
            photos, description, status, created_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(room_type.hotel_id)
    .bind(&room_type.name)
    .bind(&room_type.code)
    .bind(room_type.area)
    .bind(&room_type.bed_type)
    .bind(room_type.max_guests)
    .bind(room_type.breakfast_count)
    .bind(encode_string_list(&room_type.photos)?)
    .bind(&room_type.description)
    .bind(room_type.status.as_str())
    .bind(Utc::now())
    .execute(pool)
    .await
    .with_context(|| format!("Failed to insert room type: {}", room_type.name))?;

    Ok(result.last_insert_rowid())
}

pub async fn delete_room_type(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM room_types WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to delete room type")?;

    Ok(result.rows_affected() > 0)
}
