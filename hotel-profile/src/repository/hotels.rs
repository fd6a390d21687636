//! Repository for hotel records

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

use super::{decode_string_list, encode_string_list};
use crate::error::ProfileError;
use crate::model::{Hotel, HotelStatus, NewHotel};

const HOTEL_COLUMNS: &str = "id, name, address, star_level, contact_person, phone, email, \
                             photos, facilities, status, created_at, updated_at";

fn hotel_from_row(row: &SqliteRow) -> Result<Hotel> {
    let status: String = row.try_get("status")?;

    Ok(Hotel {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        star_level: row.try_get("star_level")?,
        contact_person: row.try_get("contact_person")?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        status: status.parse()?,
        facilities: decode_string_list(row.try_get("facilities")?),
        photos: decode_string_list(row.try_get("photos")?),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn hotels_from_rows(rows: Vec<SqliteRow>) -> Result<Vec<Hotel>> {
    rows.iter().map(hotel_from_row).collect()
}

/// List all hotels in id order
pub async fn list_hotels(pool: &SqlitePool) -> Result<Vec<Hotel>> {
    let rows = sqlx::query(&format!("SELECT {HOTEL_COLUMNS} FROM hotels ORDER BY id"))
        .fetch_all(pool)
        .await
        .context("Failed to list hotels")?;

    hotels_from_rows(rows)
}

/// Get a hotel by id
pub async fn get_hotel(pool: &SqlitePool, id: i64) -> Result<Option<Hotel>> {
    let row = sqlx::query(&format!("SELECT {HOTEL_COLUMNS} FROM hotels WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("Failed to get hotel")?;

    row.as_ref().map(hotel_from_row).transpose()
}

/// Find the first hotel whose name matches exactly (case and whitespace significant)
pub async fn find_hotel_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Hotel>> {
    let row = sqlx::query(&format!(
        "SELECT {HOTEL_COLUMNS} FROM hotels WHERE name = ? ORDER BY id LIMIT 1"
    ))
    .bind(name)
    .fetch_optional(pool)
    .await
    .context("Failed to find hotel by name")?;

    row.as_ref().map(hotel_from_row).transpose()
}

/// Hotels whose name contains the fragment
pub async fn search_hotels_by_name(pool: &SqlitePool, fragment: &str) -> Result<Vec<Hotel>> {
    let rows = sqlx::query(&format!(
        "SELECT {HOTEL_COLUMNS} FROM hotels WHERE name LIKE '%' || ? || '%' ORDER BY id"
    ))
    .bind(fragment)
    .fetch_all(pool)
    .await
    .context("Failed to search hotels by name")?;

    hotels_from_rows(rows)
}

pub async fn list_hotels_by_star_level(pool: &SqlitePool, star_level: i64) -> Result<Vec<Hotel>> {
    let rows = sqlx::query(&format!(
        "SELECT {HOTEL_COLUMNS} FROM hotels WHERE star_level = ? ORDER BY id"
    ))
    .bind(star_level)
    .fetch_all(pool)
    .await
    .context("Failed to list hotels by star level")?;

    hotels_from_rows(rows)
}

pub async fn list_hotels_by_status(pool: &SqlitePool, status: HotelStatus) -> Result<Vec<Hotel>> {
    let rows = sqlx::query(&format!(
        "SELECT {HOTEL_COLUMNS} FROM hotels WHERE status = ? ORDER BY id"
    ))
    .bind(status.as_str())
    .fetch_all(pool)
    .await
    .context("Failed to list hotels by status")?;

    hotels_from_rows(rows)
}

pub async fn list_operating_hotels(pool: &SqlitePool) -> Result<Vec<Hotel>> {
    list_hotels_by_status(pool, HotelStatus::Operating).await
}

/// Insert a hotel and return its new id
pub async fn insert_hotel(pool: &SqlitePool, hotel: &NewHotel) -> Result<i64> {
    let mut conn = pool.acquire().await.context("Failed to acquire connection")?;
    insert_hotel_with(&mut conn, hotel).await
}

pub(crate) async fn insert_hotel_with(conn: &mut SqliteConnection, hotel: &NewHotel) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO hotels (
            name, address, star_level, contact_person, phone, email,
            photos, facilities, status, created_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&hotel.name)
    .bind(&hotel.address)
    .bind(hotel.star_level)
    .bind(&hotel.contact_person)
    .bind(&hotel.phone)
    .bind(&hotel.email)
    .bind(encode_string_list(&hotel.photos)?)
    .bind(encode_string_list(&hotel.facilities)?)
    .bind(hotel.status.as_str())
    .bind(Utc::now())
    .execute(&mut *conn)
    .await
    .with_context(|| format!("Failed to insert hotel: {}", hotel.name))?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every mutable field of a stored hotel
pub async fn update_hotel(pool: &SqlitePool, hotel: &Hotel) -> Result<()> {
    let mut conn = pool.acquire().await.context("Failed to acquire connection")?;
    update_hotel_with(&mut conn, hotel).await
}

pub(crate) async fn update_hotel_with(conn: &mut SqliteConnection, hotel: &Hotel) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE hotels
        SET name = ?, address = ?, star_level = ?, contact_person = ?, phone = ?,
            email = ?, photos = ?, facilities = ?, status = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&hotel.name)
    .bind(&hotel.address)
    .bind(hotel.star_level)
    .bind(&hotel.contact_person)
    .bind(&hotel.phone)
    .bind(&hotel.email)
    .bind(encode_string_list(&hotel.photos)?)
    .bind(encode_string_list(&hotel.facilities)?)
    .bind(hotel.status.as_str())
    .bind(Utc::now())
    .bind(hotel.id)
    .execute(&mut *conn)
    .await
    .with_context(|| format!("Failed to update hotel {}", hotel.id))?;

    if result.rows_affected() == 0 {
        return Err(ProfileError::HotelNotFound(hotel.id).into());
    }

    Ok(())
}

/// Change only the status of a hotel
pub async fn update_hotel_status(pool: &SqlitePool, id: i64, status: HotelStatus) -> Result<()> {
    let result = sqlx::query("UPDATE hotels SET status = ?, updated_at = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to update hotel status")?;

    if result.rows_affected() == 0 {
        return Err(ProfileError::HotelNotFound(id).into());
    }

    log::info!("Hotel {} status set to {}", id, status);
    Ok(())
}

/// Delete a hotel; its room types go with it
pub async fn delete_hotel(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM hotels WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to delete hotel")?;

    Ok(result.rows_affected() > 0)
}
