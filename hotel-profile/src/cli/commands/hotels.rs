//! Hotel listing and status commands

use anyhow::Result;
use colored::*;
use sqlx::SqlitePool;

use crate::model::{Hotel, HotelStatus};
use crate::repository::hotels;

pub async fn handle_list(
    pool: &SqlitePool,
    status: Option<HotelStatus>,
    star_level: Option<i64>,
    name: Option<&str>,
) -> Result<()> {
    let hotels = find_hotels(pool, status, star_level, name).await?;

    if hotels.is_empty() {
        println!("{}", "No hotels found".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:>5}  {:<30}  {:<5}  {:<20}  {:<10}",
            "ID", "Name", "Stars", "Phone", "Status"
        )
        .bold()
    );
    for hotel in &hotels {
        println!("{}", format_row(hotel));
    }
    println!("{}", format!("{} hotels", hotels.len()).dimmed());

    Ok(())
}

pub async fn handle_set_status(pool: &SqlitePool, id: i64, status: HotelStatus) -> Result<()> {
    hotels::update_hotel_status(pool, id, status).await?;
    println!("Hotel {} is now {}", id, colored_status(status));
    Ok(())
}

/// Narrowest query first, then the remaining filters in memory
async fn find_hotels(
    pool: &SqlitePool,
    status: Option<HotelStatus>,
    star_level: Option<i64>,
    name: Option<&str>,
) -> Result<Vec<Hotel>> {
    let mut found = match (name, status, star_level) {
        (Some(fragment), _, _) => hotels::search_hotels_by_name(pool, fragment).await?,
        (None, Some(status), _) => hotels::list_hotels_by_status(pool, status).await?,
        (None, None, Some(star_level)) => hotels::list_hotels_by_star_level(pool, star_level).await?,
        (None, None, None) => hotels::list_hotels(pool).await?,
    };

    found.retain(|h| {
        status.is_none_or(|s| h.status == s) && star_level.is_none_or(|n| h.star_level == n)
    });
    Ok(found)
}

fn format_row(hotel: &Hotel) -> String {
    format!(
        "{:>5}  {:<30}  {:<5}  {:<20}  {}",
        hotel.id,
        truncate(&hotel.name, 30),
        "*".repeat(hotel.star_level.clamp(0, 5) as usize),
        truncate(&hotel.phone, 20),
        colored_status(hotel.status)
    )
}

fn colored_status(status: HotelStatus) -> ColoredString {
    match status {
        HotelStatus::Operating => status.label().green(),
        HotelStatus::Suspended => status.label().yellow(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
