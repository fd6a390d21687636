use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::services::room_type_options;

/// Print the room types of a hotel as a JSON array of `{id, name}`
pub async fn handle_room_types(pool: &SqlitePool, hotel_id: Option<&str>) -> Result<()> {
    let options = room_type_options(pool, hotel_id).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&options).context("Failed to format JSON output")?
    );
    Ok(())
}
