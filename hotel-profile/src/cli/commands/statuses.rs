use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::model::{HotelStatus, RoomTypeStatus};

pub fn handle_statuses() -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&status_options()).context("Failed to format JSON output")?
    );
    Ok(())
}

/// `{value, label}` entries for every hotel and room-type status
fn status_options() -> Value {
    let entries = |options: Vec<(&str, &str)>| -> Vec<Value> {
        options
            .into_iter()
            .map(|(value, label)| json!({ "value": value, "label": label }))
            .collect()
    };

    json!({
        "hotel": entries(HotelStatus::options()),
        "room_type": entries(RoomTypeStatus::options()),
    })
}
