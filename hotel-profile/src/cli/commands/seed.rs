use anyhow::Result;
use colored::*;
use sqlx::SqlitePool;

use crate::fixtures;

pub async fn handle_seed(pool: &SqlitePool) -> Result<()> {
    let report = fixtures::seed(pool).await?;

    println!(
        "Seeded {} hotels and {} room types",
        report.hotels.to_string().bright_green().bold(),
        report.room_types.to_string().bright_green().bold()
    );
    if report.skipped > 0 {
        println!("{}", format!("{} hotels already existed", report.skipped).dimmed());
    }
    Ok(())
}
