//! Export, template and import commands

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::*;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::repository::SqliteHotelStore;
use crate::services::{ExportedFile, HotelImportExport, ImportSummary};

fn service(pool: &SqlitePool, config: &Config) -> HotelImportExport<SqliteHotelStore> {
    HotelImportExport::new(SqliteHotelStore::new(pool.clone())).with_export_dir(&config.export_dir)
}

pub async fn handle_export(pool: &SqlitePool, config: &Config, output: Option<PathBuf>) -> Result<()> {
    let file = service(pool, config).export_hotels().await?;
    deliver(&file, output)
}

pub fn handle_template(pool: &SqlitePool, config: &Config, output: Option<PathBuf>) -> Result<()> {
    let file = service(pool, config).create_import_template()?;
    deliver(&file, output)
}

pub async fn handle_import(pool: &SqlitePool, config: &Config, file: &Path, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("Import file does not exist: {}", file.display());
    }

    let summary = service(pool, config).import_hotels_from_path(file).await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to format JSON output")?
        );
    } else {
        print_summary(&summary);
    }

    if !summary.success {
        anyhow::bail!("Import of {} failed", file.display());
    }
    Ok(())
}

fn print_summary(summary: &ImportSummary) {
    if summary.success {
        println!(
            "Imported {} hotels",
            summary.import_count.to_string().bright_green().bold()
        );
    }

    if summary.has_errors() {
        println!("{}", format!("{} rows rejected:", summary.errors.len()).yellow());
        for error in &summary.errors {
            println!("  {} {}", "-".dimmed(), error);
        }
    }
}

/// Move a produced file to `output` when given, then report where it is
fn deliver(file: &ExportedFile, output: Option<PathBuf>) -> Result<()> {
    let Some(output) = output else {
        println!("File written to: {}", file.file_path.display().to_string().bright_green());
        println!("Suggested name: {}", file.file_name.cyan());
        return Ok(());
    };

    let target = if output.is_dir() {
        output.join(&file.file_name)
    } else {
        output
    };

    fs::copy(&file.file_path, &target)
        .with_context(|| format!("Failed to write output to: {}", target.display()))?;
    fs::remove_file(&file.file_path)
        .with_context(|| format!("Failed to remove temporary file: {}", file.file_path.display()))?;

    println!("File saved to: {}", target.display().to_string().bright_green());
    Ok(())
}
