//! Record store consumed by the import/export pipeline
//!
//! Imports accumulate creates and updates in an [`ImportBatch`]; nothing
//! touches the database until [`HotelStore::commit`] applies the whole batch
//! in one transaction.

use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::hotels;
use crate::model::{Hotel, NewHotel};

/// A pending change to the hotel table
#[derive(Debug, Clone, PartialEq)]
pub enum HotelChange {
    Create(NewHotel),
    Update(Hotel),
}

impl HotelChange {
    pub fn name(&self) -> &str {
        match self {
            HotelChange::Create(hotel) => &hotel.name,
            HotelChange::Update(hotel) => &hotel.name,
        }
    }

    /// Fold a later import row for the same name into this change
    pub fn apply_import(&mut self, row: &NewHotel) {
        match self {
            HotelChange::Create(hotel) => hotel.apply_import(row),
            HotelChange::Update(hotel) => hotel.apply_import(row),
        }
    }
}

/// Changes accumulated during one import, indexed by hotel name
#[derive(Debug, Default)]
pub struct ImportBatch {
    changes: Vec<HotelChange>,
    by_name: HashMap<String, usize>,
}

impl ImportBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a new hotel for insertion
    pub fn persist(&mut self, hotel: NewHotel) {
        self.push(HotelChange::Create(hotel));
    }

    /// Queue an existing hotel to be written back
    pub fn update(&mut self, hotel: Hotel) {
        self.push(HotelChange::Update(hotel));
    }

    fn push(&mut self, change: HotelChange) {
        self.by_name.insert(change.name().to_string(), self.changes.len());
        self.changes.push(change);
    }

    /// Pending change for a hotel name, if one was queued in this batch
    pub fn pending_mut(&mut self, name: &str) -> Option<&mut HotelChange> {
        let idx = *self.by_name.get(name)?;
        self.changes.get_mut(idx)
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn create_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, HotelChange::Create(_)))
            .count()
    }

    pub fn update_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, HotelChange::Update(_)))
            .count()
    }

    pub fn into_changes(self) -> Vec<HotelChange> {
        self.changes
    }
}

/// Outcome of a batch commit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    /// Ids assigned to newly created hotels, in batch order
    pub created: Vec<i64>,
    pub updated: usize,
}

/// Persistence abstraction for hotel records
#[async_trait]
pub trait HotelStore: Send + Sync {
    /// Every hotel, in store iteration order
    async fn find_all(&self) -> Result<Vec<Hotel>>;

    /// Exact (case- and whitespace-sensitive) name match
    async fn find_by_name(&self, name: &str) -> Result<Option<Hotel>>;

    /// Apply the batch atomically
    async fn commit(&self, batch: ImportBatch) -> Result<CommitReport>;
}

/// [`HotelStore`] backed by the SQLite hotel table
#[derive(Debug, Clone)]
pub struct SqliteHotelStore {
    pool: SqlitePool,
}

impl SqliteHotelStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl HotelStore for SqliteHotelStore {
    async fn find_all(&self) -> Result<Vec<Hotel>> {
        hotels::list_hotels(&self.pool).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Hotel>> {
        hotels::find_hotel_by_name(&self.pool, name).await
    }

    async fn commit(&self, batch: ImportBatch) -> Result<CommitReport> {
        let mut report = CommitReport::default();
        if batch.is_empty() {
            return Ok(report);
        }

        let mut tx = self.pool.begin().await.context("Failed to start transaction")?;

        for change in batch.into_changes() {
            match change {
                HotelChange::Create(hotel) => {
                    let id = hotels::insert_hotel_with(&mut *tx, &hotel).await?;
                    report.created.push(id);
                }
                HotelChange::Update(hotel) => {
                    hotels::update_hotel_with(&mut *tx, &hotel).await?;
                    report.updated += 1;
                }
            }
        }

        tx.commit().await.context("Failed to commit transaction")?;

        log::debug!(
            "Committed hotel batch: {} created, {} updated",
            report.created.len(),
            report.updated
        );
        Ok(report)
    }
}
