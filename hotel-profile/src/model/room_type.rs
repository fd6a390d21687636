//! Room types, always owned by one hotel

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RoomTypeStatus;
use super::hotel::{check_length, require_non_empty};
use crate::error::ProfileError;

pub mod limits {
    pub const NAME: usize = 100;
    pub const CODE: usize = 20;
    pub const BED_TYPE: usize = 100;
}

/// A stored room type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: i64,
    pub hotel_id: i64,
    pub name: String,
    pub code: Option<String>,
    /// Square metres
    pub area: f64,
    pub bed_type: String,
    pub max_guests: i64,
    pub breakfast_count: i64,
    pub photos: Vec<String>,
    pub description: Option<String>,
    pub status: RoomTypeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A room type that has not been stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoomType {
    pub hotel_id: i64,
    pub name: String,
    pub code: Option<String>,
    pub area: f64,
    pub bed_type: String,
    pub max_guests: i64,
    pub breakfast_count: i64,
    pub photos: Vec<String>,
    pub description: Option<String>,
    pub status: RoomTypeStatus,
}

impl NewRoomType {
    pub fn new(hotel_id: i64, name: impl Into<String>, area: f64, bed_type: impl Into<String>) -> Self {
        NewRoomType {
            hotel_id,
            name: name.into(),
            code: None,
            area,
            bed_type: bed_type.into(),
            max_guests: 2,
            breakfast_count: 0,
            photos: Vec::new(),
            description: None,
            status: RoomTypeStatus::Active,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_guests(mut self, max_guests: i64, breakfast_count: i64) -> Self {
        self.max_guests = max_guests;
        self.breakfast_count = breakfast_count;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_photos(mut self, photos: &[&str]) -> Self {
        self.photos = photos.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_status(mut self, status: RoomTypeStatus) -> Self {
        self.status = status;
        self
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("bed type", &self.bed_type)?;
        check_length("name", &self.name, limits::NAME)?;
        check_length("bed type", &self.bed_type, limits::BED_TYPE)?;
        if let Some(code) = &self.code {
            check_length("code", code, limits::CODE)?;
        }

        if !(self.area > 0.0) {
            return Err(ProfileError::InvalidField { field: "area", reason: "must be positive" });
        }
        if self.max_guests <= 0 {
            return Err(ProfileError::InvalidField {
                field: "max guests",
                reason: "must be positive",
            });
        }
        if self.breakfast_count < 0 {
            return Err(ProfileError::InvalidField {
                field: "breakfast count",
                reason: "must not be negative",
            });
        }

        Ok(())
    }
}

/// Entry of the room-type dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoomTypeOption {
    pub id: i64,
    pub name: String,
}
