//! Closed status sets for hotels and room types

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Operating status of a hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotelStatus {
    #[default]
    Operating,
    Suspended,
}

impl HotelStatus {
    pub const ALL: [HotelStatus; 2] = [HotelStatus::Operating, HotelStatus::Suspended];

    /// Value stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            HotelStatus::Operating => "operating",
            HotelStatus::Suspended => "suspended",
        }
    }

    /// Human readable label, used in exports
    pub fn label(&self) -> &'static str {
        match self {
            HotelStatus::Operating => "Operating",
            HotelStatus::Suspended => "Suspended",
        }
    }

    /// (value, label) pairs for select widgets
    pub fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
    }
}

impl std::fmt::Display for HotelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HotelStatus {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "operating" => Ok(HotelStatus::Operating),
            "suspended" => Ok(HotelStatus::Suspended),
            other => Err(ProfileError::UnknownStatus(other.to_string())),
        }
    }
}

/// Availability of a room type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomTypeStatus {
    #[default]
    Active,
    Disabled,
}

impl RoomTypeStatus {
    pub const ALL: [RoomTypeStatus; 2] = [RoomTypeStatus::Active, RoomTypeStatus::Disabled];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomTypeStatus::Active => "active",
            RoomTypeStatus::Disabled => "disabled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomTypeStatus::Active => "Active",
            RoomTypeStatus::Disabled => "Disabled",
        }
    }

    pub fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
    }
}

impl std::fmt::Display for RoomTypeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomTypeStatus {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(RoomTypeStatus::Active),
            "disabled" => Ok(RoomTypeStatus::Disabled),
            other => Err(ProfileError::UnknownStatus(other.to_string())),
        }
    }
}
