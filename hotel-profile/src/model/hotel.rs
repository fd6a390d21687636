//! Hotel records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::HotelStatus;
use crate::error::ProfileError;

/// Column length limits for hotel fields
pub mod limits {
    pub const NAME: usize = 100;
    pub const ADDRESS: usize = 255;
    pub const CONTACT_PERSON: usize = 50;
    pub const PHONE: usize = 20;
    pub const EMAIL: usize = 100;
}

/// A stored hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub address: String,
    /// 1-5
    pub star_level: i64,
    pub contact_person: String,
    pub phone: String,
    pub email: Option<String>,
    pub status: HotelStatus,
    pub facilities: Vec<String>,
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Hotel {
    /// Take over the fields an import row carries; name, status and the rest stay
    pub fn apply_import(&mut self, row: &NewHotel) {
        self.address = row.address.clone();
        self.star_level = row.star_level;
        self.contact_person = row.contact_person.clone();
        self.phone = row.phone.clone();
        self.email = row.email.clone();
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        validate_fields(
            &self.name,
            &self.address,
            self.star_level,
            &self.contact_person,
            &self.phone,
            self.email.as_deref(),
        )
    }
}

impl std::fmt::Display for Hotel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A hotel that has not been stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHotel {
    pub name: String,
    pub address: String,
    pub star_level: i64,
    pub contact_person: String,
    pub phone: String,
    pub email: Option<String>,
    pub status: HotelStatus,
    pub facilities: Vec<String>,
    pub photos: Vec<String>,
}

impl NewHotel {
    /// Create a hotel with the required fields; star level defaults to 3
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        contact_person: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        NewHotel {
            name: name.into(),
            address: address.into(),
            star_level: 3,
            contact_person: contact_person.into(),
            phone: phone.into(),
            email: None,
            status: HotelStatus::Operating,
            facilities: Vec::new(),
            photos: Vec::new(),
        }
    }

    pub fn with_star_level(mut self, star_level: i64) -> Self {
        self.star_level = star_level;
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_status(mut self, status: HotelStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_facilities(mut self, facilities: &[&str]) -> Self {
        self.facilities = facilities.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_photos(mut self, photos: &[&str]) -> Self {
        self.photos = photos.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn apply_import(&mut self, row: &NewHotel) {
        self.address = row.address.clone();
        self.star_level = row.star_level;
        self.contact_person = row.contact_person.clone();
        self.phone = row.phone.clone();
        self.email = row.email.clone();
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        validate_fields(
            &self.name,
            &self.address,
            self.star_level,
            &self.contact_person,
            &self.phone,
            self.email.as_deref(),
        )
    }
}

fn validate_fields(
    name: &str,
    address: &str,
    star_level: i64,
    contact_person: &str,
    phone: &str,
    email: Option<&str>,
) -> Result<(), ProfileError> {
    require_non_empty("name", name)?;
    require_non_empty("address", address)?;
    require_non_empty("contact person", contact_person)?;
    require_non_empty("phone", phone)?;

    if !(1..=5).contains(&star_level) {
        return Err(ProfileError::InvalidField {
            field: "star level",
            reason: "must be between 1 and 5",
        });
    }

    check_length("name", name, limits::NAME)?;
    check_length("address", address, limits::ADDRESS)?;
    check_length("contact person", contact_person, limits::CONTACT_PERSON)?;
    check_length("phone", phone, limits::PHONE)?;
    if let Some(email) = email {
        check_length("email", email, limits::EMAIL)?;
    }

    Ok(())
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ProfileError> {
    if value.trim().is_empty() {
        return Err(ProfileError::InvalidField {
            field,
            reason: "must not be empty",
        });
    }
    Ok(())
}

pub(crate) fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ProfileError> {
    if value.chars().count() > max {
        return Err(ProfileError::FieldTooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewHotel {
        NewHotel::new("Harbour View", "1 Quay Street", "Alice", "13800000000").with_star_level(4)
    }

    #[test]
    fn test_new_hotel_defaults() {
        let hotel = NewHotel::new("A", "B", "C", "D");
        assert_eq!(hotel.star_level, 3);
        assert_eq!(hotel.status, HotelStatus::Operating);
        assert!(hotel.email.is_none());
        assert!(hotel.facilities.is_empty());
    }

    #[test]
    fn test_validate_accepts_valid_hotel() {
        assert!(sample().validate().is_ok());
        assert!(sample().with_star_level(1).validate().is_ok());
        assert!(sample().with_star_level(5).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_star_level_out_of_range() {
        assert!(sample().with_star_level(0).validate().is_err());
        assert!(sample().with_star_level(6).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_required_field() {
        let mut hotel = sample();
        hotel.address = "   ".to_string();
        let err = hotel.validate().unwrap_err();
        assert_eq!(err.to_string(), "address must not be empty");
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        let mut hotel = sample();
        hotel.name = "酒".repeat(limits::NAME);
        assert!(hotel.validate().is_ok());

        hotel.name.push('店');
        let err = hotel.validate().unwrap_err();
        assert_eq!(err.to_string(), "name exceeds 100 characters");
    }

    #[test]
    fn test_apply_import_keeps_identity_and_status() {
        let mut stored = Hotel {
            id: 11,
            name: "Harbour View".into(),
            address: "Old".into(),
            star_level: 2,
            contact_person: "Carol".into(),
            phone: "1".into(),
            email: Some("old@example.com".into()),
            status: HotelStatus::Suspended,
            facilities: vec!["Spa".into()],
            photos: Vec::new(),
            created_at: chrono::Utc::now(),
            updated_at: None,
        };

        stored.apply_import(&sample());

        assert_eq!(stored.id, 11);
        assert_eq!(stored.address, "1 Quay Street");
        assert_eq!(stored.star_level, 4);
        assert_eq!(stored.contact_person, "Alice");
        assert!(stored.email.is_none());
        assert_eq!(stored.status, HotelStatus::Suspended);
        assert_eq!(stored.facilities, vec!["Spa"]);
    }

    #[test]
    fn test_validate_checks_email_length() {
        let hotel = sample().with_email(format!("{}@example.com", "a".repeat(limits::EMAIL)));
        assert!(matches!(
            hotel.validate(),
            Err(ProfileError::FieldTooLong { field: "email", .. })
        ));
    }
}
