use serde::{Deserialize, Serialize};

use crate::domain::common::EntityMetadata;
use crate::validation::{require, require_positive_number, FieldError};

/// A travel package offered by the agency. Plain CRUD; packages have no
/// lifecycle machine the way bookings do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourPackage {
    pub id: String,
    pub name: String,
    pub destination: String,
    pub duration_days: u32,
    pub price: f64,
    pub seats: u32,
    pub metadata: EntityMetadata,
}

impl TourPackage {
    pub fn apply(&mut self, draft: &PackageDraft) {
        self.name = draft.name.trim().to_string();
        self.destination = draft.destination.trim().to_string();
        self.duration_days = draft.duration_days.trim().parse().unwrap_or(self.duration_days);
        self.price = draft.price.trim().parse().unwrap_or(self.price);
        self.seats = draft.seats.trim().parse().unwrap_or(self.seats);
        self.metadata.touch();
    }
}

/// Form-side representation of a package.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageDraft {
    pub name: String,
    pub destination: String,
    pub duration_days: String,
    pub price: String,
    pub seats: String,
}

impl PackageDraft {
    pub fn from_package(package: &TourPackage) -> Self {
        Self {
            name: package.name.clone(),
            destination: package.destination.clone(),
            duration_days: package.duration_days.to_string(),
            price: package.price.to_string(),
            seats: package.seats.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors: Vec<FieldError> = [
            require("name", &self.name),
            require("destination", &self.destination),
            require_positive_number("price", &self.price),
        ]
        .into_iter()
        .flatten()
        .collect();

        if self.duration_days.trim().parse::<u32>().map_or(true, |d| d == 0) {
            errors.push(FieldError::new(
                "duration_days",
                "Please enter the duration in days",
            ));
        }
        if self.seats.trim().parse::<u32>().is_err() {
            errors.push(FieldError::new("seats", "Please enter the seat count"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn into_package(self, id: String) -> TourPackage {
        TourPackage {
            id,
            name: self.name.trim().to_string(),
            destination: self.destination.trim().to_string(),
            duration_days: self.duration_days.trim().parse().unwrap_or(0),
            price: self.price.trim().parse().unwrap_or(0.0),
            seats: self.seats.trim().parse().unwrap_or(0),
            metadata: EntityMetadata::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PackageDraft {
        PackageDraft {
            name: "Premium Umrah Package".to_string(),
            destination: "Makkah & Madinah".to_string(),
            duration_days: "21".to_string(),
            price: "2400".to_string(),
            seats: "40".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_builds_package() {
        let package = draft().into_package("PKG-001".to_string());
        assert_eq!(package.id, "PKG-001");
        assert_eq!(package.duration_days, 21);
        assert_eq!(package.seats, 40);
    }

    #[test]
    fn test_validation_flags_fields() {
        let mut d = draft();
        d.name.clear();
        d.price = "free".to_string();
        d.duration_days = "0".to_string();
        let errors = d.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"price"));
        assert!(fields.contains(&"duration_days"));
    }

    #[test]
    fn test_apply_updates_fields() {
        let mut package = draft().into_package("PKG-001".to_string());
        let mut d = PackageDraft::from_package(&package);
        d.price = "2650".to_string();
        package.apply(&d);
        assert_eq!(package.price, 2650.0);
        assert_eq!(package.id, "PKG-001");
    }
}
