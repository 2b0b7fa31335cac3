//! In-memory store for the package table. Plain CRUD, no view transforms:
//! the catalog is small enough to show in full.

use contracts::domain::common::EntityMetadata;
use contracts::domain::package::{PackageDraft, TourPackage};

#[derive(Debug, Clone)]
pub struct PackageStore {
    records: Vec<TourPackage>,
    next_seq: usize,
}

impl PackageStore {
    pub fn new(records: Vec<TourPackage>) -> Self {
        let next_seq = records.len();
        Self { records, next_seq }
    }

    pub fn records(&self) -> &[TourPackage] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&TourPackage> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn add(&mut self, draft: PackageDraft) -> String {
        self.next_seq += 1;
        let id = format!("PKG-{:03}", self.next_seq);
        self.records.push(draft.into_package(id.clone()));
        id
    }

    pub fn apply_edit(&mut self, id: &str, draft: &PackageDraft) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.apply(draft);
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }
}

pub fn seed_packages() -> Vec<TourPackage> {
    let catalog: [(&str, &str, u32, f64, u32); 6] = [
        ("Premium Umrah Package", "Makkah & Madinah", 21, 2400.0, 40),
        ("Economy Umrah Package", "Makkah & Madinah", 14, 1200.0, 60),
        ("Family Umrah Package", "Makkah & Madinah", 18, 1900.0, 35),
        ("Ramadan Special Package", "Makkah & Madinah", 30, 3200.0, 50),
        ("Deluxe Umrah Package", "Makkah, Madinah & Jeddah", 25, 2850.0, 25),
        ("Group Umrah Package", "Makkah & Madinah", 15, 1550.0, 80),
    ];

    catalog
        .into_iter()
        .enumerate()
        .map(|(i, (name, destination, duration_days, price, seats))| TourPackage {
            id: format!("PKG-{:03}", i + 1),
            name: name.to_string(),
            destination: destination.to_string(),
            duration_days,
            price,
            seats,
            metadata: EntityMetadata::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_delete() {
        let mut store = PackageStore::new(seed_packages());
        assert_eq!(store.records().len(), 6);

        let draft = PackageDraft {
            name: "Winter Umrah Package".to_string(),
            destination: "Makkah & Madinah".to_string(),
            duration_days: "12".to_string(),
            price: "1400".to_string(),
            seats: "30".to_string(),
        };
        let id = store.add(draft.clone());
        assert_eq!(id, "PKG-007");
        assert!(store.get(&id).is_some());

        assert!(store.delete(&id));
        assert!(store.get(&id).is_none());

        // Identifiers are not reused after deletion.
        assert_eq!(store.add(draft), "PKG-008");
    }

    #[test]
    fn test_apply_edit() {
        let mut store = PackageStore::new(seed_packages());
        let mut draft = PackageDraft::from_package(store.get("PKG-001").unwrap());
        draft.price = "2550".to_string();
        assert!(store.apply_edit("PKG-001", &draft));
        assert_eq!(store.get("PKG-001").unwrap().price, 2550.0);
        assert!(!store.apply_edit("PKG-999", &draft));
    }
}
