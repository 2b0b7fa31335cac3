//! Demo booking data for the back office.
//!
//! The section initializer seeds the store from this module; the table is
//! rendered from the store, never scraped back out of the markup.

use contracts::domain::booking::{Booking, BookingStatus};
use contracts::domain::common::EntityMetadata;

const CUSTOMERS: [&str; 14] = [
    "Ahmed Hassan",
    "Sarah Smith",
    "Mohammed Ali",
    "Fatima Khan",
    "Omar Abdullah",
    "Aisha Rahman",
    "Yusuf Ibrahim",
    "Daniel Smith",
    "Khalid Mansour",
    "Maryam Siddiqui",
    "Bilal Ahmed",
    "Zainab Hussain",
    "Hamza Sheikh",
    "Layla Mahmoud",
];

const PACKAGES: [&str; 6] = [
    "Premium Umrah Package",
    "Economy Umrah Package",
    "Family Umrah Package",
    "Ramadan Special Package",
    "Deluxe Umrah Package",
    "Group Umrah Package",
];

pub const SEED_COUNT: usize = 42;

pub fn seed_bookings() -> Vec<Booking> {
    (0..SEED_COUNT)
        .map(|i| {
            let customer = CUSTOMERS[i % CUSTOMERS.len()];
            let status = match i % 3 {
                0 => BookingStatus::Confirmed,
                1 => BookingStatus::Pending,
                _ => BookingStatus::Cancelled,
            };
            let month = 9 + i / CUSTOMERS.len();
            let day = 2 + (i * 3) % 27;

            Booking {
                id: format!("BK-{}", 1001 + i),
                customer_name: customer.to_string(),
                package: PACKAGES[i % PACKAGES.len()].to_string(),
                travel_date: format!("2025-{:02}-{:02}", month, day),
                amount: 1200.0 + (i % 7) as f64 * 350.0,
                status,
                email: format!(
                    "{}@example.com",
                    customer.to_lowercase().replace(' ', ".")
                ),
                phone: format!("+1 234-567-{:04}", 8900 + i * 7),
                passport: format!("AB{}", 100200 + i * 37),
                notes: String::new(),
                metadata: EntityMetadata::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let bookings = seed_bookings();
        assert_eq!(bookings.len(), 42);

        // Identifiers are unique and sequential.
        assert_eq!(bookings[0].id, "BK-1001");
        assert_eq!(bookings[41].id, "BK-1042");

        // All three statuses are represented.
        for status in BookingStatus::ALL {
            assert!(bookings.iter().any(|b| b.status == status));
        }

        // At least one cancelled Smith, for the filter+search flows.
        assert!(bookings
            .iter()
            .any(|b| b.status == BookingStatus::Cancelled && b.customer_name.contains("Smith")));
    }
}
