use serde::{Deserialize, Serialize};

use crate::domain::common::EntityMetadata;
use crate::validation::{require, require_email, require_positive_number, FieldError};

// ============================================================================
// Status state machine
// ============================================================================

/// Booking lifecycle status.
///
/// Transitions: `cancel` moves any status to `Cancelled` (idempotent),
/// `restore` moves `Cancelled` back to `Confirmed` and nothing else.
/// Editing a booking may set any status directly; that shortcut is a
/// separate path from cancel/restore on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    #[default]
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Confirmed,
        BookingStatus::Pending,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Status predicate applied by the table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookingStatus),
}

impl StatusFilter {
    pub fn admits(&self, status: BookingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn as_id(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        if id == "all" {
            return Some(StatusFilter::All);
        }
        BookingStatus::parse(id).map(StatusFilter::Only)
    }
}

/// Per-row action buttons. The set is derived from the status: cancelled
/// rows offer view/restore, everything else view/edit/cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Cancel,
    Restore,
}

// ============================================================================
// Record
// ============================================================================

/// One booking row. The identifier is assigned once and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub package: String,
    pub travel_date: String,
    pub amount: f64,
    pub status: BookingStatus,
    pub email: String,
    pub phone: String,
    pub passport: String,
    pub notes: String,
    pub metadata: EntityMetadata,
}

impl Booking {
    /// Any status → `Cancelled`. Returns whether anything changed, so a
    /// repeat cancel stays a cosmetic no-op.
    pub fn cancel(&mut self) -> bool {
        if self.status == BookingStatus::Cancelled {
            return false;
        }
        self.status = BookingStatus::Cancelled;
        self.metadata.touch();
        true
    }

    /// `Cancelled` → `Confirmed`. Restore never returns a booking to
    /// `Pending`; on any other status this is a guarded no-op.
    pub fn restore(&mut self) -> bool {
        if self.status != BookingStatus::Cancelled {
            return false;
        }
        self.status = BookingStatus::Confirmed;
        self.metadata.touch();
        true
    }

    /// Apply an edit. The identifier stays untouched; the status from the
    /// draft is applied directly, whatever the current status is.
    pub fn apply(&mut self, draft: &BookingDraft) {
        self.customer_name = draft.customer_name.trim().to_string();
        self.package = draft.package.trim().to_string();
        self.travel_date = draft.travel_date.trim().to_string();
        self.amount = draft.amount.trim().parse().unwrap_or(self.amount);
        self.status = draft.status;
        self.email = draft.email.trim().to_string();
        self.phone = draft.phone.trim().to_string();
        self.passport = draft.passport.trim().to_string();
        self.notes = draft.notes.trim().to_string();
        self.metadata.touch();
    }

    pub fn actions(&self) -> &'static [RowAction] {
        match self.status {
            BookingStatus::Cancelled => &[RowAction::View, RowAction::Restore],
            _ => &[RowAction::View, RowAction::Edit, RowAction::Cancel],
        }
    }

    /// Textual representation the search box matches against, mirroring a
    /// row's visible cell text.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.id,
            self.customer_name,
            self.package,
            self.travel_date,
            self.amount,
            self.status.label()
        )
    }

    /// Case-insensitive substring match over the row text. An empty term
    /// matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.search_text().to_lowercase().contains(&term)
    }
}

// ============================================================================
// Draft / form DTO
// ============================================================================

/// Form-side representation of a booking: everything is a string until
/// validation passes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDraft {
    pub customer_name: String,
    pub package: String,
    pub travel_date: String,
    pub amount: String,
    pub status: BookingStatus,
    pub email: String,
    pub phone: String,
    pub passport: String,
    pub notes: String,
}

impl BookingDraft {
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            customer_name: booking.customer_name.clone(),
            package: booking.package.clone(),
            travel_date: booking.travel_date.clone(),
            amount: booking.amount.to_string(),
            status: booking.status,
            email: booking.email.clone(),
            phone: booking.phone.clone(),
            passport: booking.passport.clone(),
            notes: booking.notes.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            require("customer_name", &self.customer_name),
            require("package", &self.package),
            require("travel_date", &self.travel_date),
            require_positive_number("amount", &self.amount),
            require_email("email", &self.email),
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build a new record from a validated draft.
    pub fn into_booking(self, id: String) -> Booking {
        Booking {
            id,
            customer_name: self.customer_name.trim().to_string(),
            package: self.package.trim().to_string(),
            travel_date: self.travel_date.trim().to_string(),
            amount: self.amount.trim().parse().unwrap_or(0.0),
            status: self.status,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            passport: self.passport.trim().to_string(),
            notes: self.notes.trim().to_string(),
            metadata: EntityMetadata::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(status: BookingStatus) -> Booking {
        Booking {
            id: "BK-1001".to_string(),
            customer_name: "Ahmed Hassan".to_string(),
            package: "Premium Umrah Package".to_string(),
            travel_date: "2025-10-12".to_string(),
            amount: 2400.0,
            status,
            email: "ahmed@example.com".to_string(),
            phone: "+1 234-567-8900".to_string(),
            passport: "AB123456".to_string(),
            notes: String::new(),
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn test_cancel_from_any_status() {
        for status in BookingStatus::ALL {
            let mut b = booking(status);
            b.cancel();
            assert_eq!(b.status, BookingStatus::Cancelled);
        }
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut b = booking(BookingStatus::Cancelled);
        assert!(!b.cancel());
        assert_eq!(b.status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_cancel_then_restore_always_confirms() {
        // The round trip through Cancelled lands on Confirmed no matter
        // where it started, Pending included.
        for status in BookingStatus::ALL {
            let mut b = booking(status);
            b.cancel();
            assert!(b.restore());
            assert_eq!(b.status, BookingStatus::Confirmed);
        }
    }

    #[test]
    fn test_restore_requires_cancelled() {
        let mut b = booking(BookingStatus::Pending);
        assert!(!b.restore());
        assert_eq!(b.status, BookingStatus::Pending);
    }

    #[test]
    fn test_action_buttons_follow_status() {
        assert_eq!(
            booking(BookingStatus::Cancelled).actions(),
            &[RowAction::View, RowAction::Restore]
        );
        for status in [BookingStatus::Confirmed, BookingStatus::Pending] {
            assert_eq!(
                booking(status).actions(),
                &[RowAction::View, RowAction::Edit, RowAction::Cancel]
            );
        }
    }

    #[test]
    fn test_edit_can_set_any_status_directly() {
        let mut b = booking(BookingStatus::Cancelled);
        let mut draft = BookingDraft::from_booking(&b);
        draft.status = BookingStatus::Pending;
        b.apply(&draft);
        assert_eq!(b.status, BookingStatus::Pending);
    }

    #[test]
    fn test_apply_keeps_identifier() {
        let mut b = booking(BookingStatus::Confirmed);
        let mut draft = BookingDraft::from_booking(&b);
        draft.customer_name = "Sarah Smith".to_string();
        b.apply(&draft);
        assert_eq!(b.id, "BK-1001");
        assert_eq!(b.customer_name, "Sarah Smith");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let b = booking(BookingStatus::Confirmed);
        assert!(b.matches_search("HASSAN"));
        assert!(b.matches_search("premium"));
        assert!(b.matches_search("bk-1001"));
        assert!(b.matches_search(""));
        assert!(!b.matches_search("smith"));
    }

    #[test]
    fn test_status_filter_composition() {
        assert!(StatusFilter::All.admits(BookingStatus::Pending));
        assert!(StatusFilter::Only(BookingStatus::Cancelled).admits(BookingStatus::Cancelled));
        assert!(!StatusFilter::Only(BookingStatus::Cancelled).admits(BookingStatus::Confirmed));
        assert_eq!(StatusFilter::from_id("all"), Some(StatusFilter::All));
        assert_eq!(
            StatusFilter::from_id("cancelled"),
            Some(StatusFilter::Only(BookingStatus::Cancelled))
        );
        assert_eq!(StatusFilter::from_id("archived"), None);
    }

    #[test]
    fn test_draft_validation() {
        let valid = BookingDraft::from_booking(&booking(BookingStatus::Confirmed));
        assert!(valid.validate().is_ok());

        let mut missing_name = valid.clone();
        missing_name.customer_name = "  ".to_string();
        let errors = missing_name.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "customer_name"));

        let mut bad_email = valid.clone();
        bad_email.email = "not-an-email".to_string();
        let errors = bad_email.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "email"));

        let mut bad_amount = valid;
        bad_amount.amount = "lots".to_string();
        let errors = bad_amount.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "amount"));
    }
}
