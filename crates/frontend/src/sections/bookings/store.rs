//! In-memory row store for the booking table.
//!
//! The store is the single source of truth: the collection plus the view
//! transforms currently applied to it. The table is a one-way projection
//! of this state; rows are never read back out of the DOM. The component
//! owns one store instance per section activation, wrapped in a signal.

use contracts::domain::booking::{Booking, BookingDraft, StatusFilter};

use super::projection::{passes, project, total_pages, PageView};

/// The view transforms reconciled against the record collection: search
/// term, status filter and page window.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub page: usize,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            page: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookingStore {
    records: Vec<Booking>,
    pub transform: ViewTransform,
    // Monotonic, so identifiers are never reused after a deletion.
    next_seq: usize,
}

impl BookingStore {
    pub fn new(records: Vec<Booking>) -> Self {
        let next_seq = records.len();
        Self {
            records,
            transform: ViewTransform::default(),
            next_seq,
        }
    }

    pub fn records(&self) -> &[Booking] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn visible_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| passes(r, &self.transform))
            .count()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.visible_count())
    }

    pub fn page_view(&self) -> PageView {
        project(&self.records, &self.transform)
    }

    // ------------------------------------------------------------------
    // View transforms
    // ------------------------------------------------------------------

    /// Changing the search term resets the window to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.transform.search_term = term.into();
        self.transform.page = 1;
    }

    /// Changing the status filter resets the window to the first page.
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.transform.status_filter = filter;
        self.transform.page = 1;
    }

    /// The page is always clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.transform.page = page.clamp(1, self.total_pages());
    }

    fn reclamp_page(&mut self) {
        self.transform.page = self.transform.page.clamp(1, self.total_pages());
    }

    // ------------------------------------------------------------------
    // Mutations. Each one may change the visible count, so the page is
    // reclamped afterwards.
    // ------------------------------------------------------------------

    pub fn cancel(&mut self, id: &str) -> bool {
        let changed = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .map(|r| r.cancel())
            .unwrap_or(false);
        self.reclamp_page();
        changed
    }

    pub fn restore(&mut self, id: &str) -> bool {
        let changed = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .map(|r| r.restore())
            .unwrap_or(false);
        self.reclamp_page();
        changed
    }

    pub fn apply_edit(&mut self, id: &str, draft: &BookingDraft) -> bool {
        let found = match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.apply(draft);
                true
            }
            None => false,
        };
        self.reclamp_page();
        found
    }

    /// Insert a new record with a freshly generated identifier derived
    /// from the record count.
    pub fn add(&mut self, draft: BookingDraft) -> String {
        self.next_seq += 1;
        let id = format!("BK-{}", 1000 + self.next_seq);
        self.records.push(draft.into_booking(id.clone()));
        self.reclamp_page();
        id
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        self.reclamp_page();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::bookings::projection::PAGE_SIZE;
    use crate::sections::bookings::seed::seed_bookings;
    use contracts::domain::booking::{BookingStatus, RowAction, StatusFilter};

    fn store() -> BookingStore {
        BookingStore::new(seed_bookings())
    }

    #[test]
    fn test_transform_changes_reset_page() {
        let mut s = store();
        s.set_page(4);
        assert_eq!(s.transform.page, 4);

        s.set_search_term("smith");
        assert_eq!(s.transform.page, 1);

        s.set_page(s.total_pages());
        s.set_status_filter(StatusFilter::Only(BookingStatus::Pending));
        assert_eq!(s.transform.page, 1);
    }

    #[test]
    fn test_set_page_clamps_to_bounds() {
        let mut s = store();
        assert_eq!(s.total_pages(), 6);

        s.set_page(0);
        assert_eq!(s.transform.page, 1);
        s.set_page(99);
        assert_eq!(s.transform.page, 6);
    }

    #[test]
    fn test_page_survives_narrowing_filter() {
        let mut s = store();
        s.set_page(6);
        // Cancelling a record on a narrowed view must keep the page valid.
        s.set_search_term("umrah");
        assert!(s.transform.page <= s.total_pages());
        assert!(s.transform.page >= 1);
    }

    #[test]
    fn test_cancelled_smith_scenario() {
        // 42 seeded bookings, cancelled filter AND "smith" search, first
        // window of 7.
        let mut s = store();
        s.set_status_filter(StatusFilter::Only(BookingStatus::Cancelled));
        s.set_search_term("smith");

        let view = s.page_view();
        assert!(view.info.total > 0, "seed must contain cancelled Smiths");
        assert!(view.windowed.len() <= PAGE_SIZE);
        assert_eq!(s.transform.page, 1);
        for row in &view.windowed {
            assert_eq!(row.status, BookingStatus::Cancelled);
            assert!(row.search_text().to_lowercase().contains("smith"));
        }
    }

    #[test]
    fn test_cancel_swaps_action_buttons() {
        let mut s = store();
        let id = s.records()[0].id.clone();
        assert!(s.cancel(&id));

        let record = s.get(&id).unwrap();
        assert_eq!(record.actions(), &[RowAction::View, RowAction::Restore]);
        assert!(!record.actions().contains(&RowAction::Edit));
    }

    #[test]
    fn test_add_generates_sequential_ids() {
        let mut s = store();
        let draft = BookingDraft {
            customer_name: "New Customer".to_string(),
            package: "Economy Umrah Package".to_string(),
            travel_date: "2025-12-01".to_string(),
            amount: "1500".to_string(),
            email: "new@example.com".to_string(),
            ..Default::default()
        };
        let id = s.add(draft.clone());
        assert_eq!(id, "BK-1043");
        assert_eq!(s.records().len(), 43);

        // Deleting does not free the identifier for reuse.
        assert!(s.delete(&id));
        let id2 = s.add(draft);
        assert_eq!(id2, "BK-1044");
    }

    #[test]
    fn test_delete_reclamps_page() {
        let mut s = BookingStore::new(seed_bookings().into_iter().take(8).collect());
        s.set_page(2);
        let last_id = s.records().last().unwrap().id.clone();
        s.delete(&last_id);
        // 7 records left → single page.
        assert_eq!(s.transform.page, 1);
    }
}
