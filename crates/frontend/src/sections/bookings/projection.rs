//! Pure projection from the booking collection to the rendered window.
//!
//! The table renders whatever this module says and nothing else: which
//! rows pass the view transforms, which slice of them is on the current
//! page, and the 1-based bounds shown next to the pagination controls.

use contracts::domain::booking::Booking;

use super::store::ViewTransform;

pub const PAGE_SIZE: usize = 7;

/// 1-based inclusive display bounds for "Showing X–Y of Z".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct PageView {
    pub windowed: Vec<Booking>,
    pub info: PageInfo,
}

/// Number of pages for a visible-row count, floored at one page so an
/// empty result set still has a valid page 1.
pub fn total_pages(visible_count: usize) -> usize {
    visible_count.div_ceil(PAGE_SIZE).max(1)
}

/// Whether a record passes both view predicates. The status filter and
/// the search term compose with AND; order of application is irrelevant.
pub fn passes(record: &Booking, transform: &ViewTransform) -> bool {
    transform.status_filter.admits(record.status) && record.matches_search(&transform.search_term)
}

/// Project the collection through the transform. Insertion order is
/// preserved; no sort is ever applied.
pub fn project(records: &[Booking], transform: &ViewTransform) -> PageView {
    let visible: Vec<&Booking> = records.iter().filter(|r| passes(r, transform)).collect();
    let total = visible.len();

    let page = transform.page.clamp(1, total_pages(total));
    let start_idx = (page - 1) * PAGE_SIZE;

    let windowed: Vec<Booking> = visible
        .into_iter()
        .skip(start_idx)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    let info = PageInfo {
        start: if total == 0 { 0 } else { start_idx + 1 },
        end: start_idx + windowed.len(),
        total,
    };

    PageView { windowed, info }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::bookings::seed::seed_bookings;
    use contracts::domain::booking::{BookingStatus, StatusFilter};

    fn transform(search: &str, filter: StatusFilter, page: usize) -> ViewTransform {
        ViewTransform {
            search_term: search.to_string(),
            status_filter: filter,
            page,
        }
    }

    #[test]
    fn test_projection_is_filter_intersection_in_order() {
        let records = seed_bookings();
        let t = transform("umrah", StatusFilter::Only(BookingStatus::Pending), 1);

        let expected_ids: Vec<&str> = records
            .iter()
            .filter(|r| r.status == BookingStatus::Pending && r.matches_search("umrah"))
            .map(|r| r.id.as_str())
            .collect();

        let view = project(&records, &t);
        let got_ids: Vec<&str> = view.windowed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(got_ids, expected_ids[..expected_ids.len().min(PAGE_SIZE)].to_vec());
        assert_eq!(view.info.total, expected_ids.len());
    }

    #[test]
    fn test_window_bounds() {
        let records = seed_bookings();
        assert_eq!(records.len(), 42);

        let page1 = project(&records, &transform("", StatusFilter::All, 1));
        assert_eq!(page1.windowed.len(), PAGE_SIZE);
        assert_eq!(page1.info, PageInfo { start: 1, end: 7, total: 42 });

        let page6 = project(&records, &transform("", StatusFilter::All, 6));
        assert_eq!(page6.info, PageInfo { start: 36, end: 42, total: 42 });
    }

    #[test]
    fn test_partial_last_page() {
        let records: Vec<_> = seed_bookings().into_iter().take(10).collect();
        let view = project(&records, &transform("", StatusFilter::All, 2));
        assert_eq!(view.windowed.len(), 3);
        assert_eq!(view.info, PageInfo { start: 8, end: 10, total: 10 });
    }

    #[test]
    fn test_empty_result_set() {
        let records = seed_bookings();
        let view = project(&records, &transform("zzzzzz", StatusFilter::All, 1));
        assert!(view.windowed.is_empty());
        assert_eq!(view.info, PageInfo { start: 0, end: 0, total: 0 });
    }

    #[test]
    fn test_total_pages_floors_at_one() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(7), 1);
        assert_eq!(total_pages(8), 2);
        assert_eq!(total_pages(42), 6);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let records = seed_bookings();
        let view = project(&records, &transform("", StatusFilter::All, 99));
        // Clamped to the last page, not empty.
        assert_eq!(view.info.total, 42);
        assert_eq!(view.info.start, 36);
    }
}
