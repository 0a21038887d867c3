//! Pure list-view model for the employee roster: search filtering,
//! pagination, and the status toggle. No UI types here, so the whole state
//! machine is unit-testable.

use crate::employee::Employee;

pub const PAGE_SIZE: usize = 10;

/// How many page buttons the pagination strip shows at most.
pub const WINDOW: usize = 5;

/// Search + pagination state for one list-view instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub search_term: String,
    pub current_page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
        }
    }
}

impl ListState {
    /// Changing the search term always snaps back to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Every navigation control clamps into `[1, total_pages]`.
    pub fn goto(&mut self, page: usize, total_pages: usize) {
        self.current_page = clamp_page(page, total_pages);
    }
}

/// One rendered page of the filtered roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub rows: Vec<Employee>,
    /// Total records matching the search term.
    pub filtered: usize,
    pub total_pages: usize,
    /// Zero-based index of the first row, for the serial-number column and
    /// the "Showing X to Y of Z" summary.
    pub first_index: usize,
}

pub fn total_pages(filtered: usize) -> usize {
    filtered.div_ceil(PAGE_SIZE)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Derive the visible page from the records and the list state. Pure: the
/// view recomputes this on every render.
pub fn page(records: &[Employee], search_term: &str, current_page: usize) -> Page {
    let matching: Vec<&Employee> = records
        .iter()
        .filter(|employee| employee.matches(search_term))
        .collect();

    let filtered = matching.len();
    let total_pages = total_pages(filtered);
    let current = clamp_page(current_page, total_pages);
    let first_index = (current - 1) * PAGE_SIZE;

    let rows = matching
        .into_iter()
        .skip(first_index)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    Page {
        rows,
        filtered,
        total_pages,
        first_index,
    }
}

/// The page buttons to render: at most [`WINDOW`] numbers, centered on the
/// current page except near the first and last two pages.
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= WINDOW {
        return (1..=total_pages).collect();
    }
    let start = if current_page <= 3 {
        1
    } else if current_page >= total_pages - 2 {
        total_pages - (WINDOW - 1)
    } else {
        current_page - 2
    };
    (start..start + WINDOW).collect()
}

/// Flip the status of the record with the given id, leaving every other
/// record untouched. Returns false when no record matches.
pub fn toggle_status(records: &mut [Employee], id: u32) -> bool {
    match records.iter_mut().find(|employee| employee.id == id) {
        Some(employee) => {
            employee.status = employee.status.toggled();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{EmployeeStatus, sample_roster};

    #[test]
    fn filtering_never_grows_the_list() {
        let roster = sample_roster();
        for term in ["", "engineer", "EMP0", "no such employee", "98765"] {
            let view = page(&roster, term, 1);
            assert!(view.filtered <= roster.len(), "term {term:?}");
        }
    }

    #[test]
    fn unmatched_search_yields_an_empty_page() {
        let view = page(&sample_roster(), "zzz-nobody", 1);
        assert!(view.rows.is_empty());
        assert_eq!(view.filtered, 0);
        assert_eq!(view.total_pages, 0);
    }

    #[test]
    fn twelve_records_split_into_two_pages() {
        let roster = sample_roster();

        let first = page(&roster, "", 1);
        assert_eq!(first.rows.len(), 10);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.first_index, 0);

        let second = page(&roster, "", 2);
        assert_eq!(second.rows.len(), 2);
        assert_eq!(second.first_index, 10);
        assert_eq!(second.rows[0].emp_id, "EMP011");
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let roster = sample_roster();
        assert_eq!(page(&roster, "", 99).rows.len(), 2);
        assert_eq!(page(&roster, "", 0).first_index, 0);

        let mut state = ListState::default();
        state.goto(99, 2);
        assert_eq!(state.current_page, 2);
        state.goto(0, 2);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn setting_a_search_term_resets_to_page_one() {
        let mut state = ListState::default();
        state.goto(2, 2);
        state.set_search("engineer");
        assert_eq!(state.current_page, 1);
        assert_eq!(state.search_term, "engineer");
    }

    #[test]
    fn search_narrows_by_designation() {
        let roster = sample_roster();
        let view = page(&roster, "engineer", 1);
        assert!(view.filtered < roster.len());
        assert!(view.rows.iter().all(|e| e.matches("engineer")));
    }

    #[test]
    fn page_window_is_centered_away_from_the_ends() {
        assert_eq!(page_numbers(1, 2), vec![1, 2]);
        assert_eq!(page_numbers(3, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(1, 9), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(3, 9), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(5, 9), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_numbers(8, 9), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_numbers(9, 9), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn toggle_flips_only_the_targeted_record() {
        let mut roster = sample_roster();
        let before = roster.clone();

        assert!(toggle_status(&mut roster, 3));
        assert_eq!(roster[2].status, EmployeeStatus::Active);
        for (i, employee) in roster.iter().enumerate() {
            if i != 2 {
                assert_eq!(employee, &before[i]);
            }
        }

        // Double-toggle restores the starting status.
        assert!(toggle_status(&mut roster, 3));
        assert_eq!(roster, before);
    }

    #[test]
    fn toggling_an_unknown_id_is_a_no_op() {
        let mut roster = sample_roster();
        let before = roster.clone();
        assert!(!toggle_status(&mut roster, 999));
        assert_eq!(roster, before);
    }
}
