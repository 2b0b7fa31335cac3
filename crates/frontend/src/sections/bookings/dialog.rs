//! Dialog state machine for the booking table.
//!
//! One value models which dialog is open and which record it is bound to.
//! At most one dialog is ever active; opening while another is open
//! force-closes the old one. The selection exists only for the lifetime
//! of the open dialog.

use contracts::domain::booking::BookingDraft;
use contracts::validation::FieldError;

use super::store::BookingStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Viewing,
    Editing,
    ConfirmingCancel,
    ConfirmingRestore,
    Adding,
    ConfirmingDelete,
}

/// What a completed dialog interaction did, for user feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Updated(String),
    Added(String),
    Cancelled(String),
    Restored(String),
    Deleted(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    active: Option<(DialogKind, Option<String>)>,
}

impl DialogState {
    pub fn kind(&self) -> Option<DialogKind> {
        self.active.as_ref().map(|(kind, _)| *kind)
    }

    pub fn selection(&self) -> Option<&str> {
        self.active.as_ref().and_then(|(_, sel)| sel.as_deref())
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Open a dialog over a selected record (`None` only for `Adding`).
    /// Any dialog already active is force-closed first.
    pub fn open(&mut self, kind: DialogKind, selection: Option<String>) {
        self.active = Some((kind, selection));
    }

    /// Discard without mutation and clear the selection. Valid in any
    /// state; on a closed controller it is a no-op.
    pub fn dismiss(&mut self) {
        self.active = None;
    }

    /// Apply the pending cancel/restore/delete to the selected record and
    /// close. Outside the confirming states this does nothing.
    pub fn confirm(&mut self, store: &mut BookingStore) -> Option<DialogOutcome> {
        let (kind, selection) = self.active.clone()?;
        let id = selection?;

        let outcome = match kind {
            DialogKind::ConfirmingCancel => {
                store.cancel(&id);
                DialogOutcome::Cancelled(id)
            }
            DialogKind::ConfirmingRestore => {
                store.restore(&id);
                DialogOutcome::Restored(id)
            }
            DialogKind::ConfirmingDelete => {
                store.delete(&id);
                DialogOutcome::Deleted(id)
            }
            _ => return None,
        };

        self.active = None;
        Some(outcome)
    }

    /// Submit the edit/add form. On validation failure the dialog stays
    /// open and the field errors are returned for inline display; the
    /// underlying record is untouched. Outside `Editing`/`Adding` this is
    /// a no-op reported as an empty error list.
    pub fn submit(
        &mut self,
        store: &mut BookingStore,
        draft: &BookingDraft,
    ) -> Result<DialogOutcome, Vec<FieldError>> {
        match self.active.clone() {
            Some((DialogKind::Editing, Some(id))) => {
                draft.validate()?;
                store.apply_edit(&id, draft);
                self.active = None;
                Ok(DialogOutcome::Updated(id))
            }
            Some((DialogKind::Adding, _)) => {
                draft.validate()?;
                let id = store.add(draft.clone());
                self.active = None;
                Ok(DialogOutcome::Added(id))
            }
            _ => Err(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::bookings::seed::seed_bookings;
    use contracts::domain::booking::{BookingStatus, RowAction};

    fn store() -> BookingStore {
        BookingStore::new(seed_bookings())
    }

    fn valid_draft(store: &BookingStore, id: &str) -> BookingDraft {
        BookingDraft::from_booking(store.get(id).unwrap())
    }

    #[test]
    fn test_open_binds_exactly_one_selection() {
        let mut dlg = DialogState::default();
        dlg.open(DialogKind::Viewing, Some("BK-1003".to_string()));
        assert_eq!(dlg.kind(), Some(DialogKind::Viewing));
        assert_eq!(dlg.selection(), Some("BK-1003"));
    }

    #[test]
    fn test_dismiss_clears_selection_from_any_dialog() {
        for kind in [
            DialogKind::Viewing,
            DialogKind::Editing,
            DialogKind::ConfirmingCancel,
            DialogKind::ConfirmingRestore,
            DialogKind::ConfirmingDelete,
        ] {
            let mut dlg = DialogState::default();
            dlg.open(kind, Some("BK-1001".to_string()));
            dlg.dismiss();
            assert!(!dlg.is_open());
            assert_eq!(dlg.selection(), None);
        }
    }

    #[test]
    fn test_open_while_open_force_closes() {
        let mut dlg = DialogState::default();
        dlg.open(DialogKind::Editing, Some("BK-1001".to_string()));
        dlg.open(DialogKind::ConfirmingCancel, Some("BK-1002".to_string()));
        // The second open replaced the first; only one dialog and one
        // selection remain.
        assert_eq!(dlg.kind(), Some(DialogKind::ConfirmingCancel));
        assert_eq!(dlg.selection(), Some("BK-1002"));
    }

    #[test]
    fn test_confirm_cancel_closes_and_mutates() {
        let mut s = store();
        let id = s.records()[1].id.clone();
        let mut dlg = DialogState::default();
        dlg.open(DialogKind::ConfirmingCancel, Some(id.clone()));

        let outcome = dlg.confirm(&mut s);
        assert_eq!(outcome, Some(DialogOutcome::Cancelled(id.clone())));
        assert!(!dlg.is_open());
        assert_eq!(s.get(&id).unwrap().status, BookingStatus::Cancelled);
        assert_eq!(
            s.get(&id).unwrap().actions(),
            &[RowAction::View, RowAction::Restore]
        );
    }

    #[test]
    fn test_confirm_outside_confirming_states_is_noop() {
        let mut s = store();
        let id = s.records()[0].id.clone();
        let status_before = s.get(&id).unwrap().status;

        let mut dlg = DialogState::default();
        dlg.open(DialogKind::Viewing, Some(id.clone()));
        assert_eq!(dlg.confirm(&mut s), None);
        assert!(dlg.is_open());
        assert_eq!(s.get(&id).unwrap().status, status_before);
    }

    #[test]
    fn test_submit_with_empty_required_field_keeps_dialog_open() {
        let mut s = store();
        let id = s.records()[0].id.clone();
        let original = s.get(&id).unwrap().clone();

        let mut dlg = DialogState::default();
        dlg.open(DialogKind::Editing, Some(id.clone()));

        let mut draft = valid_draft(&s, &id);
        draft.customer_name = String::new();

        let errors = dlg.submit(&mut s, &draft).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "customer_name"));
        // Still editing, record untouched.
        assert_eq!(dlg.kind(), Some(DialogKind::Editing));
        assert_eq!(s.get(&id).unwrap().customer_name, original.customer_name);
    }

    #[test]
    fn test_submit_edit_applies_and_closes() {
        let mut s = store();
        let id = s.records()[0].id.clone();

        let mut dlg = DialogState::default();
        dlg.open(DialogKind::Editing, Some(id.clone()));

        let mut draft = valid_draft(&s, &id);
        draft.customer_name = "Sarah Smith".to_string();

        let outcome = dlg.submit(&mut s, &draft).unwrap();
        assert_eq!(outcome, DialogOutcome::Updated(id.clone()));
        assert!(!dlg.is_open());
        assert_eq!(s.get(&id).unwrap().customer_name, "Sarah Smith");
    }

    #[test]
    fn test_submit_add_generates_identifier() {
        let mut s = store();
        let mut dlg = DialogState::default();
        dlg.open(DialogKind::Adding, None);

        let draft = BookingDraft {
            customer_name: "New Customer".to_string(),
            package: "Economy Umrah Package".to_string(),
            travel_date: "2025-12-01".to_string(),
            amount: "1500".to_string(),
            email: "new@example.com".to_string(),
            ..Default::default()
        };

        let outcome = dlg.submit(&mut s, &draft).unwrap();
        assert_eq!(outcome, DialogOutcome::Added("BK-1043".to_string()));
        assert!(!dlg.is_open());
        assert!(s.get("BK-1043").is_some());
    }
}
