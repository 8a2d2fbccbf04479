/// How an in-flight inline count edit was ended by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSignal {
    /// The field lost focus; commits the draft.
    Blur,
    /// An explicit confirm key; commits the draft.
    Confirm,
    /// An explicit cancel key; discards the draft.
    Cancel,
}

/// An inline count edit in progress: the target row and the draft text of
/// the count field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEdit {
    pub id: String,
    pub draft: String,
}

/// Transient per-row edit state. At most one row is in full-row edit mode
/// and at most one in inline count edit mode; the two are mutually
/// exclusive for the same product but otherwise independent.
#[derive(Debug, Clone, Default)]
pub struct EditState {
    row: Option<String>,
    count: Option<CountEdit>,
}

impl EditState {
    pub fn new() -> Self {
        EditState::default()
    }

    /// Puts `id` into full-row edit mode, displacing any other row and any
    /// inline count edit on the same product.
    pub fn edit_row(&mut self, id: &str) {
        if self.count.as_ref().map(|c| c.id.as_str()) == Some(id) {
            self.count = None;
        }
        self.row = Some(id.to_owned());
    }

    pub fn editing_row(&self, id: &str) -> bool {
        self.row.as_deref() == Some(id)
    }

    /// Clears full-row edit mode; used by both commit and cancel, since the
    /// actual mutation travels through the session, not through this state.
    pub fn close_row(&mut self) -> Option<String> {
        self.row.take()
    }

    /// Puts `id` into inline count edit mode with the current count as the
    /// draft, displacing any other count edit and a full-row edit on the
    /// same product.
    pub fn edit_count(&mut self, id: &str, current: u32) {
        if self.row.as_deref() == Some(id) {
            self.row = None;
        }
        self.count = Some(CountEdit {
            id: id.to_owned(),
            draft: current.to_string(),
        });
    }

    pub fn editing_count(&self, id: &str) -> bool {
        self.count.as_ref().map(|c| c.id.as_str()) == Some(id)
    }

    pub fn count_draft_mut(&mut self) -> Option<&mut String> {
        self.count.as_mut().map(|c| &mut c.draft)
    }

    /// Ends the inline count edit. Blur and confirm hand the draft back for
    /// submission; cancel discards it. Either way the state is cleared.
    pub fn end_count_edit(&mut self, signal: EditSignal) -> Option<CountEdit> {
        let edit = self.count.take()?;

        match signal {
            EditSignal::Blur | EditSignal::Confirm => Some(edit),
            EditSignal::Cancel => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_row_edit_at_a_time() {
        let mut state = EditState::new();
        state.edit_row("a");
        state.edit_row("b");

        assert!(!state.editing_row("a"));
        assert!(state.editing_row("b"));
    }

    #[test]
    fn row_edit_displaces_count_edit_on_the_same_product() {
        let mut state = EditState::new();
        state.edit_count("a", 4);
        state.edit_row("a");

        assert!(state.editing_row("a"));
        assert!(!state.editing_count("a"));
    }

    #[test]
    fn count_edit_displaces_row_edit_on_the_same_product() {
        let mut state = EditState::new();
        state.edit_row("a");
        state.edit_count("a", 4);

        assert!(!state.editing_row("a"));
        assert!(state.editing_count("a"));
    }

    #[test]
    fn row_and_count_edits_coexist_on_different_products() {
        let mut state = EditState::new();
        state.edit_row("a");
        state.edit_count("b", 2);

        assert!(state.editing_row("a"));
        assert!(state.editing_count("b"));
    }

    #[test]
    fn blur_and_confirm_commit_the_draft() {
        for signal in [EditSignal::Blur, EditSignal::Confirm] {
            let mut state = EditState::new();
            state.edit_count("a", 4);
            *state.count_draft_mut().unwrap() = "9".to_owned();

            let edit = state.end_count_edit(signal).unwrap();
            assert_eq!(edit.id, "a");
            assert_eq!(edit.draft, "9");
            assert!(!state.editing_count("a"));
        }
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut state = EditState::new();
        state.edit_count("a", 4);
        *state.count_draft_mut().unwrap() = "9".to_owned();

        assert_eq!(state.end_count_edit(EditSignal::Cancel), None);
        assert!(!state.editing_count("a"));
    }

    #[test]
    fn closing_a_row_edit_clears_it() {
        let mut state = EditState::new();
        state.edit_row("a");

        assert_eq!(state.close_row(), Some("a".to_owned()));
        assert!(!state.editing_row("a"));
        assert_eq!(state.close_row(), None);
    }
}
