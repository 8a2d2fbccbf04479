/// A delete waiting behind the confirmation gate: the target's identity and
/// the label shown in the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub label: String,
}

/// The yes/no gate in front of destructive actions. Opens carrying the
/// target, hands it back on confirm, and discards it on cancel, whether
/// the cancel came from the button, a background click or an escape key.
/// One gate instance serves the whole session.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationGate {
    pending: Option<PendingDelete>,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        ConfirmationGate::default()
    }

    /// Opens the gate for `id`. A gate that was already open is re-targeted.
    pub fn request<S: Into<String>, L: Into<String>>(&mut self, id: S, label: L) {
        self.pending = Some(PendingDelete {
            id: id.into(),
            label: label.into(),
        });
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }

    /// Accepts the pending delete and closes the gate. The caller follows up
    /// with the actual `DeleteConfirmed` dispatch; a closed gate yields
    /// nothing, so nothing can be deleted without passing through here.
    pub fn confirm(&mut self) -> Option<PendingDelete> {
        self.pending.take()
    }

    /// Discards the pending delete and closes the gate.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let gate = ConfirmationGate::new();
        assert!(!gate.is_open());
        assert_eq!(gate.pending(), None);
    }

    #[test]
    fn confirm_hands_back_the_target_and_closes() {
        let mut gate = ConfirmationGate::new();
        gate.request("42", "Widget");
        assert!(gate.is_open());

        let pending = gate.confirm().unwrap();
        assert_eq!(pending.id, "42");
        assert_eq!(pending.label, "Widget");
        assert!(!gate.is_open());
    }

    #[test]
    fn cancel_discards_the_target() {
        let mut gate = ConfirmationGate::new();
        gate.request("42", "Widget");
        gate.cancel();

        assert!(!gate.is_open());
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn confirming_a_closed_gate_yields_nothing() {
        let mut gate = ConfirmationGate::new();
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn reopening_replaces_the_target() {
        let mut gate = ConfirmationGate::new();
        gate.request("1", "One");
        gate.request("2", "Two");

        assert_eq!(gate.confirm().unwrap().id, "2");
    }
}
