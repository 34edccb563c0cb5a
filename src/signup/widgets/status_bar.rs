/// Hint text for the status bar, chosen by the app for the current context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBarState {
    pub left_hint: String,
    pub right_hint: String,
}

impl StatusBarState {
    fn new(left: &str, right: &str) -> Self {
        Self {
            left_hint: left.to_string(),
            right_hint: right.to_string(),
        }
    }

    pub fn text_field_normal(first_step: bool, last_step: bool) -> Self {
        let right = match (first_step, last_step) {
            (_, true) => "p: previous  :submit",
            (true, false) => "n: next",
            (false, false) => "p: previous  n: next",
        };
        Self::new("j/k: fields  i: edit", right)
    }

    pub fn text_field_insert(last_field: bool, last_step: bool) -> Self {
        let right = match (last_field, last_step) {
            (true, true) => "Esc: normal  Enter: submit",
            (true, false) => "Esc: normal  Enter: next step",
            _ => "Esc: normal  Enter: next field",
        };
        Self::new("Type to enter text", right)
    }

    pub fn picker(last_step: bool) -> Self {
        let right = if last_step {
            "p: previous  :submit"
        } else {
            "p: previous  n: next"
        };
        Self::new("j/k: choose  Enter: select", right)
    }

    pub fn command_mode() -> Self {
        Self::new("", "Enter: run  Esc: cancel")
    }

    pub fn validating() -> Self {
        Self::new("Validating...", "")
    }

    pub fn submitted() -> Self {
        Self::new("Thanks for signing up", "q: quit  Ctrl+t: theme")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_step_offers_submit_not_next() {
        let hints = StatusBarState::text_field_normal(false, true);
        assert!(hints.right_hint.contains("submit"));
        assert!(!hints.right_hint.contains("next"));
    }

    #[test]
    fn first_step_hides_previous() {
        let hints = StatusBarState::text_field_normal(true, false);
        assert!(!hints.right_hint.contains("previous"));
    }
}
