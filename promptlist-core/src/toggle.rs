//! Section-toggle state machine.

/// The next bulk action the toggle control offers. `Collapse` is the
/// initial state and the state every navigation resets to, since a fresh
/// route renders with all sections expanded. The state flips on every
/// activation even when no matching section controls exist in the page:
/// it tracks the next action, not current section state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Collapse,
    Expand,
}

impl ToggleState {
    pub fn flipped(self) -> Self {
        match self {
            Self::Collapse => Self::Expand,
            Self::Expand => Self::Collapse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_collapse() {
        assert_eq!(ToggleState::default(), ToggleState::Collapse);
    }

    #[test]
    fn test_flip_round_trips() {
        let s = ToggleState::Collapse;
        assert_eq!(s.flipped(), ToggleState::Expand);
        assert_eq!(s.flipped().flipped(), ToggleState::Collapse);
    }
}
