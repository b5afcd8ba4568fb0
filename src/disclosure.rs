//! Generic expand/collapse state for sections and result detail panels.
//!
//! A [`Disclosure`] is the single reusable unit of show/hide state. The
//! owner decides the initial policy: sections start expanded, per-result
//! detail panels start collapsed, and units with nothing to disclose are
//! inert and ignore toggle input.

/// Expand/collapse state for one collapsible unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
    interactive: bool,
}

impl Disclosure {
    /// A disclosure with an explicit initial state.
    pub fn new(expanded: bool, interactive: bool) -> Self {
        Self {
            expanded,
            interactive,
        }
    }

    /// Default policy for a populated section: expanded, interactive.
    pub fn section() -> Self {
        Self::new(true, true)
    }

    /// Default policy for a result detail panel: collapsed, interactive.
    pub fn detail() -> Self {
        Self::new(false, true)
    }

    /// A unit that has nothing to disclose: collapsed and ignoring all
    /// toggle input (e.g. an empty section, or a summary that fits the
    /// preview).
    pub fn inert() -> Self {
        Self::new(false, false)
    }

    /// Whether the unit is currently expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the unit responds to toggle input.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Flip the expanded state. No-op on a non-interactive unit.
    /// Returns whether the state changed.
    pub fn toggle(&mut self) -> bool {
        if !self.interactive {
            return false;
        }
        self.expanded = !self.expanded;
        true
    }

    /// Set the expanded state directly (owner-driven, bypasses the
    /// interactivity guard).
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_defaults_to_expanded() {
        let disclosure = Disclosure::section();
        assert!(disclosure.is_expanded());
        assert!(disclosure.is_interactive());
    }

    #[test]
    fn detail_defaults_to_collapsed() {
        let disclosure = Disclosure::detail();
        assert!(!disclosure.is_expanded());
        assert!(disclosure.is_interactive());
    }

    #[test]
    fn toggle_flips_state_both_ways() {
        let mut disclosure = Disclosure::detail();
        assert!(disclosure.toggle());
        assert!(disclosure.is_expanded());
        assert!(disclosure.toggle());
        assert!(!disclosure.is_expanded());
    }

    #[test]
    fn inert_unit_ignores_toggle() {
        let mut disclosure = Disclosure::inert();
        assert!(!disclosure.toggle());
        assert!(!disclosure.is_expanded());
    }

    #[test]
    fn set_expanded_is_direct() {
        let mut disclosure = Disclosure::inert();
        disclosure.set_expanded(true);
        assert!(disclosure.is_expanded());
        disclosure.set_expanded(false);
        assert!(!disclosure.is_expanded());
    }
}
