//! Panel visibility state machine.
//!
//! Two states, three triggers: the toggle button flips, Escape and clicks
//! outside the widget dismiss. A dismissal never opens the panel.

/// Panel visibility; the panel starts hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Hidden,
    Visible,
}

impl PanelState {
    /// Toggle-button transition.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }

    /// Escape / outside-click transition.
    #[must_use]
    pub fn dismissed(self) -> Self {
        Self::Hidden
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}
