//! Collapsed/expanded state of a project's detail block.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Collapsed,
    Expanded,
}

impl DetailState {
    pub fn toggle(self) -> Self {
        match self {
            DetailState::Collapsed => DetailState::Expanded,
            DetailState::Expanded => DetailState::Collapsed,
        }
    }

    /// Class list of the project header.
    pub fn header_class(self) -> &'static str {
        match self {
            DetailState::Collapsed => "",
            DetailState::Expanded => "active",
        }
    }

    /// CSS `display` value of the detail block.
    pub fn display(self) -> &'static str {
        match self {
            DetailState::Collapsed => "none",
            DetailState::Expanded => "block",
        }
    }
}
