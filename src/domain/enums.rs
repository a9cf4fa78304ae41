/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// The add/edit form modal is open; all keys route to it
    Form,
}

/// Which form field currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Note,
}

impl FormField {
    /// The field Tab moves to
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Note,
            Self::Note => Self::Title,
        }
    }
}
