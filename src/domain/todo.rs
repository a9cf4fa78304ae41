/// A single to-do entry: a short title and a free-text note.
///
/// Items carry no identifier; the list addresses them purely by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub title: String,
    pub note: String,
}

impl Todo {
    pub fn new(title: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: note.into(),
        }
    }
}
