/// Display metadata for one file in the list. Records have no identity of
/// their own; they are positional within the sequence that owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub size: String,
    pub modified: String,
}

impl FileRecord {
    pub fn new(
        name: impl Into<String>,
        size: impl Into<String>,
        modified: impl Into<String>,
    ) -> Self {
        FileRecord {
            name: name.into(),
            size: size.into(),
            modified: modified.into(),
        }
    }

    /// Secondary line shown under the file name.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} • Last modified {}", self.size, self.modified)
    }
}
