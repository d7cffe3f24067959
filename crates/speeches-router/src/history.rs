/// History backend
///
/// Browser-style session history: a list of visited URLs and a cursor.
/// `MemoryHistory` keeps it in process, which is what server-side rendering
/// and tests use; a browser binding would implement the same trait.

/// Forward/back navigation over visited URLs
pub trait History {
    /// URL at the cursor
    fn location(&self) -> &str;

    /// Appends a URL, discarding any forward entries
    fn push(&mut self, url: String);

    /// Overwrites the URL at the cursor
    fn replace(&mut self, url: String);

    /// Moves the cursor one entry back. `None` at the first entry.
    fn back(&mut self) -> Option<&str>;

    /// Moves the cursor one entry forward. `None` at the last entry.
    fn forward(&mut self) -> Option<&str>;
}

/// In-memory session history
///
/// # Examples
///
/// ```
/// use speeches_router::{History, MemoryHistory};
///
/// let mut history = MemoryHistory::new("/");
/// history.push("/speeches".to_string());
/// history.push("/speech/42".to_string());
///
/// assert_eq!(history.back(), Some("/speeches"));
/// history.push("/speakers".to_string());
///
/// // "/speech/42" was dropped by the push
/// assert_eq!(history.forward(), None);
/// assert_eq!(history.location(), "/speakers");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// Visited URLs, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, url: String) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url);
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, url: String) {
        self.entries[self.cursor] = url;
    }

    fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.location())
    }

    fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.location())
    }
}
