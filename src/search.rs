//! Free-text search input. It never fetches anything itself; it only reports
//! the query its owner should search for.

#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    buffer: String,
    live: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// In live mode every keystroke propagates the current query.
    pub fn live() -> Self {
        Self {
            buffer: String::new(),
            live: true,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replaces the buffer with `text`. Returns the query to propagate when live.
    pub fn input(&mut self, text: impl Into<String>) -> Option<String> {
        self.buffer = text.into();
        if self.live {
            Some(self.buffer.trim().to_string())
        } else {
            None
        }
    }

    /// Enter key or search icon. Blank buffers submit nothing.
    pub fn submit(&self) -> Option<String> {
        let query = self.buffer.trim();
        if query.is_empty() {
            None
        } else {
            Some(query.to_string())
        }
    }

    /// The "Home" control: empties the buffer and reports an empty query.
    pub fn clear(&mut self) -> String {
        self.buffer.clear();
        String::new()
    }
}
