//! Output log: every line piped in, plus the scroll position over it.

/// Append-only line log with a scrollable view window.
///
/// The cursor is the index of the first visible line and always satisfies
/// `cursor <= max_cursor()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLog {
    /// Received lines, oldest first.
    lines: Vec<String>,
    /// First visible line.
    cursor: usize,
    /// Lines visible at once.
    window: usize,
    /// Optional retention cap (None = keep everything).
    max_lines: Option<usize>,
}

impl OutputLog {
    /// Create an empty log with the given window size.
    pub const fn new(window: usize) -> Self {
        Self {
            lines: Vec::new(),
            cursor: 0,
            window,
            max_lines: None,
        }
    }

    /// Cap the number of retained lines, evicting the oldest first.
    ///
    /// A cap below the window size is raised to the window size.
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines.map(|max| max.max(self.window));
        self.evict();
        self
    }

    /// All retained lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of retained lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if nothing has been received yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Window size.
    pub const fn window(&self) -> usize {
        self.window
    }

    /// First visible line.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Largest valid cursor.
    pub fn max_cursor(&self) -> usize {
        self.lines.len().saturating_sub(self.window)
    }

    /// Check if the log is longer than one window.
    pub fn overflows(&self) -> bool {
        self.lines.len() > self.window
    }

    /// Lines currently in view.
    pub fn visible(&self) -> &[String] {
        let start = self.cursor.min(self.lines.len());
        let end = (start + self.window).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Append a line and pin the view to the newest window.
    ///
    /// The view re-pins even if the user scrolled away.
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
        self.evict();
        if self.overflows() {
            self.cursor = self.max_cursor();
        }
    }

    /// Scroll towards older lines.
    pub fn scroll_up(&mut self, lines: usize) {
        self.cursor = self.cursor.saturating_sub(lines);
    }

    /// Scroll towards newer lines.
    pub fn scroll_down(&mut self, lines: usize) {
        self.cursor = self.cursor.saturating_add(lines).min(self.max_cursor());
    }

    /// Jump to the oldest window.
    pub fn scroll_to_top(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the newest window.
    pub fn scroll_to_bottom(&mut self) {
        self.cursor = self.max_cursor();
    }

    /// Drop lines over the retention cap, keeping the cursor on the same content.
    fn evict(&mut self) {
        let Some(max) = self.max_lines else {
            return;
        };
        if self.lines.len() > max {
            let excess = self.lines.len() - max;
            self.lines.drain(..excess);
            self.cursor = self.cursor.saturating_sub(excess).min(self.max_cursor());
        }
    }
}
