//! `OutputBuffer`: single-syscall output buffer for a whole frame.

use std::io::Write;

/// Pre-allocated buffer for building a frame and its ANSI escape sequences.
///
/// A frame is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical frame (8KB).
    pub fn new() -> Self {
        Self::with_capacity(8192)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// End the current line.
    ///
    /// Raw mode disables output post-processing, so the carriage return is
    /// explicit.
    #[inline]
    pub fn newline(&mut self) {
        self.data.extend_from_slice(b"\r\n");
    }

    /// Move cursor to the top-left corner.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.data.extend_from_slice(b"\x1b[H");
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Set foreground color from the 256-color palette.
    #[inline]
    pub fn set_fg(&mut self, color: u8) {
        // Writing to a Vec cannot fail.
        let _ = write!(self.data, "\x1b[38;5;{color}m");
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
