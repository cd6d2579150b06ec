//! Text buffer for emitted source.

/// Builds emitted source line by line with 4-space indentation.
#[derive(Default)]
pub(crate) struct SourceEmitter {
    buffer: String,
}

impl SourceEmitter {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        SourceEmitter {
            buffer: String::with_capacity(capacity),
        }
    }

    pub(crate) fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    pub(crate) fn emit_indent(&mut self, level: usize) {
        for _ in 0..level * 4 {
            self.buffer.push(' ');
        }
    }

    /// Emit one indented line.
    pub(crate) fn line(&mut self, level: usize, text: &str) {
        self.emit_indent(level);
        self.emit(text);
        self.emit_newline();
    }

    /// Separate two items with a blank line, unless one is already there.
    pub(crate) fn blank_line(&mut self) {
        if !self.buffer.is_empty() && !self.buffer.ends_with("\n\n") {
            self.emit_newline();
        }
    }

    /// Remove trailing blank lines, leaving a single final newline.
    pub(crate) fn finish(mut self) -> String {
        while self.buffer.ends_with("\n\n") {
            self.buffer.pop();
        }
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer
    }
}
