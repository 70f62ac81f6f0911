/// Forward-only cursor over the lines of a transcript with one line of lookahead
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: &'a [String],
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, position: 0 }
    }

    /// The line under the cursor, if any remain
    pub fn current(&self) -> Option<&'a str> {
        self.lines.get(self.position).map(String::as_str)
    }

    /// The line after the current one
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position + 1).map(String::as_str)
    }

    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    pub fn advance_by(&mut self, count: usize) {
        self.position = (self.position + count).min(self.lines.len());
    }

    /// Zero-based index of the current line
    pub fn position(&self) -> usize {
        self.position
    }
}
