use crate::options::Indentation;

/// Line-oriented text sink with a current indentation level.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    buf: String,
    unit: &'static str,
    level: usize,
}

impl CodeWriter {
    pub fn new(indentation: Indentation) -> Self {
        Self {
            buf: String::new(),
            unit: indentation.as_str(),
            level: 0,
        }
    }

    /// Write one line at the current level.
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.line_at(self.level, text);
    }

    /// Write one line at an explicit level.
    pub fn line_at(&mut self, level: usize, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            self.buf.push_str(&self.unit.repeat(level));
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    /// Write one line one level deeper than the current one.
    pub fn nested(&mut self, text: impl AsRef<str>) {
        self.line_at(self.level + 1, text);
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Append already-rendered text verbatim.
    pub fn append(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_with_configured_unit() {
        let mut w = CodeWriter::new(Indentation::Tabs);
        w.line("def f():");
        w.indent();
        w.line("if x:");
        w.nested("pass");
        w.blank();
        w.dedent();
        w.line("f()");
        assert_eq!(w.finish(), "def f():\n\tif x:\n\t\tpass\n\nf()\n");
    }

    #[test]
    fn empty_lines_carry_no_trailing_whitespace() {
        let mut w = CodeWriter::new(Indentation::Spaces4);
        w.indent();
        w.line("");
        assert_eq!(w.as_str(), "\n");
    }
}
