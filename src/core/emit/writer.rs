/// Line-oriented builder for generated Rust source.
///
/// Indents with four spaces per level and always ends lines with `\n`, so the
/// output does not depend on the platform.
#[derive(Debug, Default)]
pub struct SourceWriter {
    out: String,
    depth: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation. Empty text writes a blank line.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str("    ");
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Write `text {` and indent.
    pub fn open(&mut self, text: impl AsRef<str>) {
        self.line(format!("{} {{", text.as_ref()));
        self.depth += 1;
    }

    /// Dedent and write `}`.
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Write `///` doc lines.
    pub fn doc<S: AsRef<str>>(&mut self, lines: &[S]) {
        for doc_line in lines {
            let doc_line = doc_line.as_ref();
            if doc_line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {}", doc_line));
            }
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}
