//! Output lines produced by a run.
//!
//! Nothing in the library prints. Operations that have visible output append
//! [`Line`]s to a [`Transcript`]; the CLI decides how to render them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Output of a movie or observer operation (playing, sharing, ...)
    Notice,
    /// Driver chatter, e.g. observer registration and movie descriptions
    Diagnostic,
    /// Section break between parts of a screening
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub content: String,
}

impl Line {
    pub fn notice(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Notice,
            content: content.into(),
        }
    }

    pub fn diagnostic(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Diagnostic,
            content: content.into(),
        }
    }

    pub fn separator(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Separator,
            content: content.into(),
        }
    }
}

/// Append-only list of output lines.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<Line>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Plain text of every line, in order.
    pub fn contents(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.content.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
