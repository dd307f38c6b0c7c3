//! Colored terminal output on stderr.

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    /// Create an output writing to stderr.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }

    /// Print a plain line.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a line indented by `depth` levels.
    pub(crate) fn item(&self, depth: usize, msg: &str) {
        let _ = self
            .term
            .write_line(&format!("{:width$}{msg}", "", width = depth * 2));
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        self.styled(&Style::new().green(), msg);
    }

    /// Print a warning (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.styled(&Style::new().yellow(), msg);
    }

    /// Print an error (red).
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&Style::new().red(), msg);
    }

    /// Print a page path or section heading (cyan bold).
    pub(crate) fn heading(&self, msg: &str) {
        self.styled(&Style::new().cyan().bold(), msg);
    }
}
