//! User-facing diagnostics for constant analysis.
//!
//! Two renderings: `Display` for terminals, `to_json` for host tooling.

mod error_codes;

pub use error_codes::{CIRCULAR_CONSTANT, ErrorCode, MALFORMED_RESOLVED_TREE};

use std::fmt;

use serde::Serialize;

use crate::resolved::position::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub title: String,
    pub code: Option<String>,
    pub message: Option<String>,
    pub unit: Option<String>,
    pub span: Option<Span>,
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            code: None,
            message: None,
            unit: None,
            span: None,
            hints: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Error builder using an `ErrorCode` specification.
    pub fn make_error(
        err_spec: &'static ErrorCode,
        message: impl Into<String>,
        unit: impl Into<String>,
        span: Span,
    ) -> Self {
        Diagnostic::error(err_spec.title)
            .with_code(err_spec.code)
            .with_message(message)
            .with_unit(unit)
            .with_span(span)
    }

    /// Machine-readable rendering for host tooling.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
            Severity::Help => "help",
        };
        write!(f, "{}", severity)?;
        if let Some(code) = &self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.title)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(unit) = &self.unit {
            write!(f, " ({}", unit)?;
            if let Some(span) = &self.span {
                write!(f, ":{}", span.start)?;
            }
            write!(f, ")")?;
        }
        for hint in &self.hints {
            write!(f, "\n  hint: {}", hint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolved::position::Position;

    #[test]
    fn test_display_includes_code_and_position() {
        let diagnostic = Diagnostic::make_error(
            &CIRCULAR_CONSTANT,
            "Constants cannot depend on themselves; this group is mutually recursive: a.",
            "lib/main.opal",
            Span::new(Position::new(3, 7), Position::new(3, 8)),
        );
        let rendered = diagnostic.to_string();
        assert!(rendered.starts_with("error[E070]: CIRCULAR CONSTANT REFERENCE"));
        assert!(rendered.contains("(lib/main.opal:3:7)"));
    }

    #[test]
    fn test_hints_render_on_their_own_lines() {
        let diagnostic = Diagnostic::error("MALFORMED RESOLVED TREE")
            .with_hint("first")
            .with_hint("second");
        let rendered = diagnostic.to_string();
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.ends_with("  hint: second"));
    }
}
