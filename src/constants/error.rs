//! Structural failures raised when the input tree breaks the resolver's
//! contract.

use crate::diagnostics::{Diagnostic, MALFORMED_RESOLVED_TREE};
use crate::resolved::position::Span;

/// The resolved tree violated an invariant the resolver is contractually
/// required to uphold. Analysis of the unit aborts; this signals a front-end
/// bug upstream, not a user error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralError {
    pub message: String,
    pub span: Span,
}

impl StructuralError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    pub fn to_diagnostic(&self, unit: &str) -> Diagnostic {
        Diagnostic::make_error(&MALFORMED_RESOLVED_TREE, self.message.clone(), unit, self.span)
    }
}
