//! Append-only diagnostic queue.
//!
//! The lowering core only ever appends. The job that owns the queue drains it
//! with [`DiagnosticQueue::flush`] after the module's traversal completes.
//! Unlike a parser's queue there is no deduplication or suppression: every
//! recorded diagnostic is reported, in emission order.

use crate::{Diagnostic, ErrorGuaranteed};

/// Queue collecting the diagnostics of one module.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn push(&mut self, diag: Diagnostic) {
        if diag.is_error() {
            self.error_count += 1;
        } else {
            self.warning_count += 1;
        }
        self.diagnostics.push(diag);
    }

    /// Get the number of errors recorded.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the number of warnings recorded.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Returns proof of failure if any error was recorded.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Drain all diagnostics in emission order and reset the counters.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        self.warning_count = 0;
        std::mem::take(&mut self.diagnostics)
    }
}
