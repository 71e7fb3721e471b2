//! Diagnostic reporting for the lowering core.
//!
//! Every issue found while lowering a module becomes a [`Diagnostic`] with:
//! - an error code for searchability
//! - a severity (errors block the module's output, warnings never do)
//! - a clear message
//! - the source location of the offending node, when known
//!
//! Diagnostics are appended to a [`DiagnosticQueue`] owned by the job that
//! lowers the module and drained once traversal completes.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is type-level proof that at least one error was
//! recorded. It can only be obtained from the queue.
//!
//! ```text
//! if let Some(guarantee) = queue.has_errors() {
//!     return Err(guarantee); // the module's output is unusable
//! }
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Severity, SourceLocation};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::DiagnosticQueue;
