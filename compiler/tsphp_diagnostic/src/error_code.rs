use std::fmt;

/// Error codes for all lowering diagnostics.
///
/// Format: E4xxx for errors, W4xxx for warnings.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// `exports.x` / `module.exports` used instead of `export`
    E4001,
    /// Unsupported `Math` member
    E4002,
    /// Iteration method called on a receiver that is not array-like
    E4003,
    /// Iteration method without a callback taking the element
    E4004,
    /// Imported name missing from the exporting module
    E4005,

    /// `.length` lowered to `strlen()`: byte length, not UTF-16 length
    W4001,
    /// `props.children` read inside a component render function
    W4002,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E4001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E4003 => "E4003",
            ErrorCode::E4004 => "E4004",
            ErrorCode::E4005 => "E4005",
            ErrorCode::W4001 => "W4001",
            ErrorCode::W4002 => "W4002",
        }
    }

    /// Check if this is a warning code (Wxxx range).
    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
