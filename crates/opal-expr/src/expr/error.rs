//! Expression construction errors.
//!
//! These signal programming errors in model construction, a distinct
//! class from solve-time failures reported by a solver adapter.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Variable and coefficient sequences have different lengths.
    MismatchedLengths { vars: usize, coeffs: usize },
}

impl ExprError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ExprError::MismatchedLengths { .. } => "EXPR_MISMATCHED_LENGTHS",
        }
    }
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprError::MismatchedLengths { vars, coeffs } => write!(
                f,
                "[{}] variables and coefficients must have the same length ({} vs {})",
                self.code(),
                vars,
                coeffs
            ),
        }
    }
}

impl std::error::Error for ExprError {}
