//! Expression types for optimization modeling.
//!
//! - `core`       — Expr: tagged affine-linear value
//! - `constraint` — Constraint: two expressions with a comparison sense
//! - `builders`   — Folds over sequences of expressions
//! - `error`      — Expression construction errors

pub mod builders;
pub mod constraint;
pub mod core;
pub mod error;

pub use builders::sum;
pub use constraint::{Constraint, Sense};
pub use core::{Expr, LinearExpr};
pub use error::ExprError;
