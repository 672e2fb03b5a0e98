//! Symbolic affine-linear expression algebra.
//!
//! Expressions are immutable values over variable identities; composing
//! them never mutates an operand, so a sub-expression can safely appear
//! in any number of parents.

pub mod expr;
pub mod ids;

pub use expr::{sum, Constraint, Expr, ExprError, LinearExpr, Sense};
pub use ids::VariableId;
