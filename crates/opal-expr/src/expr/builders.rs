//! Builder functions for combining expressions.

use crate::expr::core::Expr;

/// Sum of a sequence of expressions.
///
/// Folds via [`Expr::plus`] starting from a zero constant, so the
/// result concatenates all terms in input order. Duplicate variable
/// terms are NOT merged.
pub fn sum<I>(exprs: I) -> Expr
where
    I: IntoIterator<Item = Expr>,
{
    exprs
        .into_iter()
        .fold(Expr::from_constant(0.0), |acc, e| acc.plus(&e))
}
