//! Folds over variables: sums, row/column sums, and dot products.

use crate::types::Variable;
use opal_expr::{Expr, ExprError};

/// Sum of the given variables, each with coefficient 1.
pub fn sum_vars(vars: &[Variable]) -> Expr {
    vars.iter()
        .fold(Expr::from_constant(0.0), |acc, v| acc.plus(&v.expr()))
}

/// Sum of all variables in one row of a variable matrix.
pub fn sum_row(matrix: &[Vec<Variable>], row: usize) -> Expr {
    sum_vars(&matrix[row])
}

/// Sum of all variables in one column of a variable matrix.
pub fn sum_col(matrix: &[Vec<Variable>], col: usize) -> Expr {
    matrix
        .iter()
        .fold(Expr::from_constant(0.0), |acc, r| acc.plus(&r[col].expr()))
}

/// Dot product of a variable slice and a coefficient slice.
///
/// This is a programming-error boundary: mismatched lengths return
/// [`ExprError::MismatchedLengths`], a distinct class from solve-time
/// failures.
pub fn dot(vars: &[Variable], coeffs: &[f64]) -> Result<Expr, ExprError> {
    if vars.len() != coeffs.len() {
        return Err(ExprError::MismatchedLengths {
            vars: vars.len(),
            coeffs: coeffs.len(),
        });
    }

    Ok(vars
        .iter()
        .zip(coeffs)
        .fold(Expr::from_constant(0.0), |acc, (v, c)| {
            acc.plus(&v.mult(*c))
        }))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::{dot, sum_col, sum_row, sum_vars};
    use crate::types::{VarType, Variable};
    use opal_expr::{ExprError, VariableId};

    fn vars(n: u32) -> Vec<Variable> {
        (0..n)
            .map(|i| Variable::new(VariableId::new(i), 0.0, 1.0, VarType::Binary))
            .collect()
    }

    #[test]
    fn sum_vars_uses_unit_coefficients() {
        let vs = vars(3);
        let e = sum_vars(&vs);
        assert_eq!(e.num_vars(), 3);
        assert_eq!(e.coeffs(), vec![1.0, 1.0, 1.0]);
        assert_eq!(e.constant(), 0.0);
    }

    #[test]
    fn sum_row_and_col_pick_the_right_cells() {
        // 2x3 matrix with ids 0..6 in row-major order.
        let flat = vars(6);
        let matrix = vec![flat[0..3].to_vec(), flat[3..6].to_vec()];

        let row1 = sum_row(&matrix, 1);
        assert_eq!(
            row1.vars(),
            vec![VariableId::new(3), VariableId::new(4), VariableId::new(5)]
        );

        let col2 = sum_col(&matrix, 2);
        assert_eq!(col2.vars(), vec![VariableId::new(2), VariableId::new(5)]);
    }

    #[test]
    fn dot_combines_coefficients() {
        let vs = vars(2);
        let e = dot(&vs, &[2.0, -3.0]).unwrap();
        assert_eq!(e.vars(), vec![vs[0].id(), vs[1].id()]);
        assert_eq!(e.coeffs(), vec![2.0, -3.0]);
    }

    #[test]
    fn dot_fails_fast_on_length_mismatch() {
        let vs = vars(3);
        let err = dot(&vs, &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, ExprError::MismatchedLengths { vars: 3, coeffs: 2 });
    }
}
