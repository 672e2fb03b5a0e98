//! Core expression type: an affine-linear value over variable identities.
//!
//! `Expr` is a tagged variant so the common cases (a bare constant, a
//! single variable) stay allocation-free until they are composed.
//! Every operation returns a new value; neither operand is ever
//! mutated. Duplicate terms for the same variable are preserved in
//! insertion order — merging is a lowering concern, not an algebra one.

use crate::expr::constraint::{Constraint, Sense};
use crate::expr::error::ExprError;
use crate::ids::VariableId;

/// A symbolic affine-linear expression: Σ coeff_i · var_i + constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant with no variable terms.
    Constant(f64),
    /// A single variable with coefficient 1 and no constant.
    Var(VariableId),
    /// A general linear form.
    Linear(LinearExpr),
}

/// General linear form with parallel variable and coefficient sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    vars: Vec<VariableId>,
    coeffs: Vec<f64>,
    constant: f64,
}

impl LinearExpr {
    /// Build a linear form from parallel sequences.
    ///
    /// Returns an error if the sequences have different lengths.
    pub fn new(vars: Vec<VariableId>, coeffs: Vec<f64>, constant: f64) -> Result<Self, ExprError> {
        if vars.len() != coeffs.len() {
            return Err(ExprError::MismatchedLengths {
                vars: vars.len(),
                coeffs: coeffs.len(),
            });
        }
        Ok(Self {
            vars,
            coeffs,
            constant,
        })
    }

    // Internal constructor for paths where the length invariant is
    // already established.
    fn from_parts(vars: Vec<VariableId>, coeffs: Vec<f64>, constant: f64) -> Self {
        debug_assert_eq!(vars.len(), coeffs.len());
        Self {
            vars,
            coeffs,
            constant,
        }
    }

    pub fn vars(&self) -> &[VariableId] {
        &self.vars
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Expr {
    // ── Constructors ────────────────────────────────────────

    /// A constant expression with no variable terms.
    pub fn from_constant(constant: f64) -> Self {
        Expr::Constant(constant)
    }

    /// A single variable with coefficient 1.0.
    pub fn var(id: VariableId) -> Self {
        Expr::Var(id)
    }

    // ── Accessors ───────────────────────────────────────────

    /// Number of variable terms in the expression.
    pub fn num_vars(&self) -> usize {
        match self {
            Expr::Constant(_) => 0,
            Expr::Var(_) => 1,
            Expr::Linear(lin) => lin.len(),
        }
    }

    /// Variable identities, one entry per term in insertion order.
    pub fn vars(&self) -> Vec<VariableId> {
        match self {
            Expr::Constant(_) => Vec::new(),
            Expr::Var(id) => vec![*id],
            Expr::Linear(lin) => lin.vars.clone(),
        }
    }

    /// Coefficients, parallel to [`Expr::vars`].
    pub fn coeffs(&self) -> Vec<f64> {
        match self {
            Expr::Constant(_) => Vec::new(),
            Expr::Var(_) => vec![1.0],
            Expr::Linear(lin) => lin.coeffs.clone(),
        }
    }

    /// Additive constant of the expression.
    pub fn constant(&self) -> f64 {
        match self {
            Expr::Constant(k) => *k,
            Expr::Var(_) => 0.0,
            Expr::Linear(lin) => lin.constant,
        }
    }

    // ── Operations ──────────────────────────────────────────

    /// Sum of two expressions as a new value.
    ///
    /// Terms are concatenated in operand order and constants summed.
    /// Neither operand is modified.
    pub fn plus(&self, other: &Expr) -> Expr {
        let mut vars = self.vars();
        vars.extend(other.vars());
        let mut coeffs = self.coeffs();
        coeffs.extend(other.coeffs());
        Expr::Linear(LinearExpr::from_parts(
            vars,
            coeffs,
            self.constant() + other.constant(),
        ))
    }

    /// Scale every coefficient and the constant by a factor.
    pub fn mult(&self, by: f64) -> Expr {
        match self {
            Expr::Constant(k) => Expr::Constant(k * by),
            Expr::Var(id) => Expr::Linear(LinearExpr::from_parts(vec![*id], vec![by], 0.0)),
            Expr::Linear(lin) => Expr::Linear(LinearExpr::from_parts(
                lin.vars.clone(),
                lin.coeffs.iter().map(|c| c * by).collect(),
                lin.constant * by,
            )),
        }
    }

    // ── Comparison methods (produce Constraint) ─────────────

    /// `self <= rhs` as a constraint.
    pub fn less_eq(&self, rhs: &Expr) -> Constraint {
        Constraint::new(self.clone(), rhs.clone(), Sense::LessEqual)
    }

    /// `self >= rhs` as a constraint.
    pub fn greater_eq(&self, rhs: &Expr) -> Constraint {
        Constraint::new(self.clone(), rhs.clone(), Sense::GreaterEqual)
    }

    /// `self == rhs` as a constraint.
    pub fn equals(&self, rhs: &Expr) -> Constraint {
        Constraint::new(self.clone(), rhs.clone(), Sense::Equal)
    }
}

impl From<f64> for Expr {
    fn from(constant: f64) -> Self {
        Expr::Constant(constant)
    }
}

// ── Operator overloads ──────────────────────────────────────

impl std::ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Self::Output {
        Expr::plus(&self, &rhs)
    }
}

impl std::ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Self::Output {
        Expr::plus(&self, &rhs.mult(-1.0))
    }
}

impl std::ops::Mul<f64> for Expr {
    type Output = Expr;

    fn mul(self, rhs: f64) -> Self::Output {
        self.mult(rhs)
    }
}

impl std::ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        self.mult(-1.0)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::{Expr, LinearExpr};
    use crate::expr::error::ExprError;
    use crate::ids::VariableId;

    fn x() -> VariableId {
        VariableId::new(0)
    }

    fn y() -> VariableId {
        VariableId::new(1)
    }

    #[test]
    fn constant_has_no_terms() {
        let e = Expr::from_constant(5.0);
        assert_eq!(e.num_vars(), 0);
        assert!(e.vars().is_empty());
        assert!(e.coeffs().is_empty());
        assert_eq!(e.constant(), 5.0);
    }

    #[test]
    fn var_is_a_unit_term() {
        let e = Expr::var(x());
        assert_eq!(e.num_vars(), 1);
        assert_eq!(e.vars(), vec![x()]);
        assert_eq!(e.coeffs(), vec![1.0]);
        assert_eq!(e.constant(), 0.0);
    }

    #[test]
    fn var_mult_produces_singleton_linear() {
        let e = Expr::var(x()).mult(3.5);
        assert_eq!(e.vars(), vec![x()]);
        assert_eq!(e.coeffs(), vec![3.5]);
        assert_eq!(e.constant(), 0.0);
    }

    #[test]
    fn constant_mult_stays_constant() {
        let e = Expr::from_constant(2.0).mult(-4.0);
        assert_eq!(e, Expr::Constant(-8.0));
    }

    #[test]
    fn plus_concatenates_terms_and_sums_constants() {
        let a = Expr::var(x()).plus(&Expr::from_constant(3.0));
        let b = Expr::var(y()).mult(2.0).plus(&Expr::from_constant(7.0));
        let c = a.plus(&b);
        assert_eq!(c.vars(), vec![x(), y()]);
        assert_eq!(c.coeffs(), vec![1.0, 2.0]);
        assert_eq!(c.constant(), 10.0);
    }

    #[test]
    fn plus_never_mutates_operands() {
        let shared = Expr::var(x()).plus(&Expr::var(y()));
        let left = shared.plus(&Expr::from_constant(1.0));
        let right = shared.plus(&Expr::var(x()));

        // The shared sub-expression is untouched by both compositions.
        assert_eq!(shared.num_vars(), 2);
        assert_eq!(shared.constant(), 0.0);
        assert_eq!(left.num_vars(), 2);
        assert_eq!(left.constant(), 1.0);
        assert_eq!(right.num_vars(), 3);
    }

    #[test]
    fn mult_never_mutates_operand() {
        let e = Expr::var(x()).plus(&Expr::from_constant(2.0));
        let scaled = e.mult(10.0);
        assert_eq!(e.coeffs(), vec![1.0]);
        assert_eq!(e.constant(), 2.0);
        assert_eq!(scaled.coeffs(), vec![10.0]);
        assert_eq!(scaled.constant(), 20.0);
    }

    #[test]
    fn duplicate_terms_are_preserved_verbatim() {
        let e = Expr::var(x()).plus(&Expr::var(x()).mult(2.0));
        assert_eq!(e.vars(), vec![x(), x()]);
        assert_eq!(e.coeffs(), vec![1.0, 2.0]);
    }

    #[test]
    fn linear_expr_rejects_mismatched_lengths() {
        let result = LinearExpr::new(vec![x(), y()], vec![1.0], 0.0);
        assert_eq!(
            result.unwrap_err(),
            ExprError::MismatchedLengths { vars: 2, coeffs: 1 }
        );
    }

    #[test]
    fn operator_overloads_delegate() {
        let e = Expr::var(x()) + Expr::var(y()) * 2.0 - Expr::from_constant(1.0);
        assert_eq!(e.vars(), vec![x(), y()]);
        assert_eq!(e.coeffs(), vec![1.0, 2.0]);
        assert_eq!(e.constant(), -1.0);

        let negated = -Expr::var(x());
        assert_eq!(negated.coeffs(), vec![-1.0]);
    }
}
