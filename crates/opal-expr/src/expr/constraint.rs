//! Relational constraints: two expressions paired with a comparison sense.
//!
//! Both sides are kept symbolic; normalization into engine rows happens
//! at the solver adapter boundary, not here.

use crate::expr::core::Expr;

/// Comparison sense of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    LessEqual,
    GreaterEqual,
    Equal,
}

impl Sense {
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::LessEqual => "le",
            Sense::GreaterEqual => "ge",
            Sense::Equal => "eq",
        }
    }
}

/// An immutable constraint `lhs <sense> rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    lhs: Expr,
    rhs: Expr,
    sense: Sense,
}

impl Constraint {
    pub fn new(lhs: Expr, rhs: Expr, sense: Sense) -> Self {
        Self { lhs, rhs, sense }
    }

    /// `lhs <= rhs`.
    pub fn less_eq(lhs: Expr, rhs: Expr) -> Self {
        Self::new(lhs, rhs, Sense::LessEqual)
    }

    /// `lhs >= rhs`.
    pub fn greater_eq(lhs: Expr, rhs: Expr) -> Self {
        Self::new(lhs, rhs, Sense::GreaterEqual)
    }

    /// `lhs == rhs`.
    pub fn equal(lhs: Expr, rhs: Expr) -> Self {
        Self::new(lhs, rhs, Sense::Equal)
    }

    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn into_parts(self) -> (Expr, Expr, Sense) {
        (self.lhs, self.rhs, self.sense)
    }
}
