//! Variable and objective value types.

use opal_expr::{Constraint, Expr, VariableId};

/// Kind of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Continuous,
    Binary,
    Integer,
}

impl VarType {
    pub fn as_str(self) -> &'static str {
        match self {
            VarType::Continuous => "continuous",
            VarType::Binary => "binary",
            VarType::Integer => "integer",
        }
    }

    /// Whether the variable must take integral values.
    pub fn is_integral(self) -> bool {
        matches!(self, VarType::Binary | VarType::Integer)
    }
}

/// A decision variable: identity, bounds, and kind.
///
/// Variables are created exclusively by a [`Model`](crate::Model),
/// which assigns sequential identities. The values handed back to the
/// caller are cheap copies of the registry entry; the model keeps the
/// canonical one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable {
    id: VariableId,
    lower: f64,
    upper: f64,
    vtype: VarType,
}

impl Variable {
    pub(crate) fn new(id: VariableId, lower: f64, upper: f64, vtype: VarType) -> Self {
        Self {
            id,
            lower,
            upper,
            vtype,
        }
    }

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn var_type(&self) -> VarType {
        self.vtype
    }

    // ── Expression sugar ─────────────────────────────────────

    /// This variable as an expression with coefficient 1.
    pub fn expr(&self) -> Expr {
        Expr::var(self.id)
    }

    /// `self + other` as a new expression.
    pub fn plus(&self, other: &Expr) -> Expr {
        self.expr().plus(other)
    }

    /// `coeff * self` as a new expression.
    pub fn mult(&self, coeff: f64) -> Expr {
        self.expr().mult(coeff)
    }

    /// `self <= rhs` as a constraint.
    pub fn less_eq(&self, rhs: &Expr) -> Constraint {
        self.expr().less_eq(rhs)
    }

    /// `self >= rhs` as a constraint.
    pub fn greater_eq(&self, rhs: &Expr) -> Constraint {
        self.expr().greater_eq(rhs)
    }

    /// `self == rhs` as a constraint.
    pub fn equals(&self, rhs: &Expr) -> Constraint {
        self.expr().equals(rhs)
    }
}

impl From<&Variable> for Expr {
    fn from(var: &Variable) -> Self {
        var.expr()
    }
}

/// Direction of an optimization objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjSense {
    Minimize,
    Maximize,
}

impl ObjSense {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjSense::Minimize => "minimize",
            ObjSense::Maximize => "maximize",
        }
    }
}

/// Objective function: an expression paired with a direction.
#[derive(Debug, Clone)]
pub struct Objective {
    expr: Expr,
    sense: ObjSense,
}

impl Objective {
    pub fn new(expr: Expr, sense: ObjSense) -> Self {
        Self { expr, sense }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn sense(&self) -> ObjSense {
        self.sense
    }
}
