//! Solution mapping: dense engine output addressed by variable.

use crate::solver::EngineSolution;
use crate::types::{VarType, Variable};

/// Threshold above which an integral variable counts as "on".
/// Engine values for integer variables can sit slightly off their
/// integral point.
const TINY: f64 = 0.01;

/// The result of a successful solve, addressable by [`Variable`].
///
/// Values live in a dense vector indexed by variable id, so lookups
/// are O(1) and the solution stays valid independently of the model
/// that produced it.
#[derive(Debug, Clone)]
pub struct Solution {
    values: Vec<f64>,
    objective_value: f64,
    optimal: bool,
    gap: f64,
}

impl Solution {
    pub(crate) fn from_engine(raw: EngineSolution) -> Self {
        Self {
            values: raw.values,
            objective_value: raw.objective_value,
            optimal: raw.optimal,
            gap: raw.gap,
        }
    }

    /// Value of the given variable, or `None` if its id lies outside
    /// the solved model.
    pub fn value(&self, var: &Variable) -> Option<f64> {
        self.values.get(var.id().inner() as usize).copied()
    }

    /// Whether an integer variable is set in this solution.
    ///
    /// Returns `false` for variables that are not [`VarType::Integer`]
    /// or whose id lies outside the solved model.
    pub fn is_one(&self, var: &Variable) -> bool {
        var.var_type() == VarType::Integer
            && self.value(var).map_or(false, |v| v > TINY)
    }

    /// Objective value at the returned point.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Whether the engine proved optimality.
    pub fn is_optimal(&self) -> bool {
        self.optimal
    }

    /// Relative optimality gap reported by the engine.
    pub fn gap(&self) -> f64 {
        self.gap
    }
}
