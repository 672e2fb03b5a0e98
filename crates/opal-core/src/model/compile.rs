//! Model compiler: symbolic model to flat numeric buffers.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::debug;

use super::Model;
use crate::solver::{ConstraintBuffer, FlatModel, ObjectiveBuffer, TermBuffer, VariableBuffer};
use opal_expr::{Expr, VariableId};

/// Flatten a model into the buffers an adapter consumes.
///
/// Variable arrays are indexed by id. Constraints appear in insertion
/// order, each side flattened independently so the adapter sees the
/// two-sided form.
pub(crate) fn flatten(model: &Model) -> FlatModel {
    let start = Instant::now();

    let mut variables = VariableBuffer::default();
    for var in model.variables() {
        variables.lower.push(var.lower());
        variables.upper.push(var.upper());
        variables.types.push(var.var_type());
    }

    let constraints = model
        .constraints()
        .iter()
        .map(|c| ConstraintBuffer {
            lhs: flatten_expr(c.lhs()),
            rhs: flatten_expr(c.rhs()),
            sense: c.sense(),
        })
        .collect::<Vec<_>>();

    let objective = model.objective().map(|obj| ObjectiveBuffer {
        terms: flatten_expr(obj.expr()),
        sense: obj.sense(),
    });

    debug!(
        component = "compiler",
        operation = "flatten",
        num_variables = variables.len(),
        num_constraints = constraints.len(),
        has_objective = objective.is_some(),
        duration_ms = start.elapsed().as_millis() as u64,
        "model flattened"
    );

    FlatModel {
        variables,
        constraints,
        objective,
    }
}

/// Flatten one expression side.
///
/// Duplicate terms for the same variable are merged by summing their
/// coefficients; terms that cancel to zero are dropped. Output terms
/// are sorted by variable id.
fn flatten_expr(expr: &Expr) -> TermBuffer {
    let mut merged: BTreeMap<VariableId, f64> = BTreeMap::new();
    for (id, coeff) in expr.vars().into_iter().zip(expr.coeffs()) {
        *merged.entry(id).or_insert(0.0) += coeff;
    }

    let mut buf = TermBuffer {
        constant: expr.constant(),
        ..TermBuffer::default()
    };
    for (id, coeff) in merged {
        if coeff != 0.0 {
            buf.vars.push(id);
            buf.coeffs.push(coeff);
        }
    }
    buf
}
