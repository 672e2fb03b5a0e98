//! The HiGHS solver adapter.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::time::Instant;

use highs::{Col, RowProblem, Sense as HighsSense};
use tracing::{debug, trace, warn};

use opal_core::{
    ConstraintBuffer, EngineSolution, FlatModel, ObjSense, SolverAdapter, SolverConfig,
    SolverError,
};
use opal_expr::Sense;

use crate::status::{has_solution, map_status};

/// Solves flat models through the HiGHS library.
///
/// The adapter is stateless across solves: each [`SolverAdapter::optimize`]
/// call builds a fresh HiGHS problem, solves it, and drops every engine
/// object before returning, on the error paths included.
#[derive(Debug, Default)]
pub struct HighsAdapter {
    // Adapter-level default, overridden by a per-solve config value.
    mip_gap: Option<f64>,
}

impl HighsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a default relative MIP gap for solves that do not configure one.
    pub fn set_mip_gap(&mut self, gap: f64) {
        self.mip_gap = Some(gap);
    }
}

impl SolverAdapter for HighsAdapter {
    fn optimize(
        &mut self,
        model: &FlatModel,
        config: &SolverConfig,
    ) -> Result<EngineSolution, SolverError> {
        let started = Instant::now();
        let num_vars = model.num_variables();

        debug!(
            component = "highs",
            operation = "optimize",
            num_variables = num_vars,
            num_constraints = model.num_constraints(),
            has_objective = model.objective.is_some(),
            "building HiGHS problem"
        );

        let (obj_coeffs, obj_constant, sense) = objective_coefficients(model)?;

        let mut problem = RowProblem::default();
        let mut cols: Vec<Col> = Vec::with_capacity(num_vars);
        for i in 0..num_vars {
            let lower = model.variables.lower[i];
            let upper = model.variables.upper[i];
            let col = if model.variables.types[i].is_integral() {
                problem.add_integer_column(obj_coeffs[i], lower..=upper)
            } else {
                problem.add_column(obj_coeffs[i], lower..=upper)
            };
            cols.push(col);
        }

        for (index, constraint) in model.constraints.iter().enumerate() {
            let (factors, bounds) = lower_constraint(&cols, constraint)?;
            trace!(
                component = "highs",
                operation = "add_row",
                row = index,
                num_coeffs = factors.len(),
                "adding constraint row"
            );
            problem.add_row(bounds, factors);
        }

        let mut engine = problem.optimise(sense);
        if config.log_to_console {
            engine.set_option("output_flag", true);
            engine.set_option("log_to_console", true);
        } else {
            engine.make_quiet();
        }
        if let Some(limit) = config.time_limit {
            engine.set_option("time_limit", limit);
        }
        if let Some(gap) = config.mip_gap.or(self.mip_gap) {
            engine.set_option("mip_rel_gap", gap);
        }

        let solved = engine.solve();
        let status = map_status(solved.status());
        let duration_ms = started.elapsed().as_secs_f64() * 1000.0;

        if !has_solution(status) {
            warn!(
                component = "highs",
                operation = "optimize",
                status = status.as_str(),
                duration_ms,
                "solve finished without a usable solution"
            );
            return Err(SolverError::SolveFailure { status });
        }

        if !status.is_optimal() {
            warn!(
                component = "highs",
                operation = "optimize",
                status = status.as_str(),
                duration_ms,
                "solver hit a limit; returning best incumbent"
            );
        }

        let values = solved.get_solution().columns().to_vec();
        // HiGHS reports the objective without the model's additive
        // constant; put it back so callers see the modeled value.
        let objective_value = solved.objective_value() + obj_constant;
        let raw_gap = solved.mip_gap();
        let gap = if raw_gap.is_finite() { raw_gap } else { 0.0 };

        debug!(
            component = "highs",
            operation = "optimize",
            status = status.as_str(),
            objective_value,
            gap,
            duration_ms,
            "solve completed"
        );

        Ok(EngineSolution {
            values,
            objective_value,
            optimal: status.is_optimal(),
            gap,
        })
    }
}

/// Dense objective coefficient array, objective constant, and HiGHS
/// sense. A model without an objective minimizes the zero function.
fn objective_coefficients(
    model: &FlatModel,
) -> Result<(Vec<f64>, f64, HighsSense), SolverError> {
    let mut coeffs = vec![0.0; model.num_variables()];
    let Some(objective) = model.objective.as_ref() else {
        return Ok((coeffs, 0.0, HighsSense::Minimise));
    };

    for (id, coeff) in objective.terms.vars.iter().zip(&objective.terms.coeffs) {
        let slot = coeffs
            .get_mut(id.inner() as usize)
            .ok_or(SolverError::InvalidVariableId(id.inner()))?;
        *slot += coeff;
    }

    let sense = match objective.sense {
        ObjSense::Minimize => HighsSense::Minimise,
        ObjSense::Maximize => HighsSense::Maximise,
    };
    Ok((coeffs, objective.terms.constant, sense))
}

/// Lower a two-sided constraint into a single HiGHS row.
///
/// Variable terms move to the left (lhs minus rhs, merged by column)
/// and constants to the right, so `lhs <= rhs` becomes
/// `lhs.terms - rhs.terms <= rhs.constant - lhs.constant`.
fn lower_constraint(
    cols: &[Col],
    constraint: &ConstraintBuffer,
) -> Result<(Vec<(Col, f64)>, RangeInclusive<f64>), SolverError> {
    let mut merged: BTreeMap<usize, f64> = BTreeMap::new();
    for (id, coeff) in constraint.lhs.vars.iter().zip(&constraint.lhs.coeffs) {
        *merged.entry(id.inner() as usize).or_insert(0.0) += coeff;
    }
    for (id, coeff) in constraint.rhs.vars.iter().zip(&constraint.rhs.coeffs) {
        *merged.entry(id.inner() as usize).or_insert(0.0) -= coeff;
    }

    let mut factors = Vec::with_capacity(merged.len());
    for (index, coeff) in merged {
        let col = *cols
            .get(index)
            .ok_or(SolverError::InvalidVariableId(index as u32))?;
        if coeff != 0.0 {
            factors.push((col, coeff));
        }
    }

    let bound = constraint.rhs.constant - constraint.lhs.constant;
    let bounds = match constraint.sense {
        Sense::LessEqual => f64::NEG_INFINITY..=bound,
        Sense::GreaterEqual => bound..=f64::INFINITY,
        Sense::Equal => bound..=bound,
    };
    Ok((factors, bounds))
}
