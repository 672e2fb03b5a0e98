//! The model: variable registry, constraint store, and optimize entry
//! point.

mod compile;
mod registry;

use std::time::Duration;

use tracing::debug;

use crate::solution::Solution;
use crate::solver::{SolverAdapter, SolverConfig, SolverError};
use crate::types::{Objective, Variable};
use opal_expr::Constraint;

/// A symbolic optimization model.
///
/// The model is the sole issuer of variable identities: every variable
/// is created through one of the `add_var*` methods and carries a
/// sequential id starting at zero. Constraints are stored in insertion
/// order and never validated against the registry at add time; the
/// compiler and adapter are the checking boundaries.
///
/// `optimize` borrows the model immutably, so a failed solve leaves it
/// fully usable for another attempt.
#[derive(Debug, Default)]
pub struct Model {
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    objective: Option<Objective>,
    show_log: bool,
    // Duration::ZERO means no limit.
    time_limit: Duration,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    // ── Solve options ───────────────────────────────────────

    /// Show engine log output on the console.
    pub fn show_log(&mut self, show: bool) {
        self.show_log = show;
    }

    /// Cap solve time. [`Duration::ZERO`] removes the limit.
    pub fn set_time_limit(&mut self, limit: Duration) {
        self.time_limit = limit;
    }

    // ── Optimize ────────────────────────────────────────────

    /// Compile the model, run one blocking solve on `adapter`, and map
    /// the result back into a [`Solution`].
    ///
    /// On error the model is untouched and can be optimized again,
    /// with the same or a different adapter.
    pub fn optimize<A: SolverAdapter>(&self, adapter: &mut A) -> Result<Solution, SolverError> {
        let flat = compile::flatten(self);

        let mut config = SolverConfig::new().with_log_to_console(self.show_log);
        if !self.time_limit.is_zero() {
            config = config.with_time_limit(self.time_limit.as_secs_f64());
        }

        debug!(
            component = "model",
            operation = "optimize",
            num_variables = flat.num_variables(),
            num_constraints = flat.num_constraints(),
            has_objective = flat.objective.is_some(),
            "starting solve"
        );

        let raw = adapter.optimize(&flat, &config)?;

        debug!(
            component = "model",
            operation = "optimize",
            status = "ok",
            objective_value = raw.objective_value,
            optimal = raw.optimal,
            "solve finished"
        );

        Ok(Solution::from_engine(raw))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::Model;
    use crate::solver::{
        EngineSolution, FlatModel, SolverAdapter, SolverConfig, SolverError, SolverStatus,
    };
    use crate::types::{ObjSense, VarType};
    use opal_expr::Expr;
    use std::time::Duration;

    /// Records what it is called with and returns a canned result.
    struct FixtureAdapter {
        result: Result<EngineSolution, SolverError>,
        seen_model: Option<FlatModel>,
        seen_config: Option<SolverConfig>,
    }

    impl FixtureAdapter {
        fn returning(result: Result<EngineSolution, SolverError>) -> Self {
            Self {
                result,
                seen_model: None,
                seen_config: None,
            }
        }
    }

    impl SolverAdapter for FixtureAdapter {
        fn optimize(
            &mut self,
            model: &FlatModel,
            config: &SolverConfig,
        ) -> Result<EngineSolution, SolverError> {
            self.seen_model = Some(model.clone());
            self.seen_config = Some(config.clone());
            self.result.clone()
        }
    }

    fn canned(values: Vec<f64>) -> EngineSolution {
        EngineSolution {
            values,
            objective_value: 3.0,
            optimal: true,
            gap: 0.0,
        }
    }

    #[test]
    fn optimize_forwards_log_and_time_limit() {
        let mut model = Model::new();
        model.add_var(0.0, 1.0, VarType::Continuous);
        model.show_log(true);
        model.set_time_limit(Duration::from_secs(30));

        let mut adapter = FixtureAdapter::returning(Ok(canned(vec![0.5])));
        model.optimize(&mut adapter).unwrap();

        let config = adapter.seen_config.unwrap();
        assert!(config.log_to_console);
        assert_eq!(config.time_limit, Some(30.0));
    }

    #[test]
    fn zero_time_limit_means_no_limit() {
        let mut model = Model::new();
        model.add_var(0.0, 1.0, VarType::Continuous);

        let mut adapter = FixtureAdapter::returning(Ok(canned(vec![0.0])));
        model.optimize(&mut adapter).unwrap();

        assert_eq!(adapter.seen_config.unwrap().time_limit, None);
    }

    #[test]
    fn optimize_maps_values_back_to_variables() {
        let mut model = Model::new();
        let x = model.add_var(0.0, 10.0, VarType::Continuous);
        let y = model.add_var(0.0, 10.0, VarType::Continuous);

        let mut adapter = FixtureAdapter::returning(Ok(canned(vec![2.0, 8.0])));
        let solution = model.optimize(&mut adapter).unwrap();

        assert_eq!(solution.value(&x), Some(2.0));
        assert_eq!(solution.value(&y), Some(8.0));
        assert_eq!(solution.objective_value(), 3.0);
        assert!(solution.is_optimal());
    }

    #[test]
    fn failed_solve_leaves_model_reusable() {
        let mut model = Model::new();
        let x = model.add_var(0.0, 1.0, VarType::Binary);
        model.add_constr(x.greater_eq(&Expr::from_constant(2.0)));

        let mut failing = FixtureAdapter::returning(Err(SolverError::SolveFailure {
            status: SolverStatus::Infeasible,
        }));
        let err = model.optimize(&mut failing).unwrap_err();
        assert_eq!(err.code(), "SOLVER_INFEASIBLE");

        // Same model, second attempt with a working adapter.
        let mut working = FixtureAdapter::returning(Ok(canned(vec![1.0])));
        assert!(model.optimize(&mut working).is_ok());
        assert_eq!(model.num_constraints(), 1);
    }

    #[test]
    fn set_objective_replaces_previous() {
        let mut model = Model::new();
        let x = model.add_var(0.0, 1.0, VarType::Continuous);

        model.set_objective(x.expr(), ObjSense::Minimize);
        model.set_objective(x.mult(2.0), ObjSense::Maximize);

        let obj = model.objective().unwrap();
        assert_eq!(obj.sense(), ObjSense::Maximize);
        assert_eq!(obj.expr().coeffs(), vec![2.0]);
    }
}
