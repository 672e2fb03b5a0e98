//! Variable registry and model building methods.

use tracing::debug;

use super::Model;
use crate::types::{ObjSense, Objective, VarType, Variable};
use opal_expr::{Constraint, Expr, VariableId};

impl Model {
    // ── Variables ───────────────────────────────────────────

    /// Register one variable and return a copy of it.
    ///
    /// Ids are assigned sequentially from zero in registration order.
    pub fn add_var(&mut self, lower: f64, upper: f64, vtype: VarType) -> Variable {
        let id = VariableId::new(self.variables.len() as u32);
        let var = Variable::new(id, lower, upper, vtype);
        self.variables.push(var);
        var
    }

    /// Register one binary variable with bounds [0, 1].
    pub fn add_binary_var(&mut self) -> Variable {
        self.add_var(0.0, 1.0, VarType::Binary)
    }

    /// Register `n` variables with identical bounds and type.
    ///
    /// The returned variables carry consecutive ids.
    pub fn add_var_vector(
        &mut self,
        n: usize,
        lower: f64,
        upper: f64,
        vtype: VarType,
    ) -> Vec<Variable> {
        (0..n).map(|_| self.add_var(lower, upper, vtype)).collect()
    }

    /// Register `n` binary variables.
    pub fn add_binary_var_vector(&mut self, n: usize) -> Vec<Variable> {
        self.add_var_vector(n, 0.0, 1.0, VarType::Binary)
    }

    /// Register a `rows` x `cols` matrix of variables, row-major.
    pub fn add_var_matrix(
        &mut self,
        rows: usize,
        cols: usize,
        lower: f64,
        upper: f64,
        vtype: VarType,
    ) -> Vec<Vec<Variable>> {
        (0..rows)
            .map(|_| self.add_var_vector(cols, lower, upper, vtype))
            .collect()
    }

    /// Register a `rows` x `cols` matrix of binary variables.
    pub fn add_binary_var_matrix(&mut self, rows: usize, cols: usize) -> Vec<Vec<Variable>> {
        self.add_var_matrix(rows, cols, 0.0, 1.0, VarType::Binary)
    }

    // ── Constraints and objective ───────────────────────────

    /// Append a constraint. Constraints are kept in insertion order.
    pub fn add_constr(&mut self, constr: Constraint) {
        self.constraints.push(constr);
    }

    /// Set the objective, replacing any previous one.
    pub fn set_objective(&mut self, expr: Expr, sense: ObjSense) {
        debug!(
            component = "model",
            operation = "set_objective",
            sense = sense.as_str(),
            num_terms = expr.num_vars(),
            replacing = self.objective.is_some(),
            "objective set"
        );
        self.objective = Some(Objective::new(expr, sense));
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::Model;
    use crate::types::VarType;
    use opal_expr::{Expr, Sense, VariableId};

    #[test]
    fn ids_are_sequential_from_zero() {
        let mut model = Model::new();
        let a = model.add_var(0.0, 5.0, VarType::Continuous);
        let b = model.add_binary_var();
        assert_eq!(a.id(), VariableId::new(0));
        assert_eq!(b.id(), VariableId::new(1));
        assert_eq!(model.num_variables(), 2);
    }

    #[test]
    fn vector_ids_are_consecutive_after_existing() {
        let mut model = Model::new();
        model.add_var(0.0, 1.0, VarType::Continuous);

        let vs = model.add_var_vector(3, -1.0, 1.0, VarType::Integer);
        let ids: Vec<u32> = vs.iter().map(|v| v.id().inner()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(vs[0].lower(), -1.0);
        assert_eq!(vs[0].var_type(), VarType::Integer);
    }

    #[test]
    fn matrix_is_row_major() {
        let mut model = Model::new();
        let m = model.add_binary_var_matrix(2, 3);
        assert_eq!(m.len(), 2);
        assert_eq!(m[0].len(), 3);
        assert_eq!(m[0][2].id().inner(), 2);
        assert_eq!(m[1][0].id().inner(), 3);
        assert_eq!(model.num_variables(), 6);
    }

    #[test]
    fn binary_vars_have_unit_bounds() {
        let mut model = Model::new();
        let v = model.add_binary_var();
        assert_eq!(v.lower(), 0.0);
        assert_eq!(v.upper(), 1.0);
        assert_eq!(v.var_type(), VarType::Binary);
    }

    #[test]
    fn constraints_keep_insertion_order() {
        let mut model = Model::new();
        let x = model.add_binary_var();
        model.add_constr(x.less_eq(&Expr::from_constant(1.0)));
        model.add_constr(x.greater_eq(&Expr::from_constant(0.0)));

        assert_eq!(model.num_constraints(), 2);
        assert_eq!(model.constraints()[0].sense(), Sense::LessEqual);
        assert_eq!(model.constraints()[1].sense(), Sense::GreaterEqual);
    }

    #[test]
    fn add_constr_accepts_unregistered_ids() {
        // Validation is deferred to the compile/adapter boundary.
        let mut model = Model::new();
        let ghost = Expr::var(VariableId::new(42));
        model.add_constr(ghost.less_eq(&Expr::from_constant(1.0)));
        assert_eq!(model.num_constraints(), 1);
    }
}
