//! Core modeling layer: variable registry, model compiler, and the
//! solver adapter boundary.
//!
//! A [`Model`] owns variables, constraints, and an optional objective.
//! [`Model::optimize`] compiles the symbolic model into flat numeric
//! buffers, hands them to a [`SolverAdapter`] in one blocking call, and
//! maps the raw result back into a [`Solution`] addressable by variable.

pub mod builders;
pub mod model;
pub mod solution;
pub mod solver;
pub mod types;

pub use builders::{dot, sum_col, sum_row, sum_vars};
pub use model::Model;
pub use solution::Solution;
pub use solver::{
    ConstraintBuffer, EngineSolution, FlatModel, ObjectiveBuffer, SolverAdapter, SolverConfig,
    SolverError, SolverStatus, TermBuffer, VariableBuffer,
};
pub use types::{ObjSense, Objective, VarType, Variable};
