//! Solver adapter boundary: flattened buffers, configuration, and the
//! trait engine backends implement.
//!
//! Everything that crosses to an external engine is an owned,
//! length-checked buffer with explicit enums. Engine-specific numeric
//! encodings (sense bytes, direction integers, type characters) are the
//! adapter's business and never appear here.

use crate::types::{ObjSense, VarType};
use opal_expr::{Sense, VariableId};

/// One flattened expression side: parallel id/coefficient vectors plus
/// an additive constant. Empty vectors are the explicit representation
/// of "no terms".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermBuffer {
    pub vars: Vec<VariableId>,
    pub coeffs: Vec<f64>,
    pub constant: f64,
}

impl TermBuffer {
    /// Number of terms.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.vars.len(), self.coeffs.len());
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Per-variable bound and type arrays, indexed by variable id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableBuffer {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub types: Vec<VarType>,
}

impl VariableBuffer {
    /// Number of variables.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.lower.len(), self.upper.len());
        debug_assert_eq!(self.lower.len(), self.types.len());
        self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}

/// A flattened two-sided constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintBuffer {
    pub lhs: TermBuffer,
    pub rhs: TermBuffer,
    pub sense: Sense,
}

/// A flattened objective.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveBuffer {
    pub terms: TermBuffer,
    pub sense: ObjSense,
}

/// The full flat model handed to a solver adapter.
///
/// Constraints appear in declaration order. A missing objective means
/// the engine optimizes an implicit zero objective.
#[derive(Debug, Clone, Default)]
pub struct FlatModel {
    pub variables: VariableBuffer,
    pub constraints: Vec<ConstraintBuffer>,
    pub objective: Option<ObjectiveBuffer>,
}

impl FlatModel {
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

/// Configuration forwarded to the adapter at optimize time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverConfig {
    /// Show engine log output on the console.
    pub log_to_console: bool,
    /// Time limit in seconds. `None` means no limit.
    pub time_limit: Option<f64>,
    /// Relative MIP gap tolerance. `None` uses the engine default.
    pub mip_gap: Option<f64>,
}

impl SolverConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable engine console logging.
    pub fn with_log_to_console(mut self, enabled: bool) -> Self {
        self.log_to_console = enabled;
        self
    }

    /// Set the time limit in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    /// Set the relative MIP gap tolerance.
    pub fn with_mip_gap(mut self, gap: f64) -> Self {
        self.mip_gap = Some(gap);
        self
    }
}

/// Status of a solve reported by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverStatus {
    /// Optimal solution found.
    Optimal,
    /// Problem is infeasible.
    Infeasible,
    /// Problem is unbounded.
    Unbounded,
    /// Engine reached its time limit (may have a feasible incumbent).
    TimeLimit,
    /// Engine reached an iteration limit (may have a feasible incumbent).
    IterationLimit,
    /// Status is unknown or the engine did not complete.
    Unknown,
}

impl SolverStatus {
    pub fn is_optimal(self) -> bool {
        matches!(self, SolverStatus::Optimal)
    }

    pub fn is_feasible(self) -> bool {
        matches!(
            self,
            SolverStatus::Optimal | SolverStatus::TimeLimit | SolverStatus::IterationLimit
        )
    }

    pub fn is_infeasible(self) -> bool {
        matches!(self, SolverStatus::Infeasible)
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, SolverStatus::Unbounded)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SolverStatus::Optimal => "optimal",
            SolverStatus::Infeasible => "infeasible",
            SolverStatus::Unbounded => "unbounded",
            SolverStatus::TimeLimit => "time_limit",
            SolverStatus::IterationLimit => "iteration_limit",
            SolverStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recoverable solve-time errors.
///
/// These are distinct from the programming-error class
/// ([`opal_expr::ExprError`]): the model stays fully usable and a
/// subsequent optimize call is legitimate.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The engine reported an error code with a message.
    Engine { code: i32, message: String },
    /// The solve finished without a usable solution.
    SolveFailure { status: SolverStatus },
    /// A buffer referenced a variable id outside the model.
    InvalidVariableId(u32),
    /// The engine is not available (library missing, license, ...).
    Unavailable(String),
}

impl SolverError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::Engine { .. } => "SOLVER_ENGINE",
            SolverError::SolveFailure { status } => match status {
                SolverStatus::Infeasible => "SOLVER_INFEASIBLE",
                SolverStatus::Unbounded => "SOLVER_UNBOUNDED",
                SolverStatus::TimeLimit => "SOLVER_TIME_LIMIT",
                SolverStatus::IterationLimit => "SOLVER_ITERATION_LIMIT",
                _ => "SOLVER_FAILURE",
            },
            SolverError::InvalidVariableId(_) => "SOLVER_INVALID_VARIABLE_ID",
            SolverError::Unavailable(_) => "SOLVER_NOT_AVAILABLE",
        }
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::Engine { code, message } => {
                write!(f, "[{}] engine error {}: {}", self.code(), code, message)
            }
            SolverError::SolveFailure { status } => {
                write!(f, "[{}] solve failed with status: {}", self.code(), status)
            }
            SolverError::InvalidVariableId(id) => {
                write!(f, "[{}] variable id {} does not exist", self.code(), id)
            }
            SolverError::Unavailable(msg) => {
                write!(f, "[{}] solver not available: {}", self.code(), msg)
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Raw result returned by an adapter after a successful solve.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSolution {
    /// Dense value vector indexed by variable id.
    pub values: Vec<f64>,
    /// Objective value at the returned point.
    pub objective_value: f64,
    /// Whether the engine proved optimality.
    pub optimal: bool,
    /// Relative optimality gap reported by the engine.
    pub gap: f64,
}

/// An external optimization engine boundary.
///
/// `optimize` is one synchronous blocking call; it may run up to the
/// configured time limit. Implementations own the engine instance for
/// exactly the duration of the call and must release engine resources
/// on every exit path, success or failure.
pub trait SolverAdapter {
    fn optimize(
        &mut self,
        model: &FlatModel,
        config: &SolverConfig,
    ) -> Result<EngineSolution, SolverError>;
}
