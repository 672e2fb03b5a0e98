//! Translation of HiGHS model status into the generic solver status.

use highs::HighsModelStatus;
use opal_core::SolverStatus;

pub(crate) fn map_status(status: HighsModelStatus) -> SolverStatus {
    match status {
        HighsModelStatus::Optimal => SolverStatus::Optimal,
        HighsModelStatus::Infeasible => SolverStatus::Infeasible,
        HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
            SolverStatus::Unbounded
        }
        HighsModelStatus::ReachedTimeLimit => SolverStatus::TimeLimit,
        HighsModelStatus::ReachedIterationLimit => SolverStatus::IterationLimit,
        _ => SolverStatus::Unknown,
    }
}

/// Whether a status carries a usable solution. Limit statuses may hold
/// a feasible incumbent, so they count.
pub(crate) fn has_solution(status: SolverStatus) -> bool {
    status.is_feasible()
}
