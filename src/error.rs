//! Error types for the negative-cycle finder and the parametric solvers.

use thiserror::Error;

/// Precondition violations detected by [`crate::neg_cycle::NegCycleFinder`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinderError {
    /// The distance slice passed to a `howard*` call is shorter than the
    /// graph's node bound, so some node has no `dist` entry.
    #[error("distance map has {found} entries but the graph needs at least {required}")]
    DistanceMapTooShort { required: usize, found: usize },
}

/// Arithmetic failures raised by a [`crate::parametric::ParametricOracle`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// `zero_cancel` was asked to cancel a cycle whose accumulated divisor
    /// (e.g. total time, for the cycle-ratio oracle) is zero.
    #[error("cycle has a zero divisor; its ratio is undefined")]
    ZeroDivisor,
}

/// The error surfaced by [`crate::parametric::MaxParametricSolver::run`] and
/// [`crate::parametric::MinParametricSolver::run`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    #[error(transparent)]
    Finder(#[from] FinderError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
