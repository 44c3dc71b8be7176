//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use cyratio_rs::prelude::*;
//! use petgraph::Graph;
//!
//! let mut g: Graph<(), f32> = Graph::new();
//! ```

pub use crate::cycle_ratio::{CostTime, CycleRatioOracle, MinCycleRatioSolver};
pub use crate::error::{DomainError, FinderError, SolverError};
pub use crate::graph::GraphView;
pub use crate::neg_cycle::{Cycle, Cycles, NegCycleFinder};
pub use crate::parametric::{
    MaxParametricSolver, MinParametricSolver, ParametricOracle, ParametricSolution, SolverConfig,
};
