//! The minimum-cycle-ratio specialisation: edges carry a `(cost, time)`
//! pair, and the oracle reduces any cycle to `total_cost / total_time`.
//!
//! Minimum cycle ratio is solved by *maximising* `r` subject to
//! `dist[v] - dist[u] <= cost(e) - r * time(e)` along every edge — the
//! "Min" in [`MinCycleRatioSolver`] names the problem, the inner solve is
//! still a [`MaxParametricSolver`].

use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::traits::{Inv, One, Zero};
use petgraph::visit::EdgeRef;

use crate::error::{DomainError, SolverError};
use crate::graph::GraphView;
use crate::parametric::{MaxParametricSolver, ParametricOracle, ParametricSolution, SolverConfig};

/// An edge weight carrying both an accumulated cost and an accumulated
/// time — the payload the cycle-ratio problem is defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostTime<D> {
    pub cost: D,
    pub time: D,
}

impl<D> CostTime<D> {
    pub fn new(cost: D, time: D) -> Self {
        CostTime { cost, time }
    }
}

/// `distance(r, e) = e.cost - r * e.time`; `zero_cancel(cycle) =
/// total_cost / total_time`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleRatioOracle<D> {
    _marker: PhantomData<D>,
}

impl<D> CycleRatioOracle<D> {
    pub fn new() -> Self {
        CycleRatioOracle {
            _marker: PhantomData,
        }
    }
}

impl<D, E> ParametricOracle<E, D> for CycleRatioOracle<D>
where
    D: Copy + PartialOrd + Zero + Add<Output = D> + Sub<Output = D> + Mul<Output = D> + Div<Output = D>,
    E: EdgeRef<Weight = CostTime<D>>,
{
    fn distance(&self, ratio: &D, edge: &E) -> D {
        let w = edge.weight();
        w.cost - *ratio * w.time
    }

    fn zero_cancel(&self, cycle: &[E]) -> Result<D, DomainError> {
        let mut total_cost = D::zero();
        let mut total_time = D::zero();
        for edge in cycle {
            let w = edge.weight();
            total_cost = total_cost + w.cost;
            total_time = total_time + w.time;
        }
        if total_time == D::zero() {
            return Err(DomainError::ZeroDivisor);
        }
        Ok(total_cost / total_time)
    }
}

/// The ready-made minimum-cycle-ratio entry point, wrapping a
/// [`MaxParametricSolver`] instantiated with [`CycleRatioOracle`].
#[derive(Debug)]
pub struct MinCycleRatioSolver<G, D>
where
    G: GraphView,
    G::NodeId: Eq + Hash,
    G::EdgeRef: EdgeRef<Weight = CostTime<D>>,
    D: Copy
        + PartialOrd
        + Zero
        + One
        + Add<Output = D>
        + Sub<Output = D>
        + Mul<Output = D>
        + Div<Output = D>
        + Neg<Output = D>
        + Inv<Output = D>,
{
    inner: MaxParametricSolver<G, D, CycleRatioOracle<D>>,
}

impl<G, D> MinCycleRatioSolver<G, D>
where
    G: GraphView,
    G::NodeId: Eq + Hash,
    G::EdgeRef: EdgeRef<Weight = CostTime<D>>,
    D: Copy
        + PartialOrd
        + Zero
        + One
        + Add<Output = D>
        + Sub<Output = D>
        + Mul<Output = D>
        + Div<Output = D>
        + Neg<Output = D>
        + Inv<Output = D>,
{
    pub fn new(digraph: G) -> Self {
        Self::with_config(digraph, SolverConfig::default())
    }

    pub fn with_config(digraph: G, config: SolverConfig) -> Self {
        MinCycleRatioSolver {
            inner: MaxParametricSolver::with_config(digraph, CycleRatioOracle::new(), config),
        }
    }

    /// Finds the minimum cycle ratio reachable from ratio upper bound `r0`,
    /// and the cycle witnessing it.
    pub fn run(
        &mut self,
        dist: &mut [D],
        r0: D,
    ) -> Result<ParametricSolution<D, G::EdgeRef>, SolverError> {
        let mut ratio = r0;
        self.inner.run(dist, &mut ratio)
    }
}
