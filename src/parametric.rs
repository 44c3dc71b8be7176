//! Parametric network solvers layered on [`NegCycleFinder`].
//!
//! Both solvers drive the finder in an outer fixed-point loop: build a
//! weight closure from the current ratio, ask the finder for an improving
//! cycle under that weight, use the domain's [`ParametricOracle::zero_cancel`]
//! to turn the cycle into a candidate ratio, and either accept it and loop
//! or stop.

use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::traits::{Inv, One, Zero};

use crate::error::{DomainError, SolverError};
use crate::graph::GraphView;
use crate::neg_cycle::NegCycleFinder;

/// A domain-supplied pair of callbacks parametrising the edge weight a
/// solver relaxes with.
///
/// `distance` must be pure (no interior state depending on call order);
/// `zero_cancel` is fallible because a degenerate cycle (e.g. zero total
/// time in the cycle-ratio specialisation) has no well-defined ratio.
pub trait ParametricOracle<E, R>
where
    R: Copy + PartialOrd,
{
    fn distance(&self, ratio: &R, edge: &E) -> R;
    fn zero_cancel(&self, cycle: &[E]) -> Result<R, DomainError>;
}

/// Bounds the outer fixed-point loop of [`MaxParametricSolver`] and
/// [`MinParametricSolver`]. The only configuration surface this crate has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_iterations: 10_000,
        }
    }
}

/// The ratio and cycle a parametric solver converged to, or the best it
/// found before hitting [`SolverConfig::max_iterations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParametricSolution<R, E> {
    pub ratio: R,
    pub cycle: Vec<E>,
    pub iteration_limit_reached: bool,
}

trait RingBounds:
    Copy
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Inv<Output = Self>
{
}

impl<T> RingBounds for T where
    T: Copy
        + PartialOrd
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + Inv<Output = T>
{
}

/// Solves `max r` subject to `dist[v] - dist[u] <= distance(r, e)` for every
/// edge `e(u, v)`, by repeatedly finding a negative cycle under the current
/// ratio and using it to tighten `r`.
#[derive(Debug)]
pub struct MaxParametricSolver<G, R, P>
where
    G: GraphView,
    G::NodeId: Eq + Hash,
    R: RingBounds,
    P: ParametricOracle<G::EdgeRef, R>,
{
    ncf: NegCycleFinder<G, R>,
    omega: P,
    config: SolverConfig,
}

impl<G, R, P> MaxParametricSolver<G, R, P>
where
    G: GraphView,
    G::NodeId: Eq + Hash,
    R: RingBounds,
    P: ParametricOracle<G::EdgeRef, R>,
{
    pub fn new(digraph: G, omega: P) -> Self {
        Self::with_config(digraph, omega, SolverConfig::default())
    }

    pub fn with_config(digraph: G, omega: P, config: SolverConfig) -> Self {
        MaxParametricSolver {
            ncf: NegCycleFinder::new(digraph),
            omega,
            config,
        }
    }

    /// Runs the fixed-point loop, mutating `ratio` in place and also
    /// returning it (and the witnessing cycle) in the solution.
    ///
    /// `dist` is reset to zero at the start of every outer iteration: the
    /// relaxation only needs to be internally consistent within one
    /// iteration, not carried across ratio updates.
    pub fn run(
        &mut self,
        dist: &mut [R],
        ratio: &mut R,
    ) -> Result<ParametricSolution<R, G::EdgeRef>, SolverError> {
        let mut best_cycle = Vec::new();
        let mut iterations = 0usize;
        let mut iteration_limit_reached = false;

        loop {
            if iterations >= self.config.max_iterations {
                iteration_limit_reached = true;
                break;
            }
            for d in dist.iter_mut() {
                *d = R::zero();
            }

            let mut r_min = *ratio;
            let mut c_min: Vec<G::EdgeRef> = Vec::new();
            {
                let omega = &self.omega;
                let r = &*ratio;
                let cycles = self.ncf.howard(dist, |e| omega.distance(r, &e))?;
                for ci in cycles {
                    let ri = self.omega.zero_cancel(&ci)?;
                    if ri < r_min {
                        r_min = ri;
                        c_min = ci;
                    }
                }
            }

            if r_min >= *ratio {
                break;
            }
            best_cycle = c_min;
            *ratio = r_min;
            iterations += 1;
        }

        Ok(ParametricSolution {
            ratio: *ratio,
            cycle: best_cycle,
            iteration_limit_reached,
        })
    }
}

/// Solves `min r` subject to the same constraint family as
/// [`MaxParametricSolver`], by alternating forward and reverse relaxation
/// rounds and accepting the best maximum-improving cycle found each round.
#[derive(Debug)]
pub struct MinParametricSolver<G, R, P>
where
    G: GraphView,
    G::NodeId: Eq + Hash,
    R: RingBounds,
    P: ParametricOracle<G::EdgeRef, R>,
{
    ncf: NegCycleFinder<G, R>,
    omega: P,
    config: SolverConfig,
    pick_one_only: bool,
}

impl<G, R, P> MinParametricSolver<G, R, P>
where
    G: GraphView,
    G::NodeId: Eq + Hash,
    R: RingBounds,
    P: ParametricOracle<G::EdgeRef, R>,
{
    pub fn new(digraph: G, omega: P) -> Self {
        Self::with_config(digraph, omega, SolverConfig::default())
    }

    pub fn with_config(digraph: G, omega: P, config: SolverConfig) -> Self {
        MinParametricSolver {
            ncf: NegCycleFinder::new(digraph),
            omega,
            config,
            pick_one_only: false,
        }
    }

    /// When set, a round stops scanning its cycles after the first one that
    /// improves on the running best, instead of scanning all of them.
    pub fn with_pick_one_only(mut self, pick_one_only: bool) -> Self {
        self.pick_one_only = pick_one_only;
        self
    }

    /// Runs the fixed-point loop. `update_ok(old, new)` gates every
    /// relaxation (both directions share the same gate); alternation starts
    /// with the reverse ("succ") direction on the first outer iteration.
    pub fn run<U>(
        &mut self,
        dist: &mut [R],
        ratio: &mut R,
        update_ok: U,
    ) -> Result<ParametricSolution<R, G::EdgeRef>, SolverError>
    where
        U: Fn(R, R) -> bool + Copy,
    {
        let mut best_cycle = Vec::new();
        let mut reverse = true;
        let mut iterations = 0usize;
        let mut iteration_limit_reached = false;

        loop {
            if iterations >= self.config.max_iterations {
                iteration_limit_reached = true;
                break;
            }

            let mut r_max = *ratio;
            let mut c_max: Vec<G::EdgeRef> = Vec::new();
            {
                let omega = &self.omega;
                let r = &*ratio;
                let get_weight = |e: G::EdgeRef| omega.distance(r, &e);
                if reverse {
                    let cycles = self.ncf.howard_succ(dist, get_weight, update_ok)?;
                    for ci in cycles {
                        let ri = self.omega.zero_cancel(&ci)?;
                        if r_max < ri {
                            r_max = ri;
                            c_max = ci;
                            if self.pick_one_only {
                                break;
                            }
                        }
                    }
                } else {
                    let cycles = self.ncf.howard_pred(dist, get_weight, update_ok)?;
                    for ci in cycles {
                        let ri = self.omega.zero_cancel(&ci)?;
                        if r_max < ri {
                            r_max = ri;
                            c_max = ci;
                            if self.pick_one_only {
                                break;
                            }
                        }
                    }
                }
            }

            if r_max <= *ratio {
                break;
            }
            best_cycle = c_max;
            *ratio = r_max;
            reverse = !reverse;
            iterations += 1;
        }

        Ok(ParametricSolution {
            ratio: *ratio,
            cycle: best_cycle,
            iteration_limit_reached,
        })
    }
}
