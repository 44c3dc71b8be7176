//! Negative-cycle detection over a generic graph view, via Howard's
//! policy-iteration method: repeated Bellman-Ford relaxation rounds, each
//! followed by a scan of the resulting predecessor (or successor) policy
//! graph for a cycle.
//!
//! The finder is generic over two independent type parameters: `G`, the
//! graph itself (anything satisfying [`GraphView`]), and `D`, the domain
//! used to accumulate distances. `D` is deliberately not tied to `G`'s own
//! edge weight type — callers supply a `get_weight` closure that turns an
//! edge reference into a `D`, so the same finder works whether the caller
//! is accumulating plain weights, shifted weights (`w - ratio`), or
//! `(cost, time)` pairs reduced to a scalar.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

use petgraph::visit::EdgeRef as _;

use crate::error::FinderError;
use crate::graph::GraphView;

/// A negative cycle, as the ordered sequence of edges that compose it.
pub type Cycle<G> = Vec<<G as petgraph::visit::IntoEdges>::EdgeRef>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Pred,
    Succ,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YieldMode {
    OneShot,
    Exhaustive,
}

/// Finds negative cycles in a directed graph.
///
/// Maintains a predecessor policy graph (`pred`) and, for the directional
/// variants, a successor policy graph (`succ`). Each entry maps a node to
/// the node and edge it was last relaxed from.
#[derive(Debug)]
pub struct NegCycleFinder<G, D>
where
    G: GraphView,
    G::NodeId: Eq + Hash,
{
    digraph: G,
    pred: HashMap<G::NodeId, (G::NodeId, G::EdgeRef)>,
    succ: HashMap<G::NodeId, (G::NodeId, G::EdgeRef)>,
    _domain: PhantomData<D>,
}

impl<G, D> NegCycleFinder<G, D>
where
    G: GraphView,
    G::NodeId: Eq + Hash,
    D: Copy + PartialOrd + Add<Output = D>,
{
    /// Creates a new finder over `digraph`, with empty policy graphs.
    pub fn new(digraph: G) -> Self {
        NegCycleFinder {
            digraph,
            pred: HashMap::new(),
            succ: HashMap::new(),
            _domain: PhantomData,
        }
    }

    /// The graph this finder walks.
    pub fn digraph(&self) -> G {
        self.digraph
    }

    fn check_dist_len(&self, dist: &[D]) -> Result<(), FinderError> {
        let required = self.digraph.node_bound();
        if dist.len() < required {
            return Err(FinderError::DistanceMapTooShort {
                required,
                found: dist.len(),
            });
        }
        Ok(())
    }

    /// Relaxes every edge once, gated by `update_ok(old, new)`: an edge
    /// `(u, v, e)` with `dist[u] + w(e) < dist[v]` only updates `dist[v]`
    /// when `update_ok` also agrees. Returns whether anything changed.
    pub fn relax_pred<F, U>(&mut self, dist: &mut [D], get_weight: F, update_ok: U) -> bool
    where
        F: Fn(G::EdgeRef) -> D,
        U: Fn(D, D) -> bool,
    {
        let mut changed = false;
        for utx in self.digraph.node_identifiers() {
            for edge in self.digraph.edges(utx) {
                let vtx = edge.target();
                let candidate = dist[self.digraph.to_index(utx)] + get_weight(edge);
                let iv = self.digraph.to_index(vtx);
                if candidate < dist[iv] && update_ok(dist[iv], candidate) {
                    dist[iv] = candidate;
                    self.pred.insert(vtx, (utx, edge));
                    changed = true;
                }
            }
        }
        changed
    }

    /// Plain forward relaxation, with no admissibility gate.
    pub fn relax<F>(&mut self, dist: &mut [D], get_weight: F) -> bool
    where
        F: Fn(G::EdgeRef) -> D,
    {
        self.relax_pred(dist, get_weight, |_, _| true)
    }

    /// Scans `point_to` for nodes that close a cycle: walk each node's chain
    /// of predecessors, tagging visited nodes with the chain's starting
    /// node, and record a hit whenever the walk returns to a node tagged by
    /// its own start.
    fn scan_cycles(&self, point_to: &HashMap<G::NodeId, (G::NodeId, G::EdgeRef)>) -> Vec<G::NodeId> {
        let mut visited: HashMap<G::NodeId, G::NodeId> = HashMap::new();
        let mut found = Vec::new();
        for vtx in self.digraph.node_identifiers() {
            if visited.contains_key(&vtx) {
                continue;
            }
            let mut utx = vtx;
            loop {
                visited.insert(utx, vtx);
                let next = match point_to.get(&utx) {
                    None => break,
                    Some(&(next, _)) => next,
                };
                utx = next;
                if let Some(&tag) = visited.get(&utx) {
                    if tag == vtx {
                        found.push(utx);
                    }
                    break;
                }
            }
        }
        found
    }

    /// The first node closing a cycle in the predecessor policy graph, if any.
    pub fn find_cycle(&self) -> Option<G::NodeId> {
        self.scan_cycles(&self.pred).into_iter().next()
    }

    /// Every distinct node closing a cycle in the predecessor policy graph.
    pub fn find_cycles(&self) -> Vec<G::NodeId> {
        self.scan_cycles(&self.pred)
    }

    fn cycle_list_from(
        &self,
        handle: G::NodeId,
        point_to: &HashMap<G::NodeId, (G::NodeId, G::EdgeRef)>,
    ) -> Cycle<G> {
        let mut cycle = Vec::new();
        let mut vtx = handle;
        loop {
            let (utx, edge) = point_to[&vtx];
            cycle.push(edge);
            vtx = utx;
            if vtx == handle {
                break;
            }
        }
        cycle
    }

    /// Reconstructs the cycle closing at `handle`, reading it back out of
    /// the predecessor policy graph.
    pub fn cycle_list(&self, handle: G::NodeId) -> Cycle<G> {
        self.cycle_list_from(handle, &self.pred)
    }

    /// Confirms at least one edge on the predecessor-direction cycle closing
    /// at `handle` violates the triangle inequality under `get_weight` and
    /// `dist`. Used only in debug assertions around cycle yield points.
    pub fn is_negative<F>(&self, handle: G::NodeId, dist: &[D], get_weight: F) -> bool
    where
        F: Fn(G::EdgeRef) -> D,
    {
        let mut vtx = handle;
        loop {
            let (utx, edge) = self.pred[&vtx];
            let lhs = dist[self.digraph.to_index(utx)] + get_weight(edge);
            if lhs < dist[self.digraph.to_index(vtx)] {
                return true;
            }
            vtx = utx;
            if vtx == handle {
                return false;
            }
        }
    }

    /// One-shot Howard's method: relax and scan for cycles, yield whatever
    /// the first cycle-bearing round finds, then stop.
    pub fn howard<F>(
        &mut self,
        dist: &mut [D],
        get_weight: F,
    ) -> Result<Cycles<'_, G, D, F, fn(D, D) -> bool>, FinderError>
    where
        F: Fn(G::EdgeRef) -> D,
    {
        self.check_dist_len(dist)?;
        self.pred.clear();
        Ok(Cycles::new(
            self,
            dist,
            get_weight,
            (|_, _| true) as fn(D, D) -> bool,
            Direction::Pred,
            YieldMode::OneShot,
        ))
    }

    /// Like [`Self::howard`], but keeps relaxing and scanning across further
    /// rounds until a round performs no update at all.
    pub fn howard_exhaustive<F>(
        &mut self,
        dist: &mut [D],
        get_weight: F,
    ) -> Result<Cycles<'_, G, D, F, fn(D, D) -> bool>, FinderError>
    where
        F: Fn(G::EdgeRef) -> D,
    {
        self.check_dist_len(dist)?;
        self.pred.clear();
        Ok(Cycles::new(
            self,
            dist,
            get_weight,
            (|_, _| true) as fn(D, D) -> bool,
            Direction::Pred,
            YieldMode::Exhaustive,
        ))
    }

    /// One-shot Howard's method, forward direction, with an explicit
    /// admissibility gate on each relaxation.
    pub fn howard_pred<F, U>(
        &mut self,
        dist: &mut [D],
        get_weight: F,
        update_ok: U,
    ) -> Result<Cycles<'_, G, D, F, U>, FinderError>
    where
        F: Fn(G::EdgeRef) -> D,
        U: Fn(D, D) -> bool,
    {
        self.check_dist_len(dist)?;
        self.pred.clear();
        Ok(Cycles::new(
            self,
            dist,
            get_weight,
            update_ok,
            Direction::Pred,
            YieldMode::OneShot,
        ))
    }
}

impl<G, D> NegCycleFinder<G, D>
where
    G: GraphView,
    G::NodeId: Eq + Hash,
    D: Copy + PartialOrd + Add<Output = D> + Sub<Output = D>,
{
    /// Relaxes every edge once in reverse: for edge `(u, v, e)`, considers
    /// `dist[v] - w(e)` as a candidate for `dist[u]`, gated by `update_ok`.
    pub fn relax_succ<F, U>(&mut self, dist: &mut [D], get_weight: F, update_ok: U) -> bool
    where
        F: Fn(G::EdgeRef) -> D,
        U: Fn(D, D) -> bool,
    {
        let mut changed = false;
        for utx in self.digraph.node_identifiers() {
            for edge in self.digraph.edges(utx) {
                let vtx = edge.target();
                let candidate = dist[self.digraph.to_index(vtx)] - get_weight(edge);
                let iu = self.digraph.to_index(utx);
                if dist[iu] < candidate && update_ok(dist[iu], candidate) {
                    dist[iu] = candidate;
                    self.succ.insert(utx, (vtx, edge));
                    changed = true;
                }
            }
        }
        changed
    }

    /// One-shot Howard's method, reverse direction, with an explicit
    /// admissibility gate on each relaxation.
    pub fn howard_succ<F, U>(
        &mut self,
        dist: &mut [D],
        get_weight: F,
        update_ok: U,
    ) -> Result<Cycles<'_, G, D, F, U>, FinderError>
    where
        F: Fn(G::EdgeRef) -> D,
        U: Fn(D, D) -> bool,
    {
        self.check_dist_len(dist)?;
        self.succ.clear();
        Ok(Cycles::new(
            self,
            dist,
            get_weight,
            update_ok,
            Direction::Succ,
            YieldMode::OneShot,
        ))
    }
}

/// A lazy stream of negative cycles. Each call to `next()` does only as
/// much relaxation and policy-graph scanning as needed to produce (or rule
/// out) one more cycle, so a caller can stop consuming the iterator as soon
/// as it has enough.
pub struct Cycles<'a, G, D, F, U>
where
    G: GraphView,
    G::NodeId: Eq + Hash,
{
    finder: &'a mut NegCycleFinder<G, D>,
    dist: &'a mut [D],
    get_weight: F,
    update_ok: U,
    direction: Direction,
    mode: YieldMode,
    pending: VecDeque<G::NodeId>,
    exhausted: bool,
}

impl<'a, G, D, F, U> Cycles<'a, G, D, F, U>
where
    G: GraphView,
    G::NodeId: Eq + Hash,
{
    fn new(
        finder: &'a mut NegCycleFinder<G, D>,
        dist: &'a mut [D],
        get_weight: F,
        update_ok: U,
        direction: Direction,
        mode: YieldMode,
    ) -> Self {
        Cycles {
            finder,
            dist,
            get_weight,
            update_ok,
            direction,
            mode,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Aborts the current scan without relaxing or scanning further. Useful
    /// for a caller that wants to cancel a long-running exhaustive search.
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.exhausted = true;
    }
}

impl<'a, G, D, F, U> Iterator for Cycles<'a, G, D, F, U>
where
    G: GraphView,
    G::NodeId: Eq + Hash,
    D: Copy + PartialOrd + Add<Output = D> + Sub<Output = D>,
    F: Fn(G::EdgeRef) -> D,
    U: Fn(D, D) -> bool,
{
    type Item = Cycle<G>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(handle) = self.pending.pop_front() {
                return Some(match self.direction {
                    Direction::Pred => {
                        debug_assert!(self.finder.is_negative(handle, &*self.dist, &self.get_weight));
                        self.finder.cycle_list_from(handle, &self.finder.pred)
                    }
                    Direction::Succ => self.finder.cycle_list_from(handle, &self.finder.succ),
                });
            }
            if self.exhausted {
                return None;
            }
            let changed = match self.direction {
                Direction::Pred => {
                    self.finder
                        .relax_pred(&mut *self.dist, &self.get_weight, &self.update_ok)
                }
                Direction::Succ => {
                    self.finder
                        .relax_succ(&mut *self.dist, &self.get_weight, &self.update_ok)
                }
            };
            if !changed {
                self.exhausted = true;
                return None;
            }
            let found = match self.direction {
                Direction::Pred => self.finder.scan_cycles(&self.finder.pred),
                Direction::Succ => self.finder.scan_cycles(&self.finder.succ),
            };
            if found.is_empty() {
                continue;
            }
            self.pending.extend(found);
            if self.mode == YieldMode::OneShot {
                self.exhausted = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::rational::Ratio;
    use petgraph::graph::DiGraph;

    #[test]
    fn finds_a_simple_negative_cycle() {
        let mut g: DiGraph<(), f64> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.extend_with_edges([(a, b, 1.0), (b, c, 1.0), (c, a, -3.0)]);

        let mut ncf = NegCycleFinder::new(&g);
        let mut dist = vec![0.0_f64; g.node_count()];
        let cycle = ncf
            .howard(&mut dist, |e| *e.weight())
            .expect("dist map is long enough")
            .next();
        assert!(cycle.is_some());
        assert_eq!(cycle.unwrap().len(), 3);
    }

    #[test]
    fn no_cycle_when_graph_is_acyclic() {
        let mut g: DiGraph<(), f64> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.extend_with_edges([(a, b, 1.0), (b, c, 1.0)]);

        let mut ncf = NegCycleFinder::new(&g);
        let mut dist = vec![0.0_f64; g.node_count()];
        let mut cycles = ncf.howard_exhaustive(&mut dist, |e| *e.weight()).unwrap();
        assert!(cycles.next().is_none());
    }

    #[test]
    fn rejects_a_too_short_distance_map() {
        let mut g: DiGraph<(), f64> = DiGraph::new();
        g.add_node(());
        g.add_node(());

        let mut ncf: NegCycleFinder<_, f64> = NegCycleFinder::new(&g);
        let mut dist = vec![0.0_f64; 1];
        let err = ncf.howard(&mut dist, |e| *e.weight()).unwrap_err();
        assert_eq!(
            err,
            FinderError::DistanceMapTooShort {
                required: 2,
                found: 1
            }
        );
    }

    #[test]
    fn positive_cycles_are_not_reported() {
        let mut g: DiGraph<(), f64> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.extend_with_edges([(a, b, 1.0), (b, a, 2.0)]);

        let mut ncf = NegCycleFinder::new(&g);
        let mut dist = vec![0.0_f64; g.node_count()];
        let mut cycles = ncf.howard_exhaustive(&mut dist, |e| *e.weight()).unwrap();
        assert!(cycles.next().is_none());
    }

    #[test]
    fn matches_the_teacher_style_ratio_fixture() {
        let digraph = DiGraph::<(), Ratio<i32>>::from_edges([
            (0, 1, Ratio::new(1, 1)),
            (0, 2, Ratio::new(1, 1)),
            (0, 3, Ratio::new(1, 1)),
            (1, 3, Ratio::new(1, 1)),
            (2, 1, Ratio::new(1, 1)),
            (3, 2, Ratio::new(-3, 1)),
        ]);

        let mut ncf = NegCycleFinder::new(&digraph);
        let mut dist = [
            Ratio::new(0, 1),
            Ratio::new(0, 1),
            Ratio::new(0, 1),
            Ratio::new(0, 1),
        ];
        let result = ncf.howard(&mut dist, |e| *e.weight()).unwrap().next();
        assert!(result.is_some());
    }
}
