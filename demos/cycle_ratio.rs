//! Minimum cycle ratio example

use cyratio_rs::cycle_ratio::{CostTime, MinCycleRatioSolver};
use petgraph::graph::DiGraph;

fn main() {
    let mut g: DiGraph<(), CostTime<f64>> = DiGraph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    let c = g.add_node(());
    g.add_edge(a, b, CostTime::new(1.0, 1.0));
    g.add_edge(b, c, CostTime::new(1.0, 1.0));
    g.add_edge(c, a, CostTime::new(4.0, 1.0));

    let mut solver = MinCycleRatioSolver::new(&g);
    let mut dist = vec![0.0_f64; g.node_count()];
    let solution = solver.run(&mut dist, 1_000_000.0).unwrap();

    println!("Minimum cycle ratio: {}", solution.ratio);
    println!("Witnessing cycle has {} edges", solution.cycle.len());
}
