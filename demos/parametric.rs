//! Parametric algorithm example

use cyratio_rs::error::DomainError;
use cyratio_rs::parametric::{MaxParametricSolver, ParametricOracle};
use num::rational::Ratio;
use petgraph::graph::{DiGraph, EdgeReference};
use petgraph::visit::EdgeRef;

#[derive(Debug)]
struct MyRatio {}

impl<'a> ParametricOracle<EdgeReference<'a, Ratio<i32>>, Ratio<i32>> for MyRatio {
    fn distance(&self, ratio: &Ratio<i32>, edge: &EdgeReference<'a, Ratio<i32>>) -> Ratio<i32> {
        *edge.weight() - *ratio
    }

    fn zero_cancel(&self, cycle: &[EdgeReference<'a, Ratio<i32>>]) -> Result<Ratio<i32>, DomainError> {
        if cycle.is_empty() {
            return Err(DomainError::ZeroDivisor);
        }
        let total_weight: Ratio<i32> = cycle.iter().map(|e| *e.weight()).sum();
        Ok(total_weight / Ratio::from_integer(cycle.len() as i32))
    }
}

fn main() {
    // Create a directed graph with weights
    let digraph = DiGraph::<(), Ratio<i32>>::from_edges([
        (0, 1, Ratio::new(1, 1)),
        (1, 2, Ratio::new(1, 1)),
        (2, 0, Ratio::new(1, 1)),
    ]);

    // Create solver with custom ratio implementation
    let mut solver = MaxParametricSolver::new(&digraph, MyRatio {});

    // Initialize distances and ratio
    let mut dist = [Ratio::new(0, 1), Ratio::new(0, 1), Ratio::new(0, 1)];
    let mut ratio = Ratio::new(1_000_000, 1); // Start with large ratio

    // Run the parametric solver
    let solution = solver.run(&mut dist, &mut ratio).unwrap();

    println!("Minimum ratio found: {}", solution.ratio);
    println!("Cycle: {:?}", solution.cycle);

    // Example 2: Negative cycle
    println!("\n=== Example with negative cycle ===");
    let digraph_neg = DiGraph::<(), Ratio<i32>>::from_edges([
        (0, 1, Ratio::new(1, 1)),
        (1, 2, Ratio::new(-5, 1)),
        (2, 0, Ratio::new(1, 1)),
    ]);

    let mut solver2 = MaxParametricSolver::new(&digraph_neg, MyRatio {});
    let mut dist2 = [Ratio::new(0, 1), Ratio::new(0, 1), Ratio::new(0, 1)];
    let mut ratio2 = Ratio::new(1_000_000, 1);

    let solution2 = solver2.run(&mut dist2, &mut ratio2).unwrap();

    println!("Minimum ratio found: {}", solution2.ratio);
    println!("Cycle: {:?}", solution2.cycle);
}
