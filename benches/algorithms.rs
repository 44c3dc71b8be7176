//! Benchmark suite for cyratio-rs using criterion

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cyratio_rs::cycle_ratio::{CostTime, MinCycleRatioSolver};
use cyratio_rs::error::DomainError;
use cyratio_rs::neg_cycle::NegCycleFinder;
use cyratio_rs::parametric::{MaxParametricSolver, ParametricOracle};
use num::rational::Ratio;
use petgraph::graph::{DiGraph, EdgeReference};
use petgraph::visit::EdgeRef;

fn bench_neg_cycle_finder_howard_small(c: &mut Criterion) {
    let mut g: DiGraph<(), f64> = DiGraph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    let d = g.add_node(());
    g.extend_with_edges([(a, b, 1.0), (b, d, 1.0), (d, a, -3.0)]);

    c.bench_function("neg_cycle_finder_howard_small", |b| {
        b.iter(|| {
            let mut ncf = NegCycleFinder::new(black_box(&g));
            let mut dist = vec![0.0_f64; g.node_count()];
            ncf.howard(black_box(&mut dist), |e| *e.weight())
                .unwrap()
                .next()
        })
    });
}

fn bench_neg_cycle_finder_howard_medium(c: &mut Criterion) {
    let digraph = DiGraph::<(), Ratio<i32>>::from_edges(
        (0u32..100)
            .flat_map(|i| (0u32..100).map(move |j| (i, j, Ratio::new((i + j) as i32 % 10, 1))))
            .take(500),
    );
    let dist = vec![Ratio::new(0, 1); digraph.node_count()];

    c.bench_function("neg_cycle_finder_howard_medium", |b| {
        b.iter(|| {
            let mut ncf = NegCycleFinder::new(black_box(&digraph));
            let mut dist = dist.clone();
            ncf.howard(black_box(&mut dist), |e| *e.weight())
                .unwrap()
                .next()
        })
    });
}

#[derive(Debug)]
struct MyRatio {}

impl<'a> ParametricOracle<EdgeReference<'a, Ratio<i32>>, Ratio<i32>> for MyRatio {
    fn distance(&self, ratio: &Ratio<i32>, edge: &EdgeReference<'a, Ratio<i32>>) -> Ratio<i32> {
        *edge.weight() - *ratio
    }

    fn zero_cancel(&self, cycle: &[EdgeReference<'a, Ratio<i32>>]) -> Result<Ratio<i32>, DomainError> {
        let mut total_weight = Ratio::new(0, 1);
        for edge in cycle {
            total_weight += *edge.weight();
        }
        Ok(total_weight / Ratio::from_integer(cycle.len() as i32))
    }
}

fn bench_parametric_solver(c: &mut Criterion) {
    let digraph = DiGraph::<(), Ratio<i32>>::from_edges([
        (0, 1, Ratio::new(1, 1)),
        (1, 2, Ratio::new(1, 1)),
        (2, 0, Ratio::new(1, 1)),
        (2, 3, Ratio::new(2, 1)),
        (3, 4, Ratio::new(3, 1)),
        (4, 5, Ratio::new(1, 1)),
        (5, 6, Ratio::new(1, 1)),
        (6, 0, Ratio::new(2, 1)),
    ]);

    c.bench_function("parametric_solver", |b| {
        b.iter(|| {
            let mut solver = MaxParametricSolver::new(black_box(&digraph), MyRatio {});
            let mut dist = vec![Ratio::new(0, 1); digraph.node_count()];
            let mut ratio = Ratio::new(1_000_000, 1);
            solver.run(black_box(&mut dist), black_box(&mut ratio))
        })
    });
}

fn bench_min_cycle_ratio_solver(c: &mut Criterion) {
    let digraph = DiGraph::<(), CostTime<Ratio<i64>>>::from_edges([
        (0, 1, CostTime::new(Ratio::new(1, 1), Ratio::new(1, 1))),
        (1, 2, CostTime::new(Ratio::new(5, 1), Ratio::new(1, 1))),
        (2, 3, CostTime::new(Ratio::new(1, 1), Ratio::new(1, 1))),
        (3, 4, CostTime::new(Ratio::new(1, 1), Ratio::new(1, 1))),
        (4, 0, CostTime::new(Ratio::new(1, 1), Ratio::new(1, 1))),
    ]);

    c.bench_function("min_cycle_ratio_solver", |b| {
        b.iter(|| {
            let mut solver = MinCycleRatioSolver::new(black_box(&digraph));
            let mut dist = vec![Ratio::new(0, 1); digraph.node_count()];
            solver.run(black_box(&mut dist), Ratio::new(10_000, 1))
        })
    });
}

criterion_group!(
    benches,
    bench_neg_cycle_finder_howard_small,
    bench_neg_cycle_finder_howard_medium,
    bench_parametric_solver,
    bench_min_cycle_ratio_solver
);
criterion_main!(benches);
