//! Negative cycle detection example

use cyratio_rs::neg_cycle::NegCycleFinder;
use petgraph::visit::EdgeRef;
use petgraph::Graph;

fn main() {
    println!("=== Example 1: Graph with negative cycle ===");
    let mut g_with_cycle = Graph::new();
    let a = g_with_cycle.add_node(());
    let b = g_with_cycle.add_node(());
    let c = g_with_cycle.add_node(());

    // Add edges creating a negative cycle: a -> b -> c -> a
    g_with_cycle.extend_with_edges([(a, b, 1.0), (b, c, 1.0), (c, a, -3.0)]);

    let mut ncf = NegCycleFinder::new(&g_with_cycle);
    let mut dist = vec![0.0_f64; g_with_cycle.node_count()];
    let cycle = ncf.howard(&mut dist, |e| *e.weight()).unwrap().next();
    match cycle {
        Some(edges) => {
            println!("Negative cycle found, {} edges:", edges.len());
            for e in &edges {
                println!("  {:?} -> {:?} ({})", e.source(), e.target(), e.weight());
            }
        }
        None => println!("No negative cycle found."),
    }

    println!("\n=== Example 2: Graph without negative cycle ===");
    let mut g_no_cycle = Graph::new();
    let x = g_no_cycle.add_node(());
    let y = g_no_cycle.add_node(());
    let z = g_no_cycle.add_node(());
    g_no_cycle.extend_with_edges([(x, y, 1.0), (y, z, 1.0), (z, x, 1.0)]);

    let mut ncf = NegCycleFinder::new(&g_no_cycle);
    let mut dist = vec![0.0_f64; g_no_cycle.node_count()];
    let cycle = ncf.howard_exhaustive(&mut dist, |e| *e.weight()).unwrap().next();
    match cycle {
        Some(edges) => println!("Negative cycle found: {} edges", edges.len()),
        None => println!("No negative cycle found. All edge weights sum to non-negative."),
    }

    println!("\n=== Example 3: Simple two-node negative cycle, exhaustive scan ===");
    let mut g_simple = Graph::new();
    let n1 = g_simple.add_node(());
    let n2 = g_simple.add_node(());
    g_simple.extend_with_edges([(n1, n2, 1.0), (n2, n1, -2.0)]);

    let mut ncf = NegCycleFinder::new(&g_simple);
    let mut dist = vec![0.0_f64; g_simple.node_count()];
    for (i, edges) in ncf
        .howard_exhaustive(&mut dist, |e| *e.weight())
        .unwrap()
        .enumerate()
    {
        println!("cycle {}: {} edges", i, edges.len());
    }
}
