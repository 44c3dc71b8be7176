//! # cyratio-rs
//!
//! Negative-cycle detection and parametric cycle-ratio optimization over
//! `petgraph` directed graphs.
//!
//! ## Features
//!
//! - **Howard's method** ([`neg_cycle`]) — lazy negative-cycle detection via
//!   policy iteration, generic over both the graph and the distance domain.
//! - **Parametric solvers** ([`parametric`]) — `max r` / `min r` fixed-point
//!   loops built on the finder, parametrised by a domain-supplied oracle.
//! - **Minimum cycle ratio** ([`cycle_ratio`]) — the `(cost, time)`
//!   specialisation of the parametric solver.
//!
//! ## Quick Start
//!
//! ```rust
//! use cyratio_rs::neg_cycle::NegCycleFinder;
//! use petgraph::Graph;
//! use petgraph::visit::EdgeRef;
//!
//! let mut g = Graph::new();
//! let a = g.add_node(());
//! let b = g.add_node(());
//! let c = g.add_node(());
//! g.extend_with_edges([(a, b, 1.0), (b, c, 1.0), (c, a, -3.0)]);
//!
//! let mut ncf = NegCycleFinder::new(&g);
//! let mut dist = vec![0.0_f64; g.node_count()];
//! let cycle = ncf.howard(&mut dist, |e| *e.weight()).unwrap().next();
//! assert!(cycle.is_some());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - the crate's error types
//! - [`graph`] - the read-only graph view contract
//! - [`neg_cycle`] - negative cycle detection via Howard's method
//! - [`parametric`] - parametric max-ratio / min-ratio solvers
//! - [`cycle_ratio`] - the minimum-cycle-ratio specialisation

pub mod cycle_ratio;
pub mod error;
pub mod graph;
pub mod neg_cycle;
pub mod parametric;

pub mod prelude;
