//! Read-only graph view contract consumed by the negative-cycle finder.
//!
//! The finder never constructs or mutates a graph; it only walks one. This
//! module names that contract as a trait so the rest of the crate documents
//! its dependency on "some iterable adjacency" rather than a concrete
//! container, while still getting a free blanket impl over anything
//! `petgraph` already knows how to traverse.

use petgraph::visit::{IntoEdges, IntoNodeIdentifiers, NodeCount, NodeIndexable};

/// Stable, read-only adjacency: enumerate nodes once, and for each node
/// enumerate its outgoing edges once, both in a stable order across calls.
///
/// Blanket-implemented for any type satisfying the four underlying
/// `petgraph::visit` traits, so `&DiGraph<V, E>` and `&StableDiGraph<V, E>`
/// both qualify without extra glue.
pub trait GraphView: NodeCount + IntoNodeIdentifiers + IntoEdges + NodeIndexable {}

impl<G> GraphView for G where G: NodeCount + IntoNodeIdentifiers + IntoEdges + NodeIndexable {}
