pub mod edmonds_karp;
pub mod error;
pub mod ford_fulkerson;
pub mod graph;
pub mod residual;
pub mod solution;

pub use edmonds_karp::EdmondsKarp;
pub use error::FlowError;
pub use ford_fulkerson::FordFulkerson;
pub use graph::{Edge, FlowNetwork};
pub use residual::ResidualNetwork;
pub use solution::MaximumFlow;

/// A strategy that saturates a residual network by repeatedly pushing flow
/// along source-to-sink paths of strictly positive residual capacity.
///
/// `solve` returns the total flow pushed. On return without error, no
/// augmenting path is left in `residual`.
pub trait AugmentingPathSolver<Flow> {
    fn solve(&mut self, source: usize, sink: usize, residual: &mut ResidualNetwork<Flow>) -> Result<Flow, FlowError>;

    /// Augmentations performed by the last call to `solve`.
    fn num_augmentations(&self) -> usize;
}
