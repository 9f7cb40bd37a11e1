use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::residual::ResidualNetwork;
use crate::maximum_flow::AugmentingPathSolver;
use log::{trace, warn};
use num_traits::{CheckedAdd, NumAssign};
use std::fmt::Debug;

/// Augments along whatever residual path a depth-first search reaches first.
/// Terminates on integer capacities, but the number of augmentations is only
/// bounded by the flow value.
#[derive(Default, Debug, Clone)]
pub struct FordFulkerson {
    augmentation_limit: Option<usize>,
    num_augmentations: usize,
    prev: Vec<(usize, usize)>,
    visited: Vec<bool>,
    stack: Vec<(usize, usize)>,
}

impl FordFulkerson {
    pub fn with_augmentation_limit(limit: usize) -> Self {
        Self { augmentation_limit: Some(limit), ..Self::default() }
    }

    // stack entries are (vertex, next arc to scan)
    fn dfs<Flow>(&mut self, source: usize, sink: usize, residual: &ResidualNetwork<Flow>) -> bool
    where
        Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
    {
        self.visited.fill(false);
        self.stack.clear();

        self.visited[source] = true;
        self.stack.push((source, residual.arcs(source).start));
        while let Some(top) = self.stack.last_mut() {
            let (u, arc_index) = *top;
            if arc_index == residual.arcs(u).end {
                self.stack.pop();
                continue;
            }
            top.1 += 1;

            let arc = residual.arc(arc_index);
            if self.visited[arc.to] || arc.residual_capacity() == Flow::zero() {
                continue;
            }

            self.visited[arc.to] = true;
            self.prev[arc.to] = (u, arc_index);
            if arc.to == sink {
                return true;
            }
            self.stack.push((arc.to, residual.arcs(arc.to).start));
        }
        false
    }
}

impl<Flow> AugmentingPathSolver<Flow> for FordFulkerson
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    fn solve(&mut self, source: usize, sink: usize, residual: &mut ResidualNetwork<Flow>) -> Result<Flow, FlowError> {
        residual.check_vertex(source)?;
        residual.check_vertex(sink)?;
        self.num_augmentations = 0;
        self.prev.resize(residual.num_nodes(), (usize::MAX, usize::MAX));
        self.visited.resize(residual.num_nodes(), false);

        let mut flow = Flow::zero();
        while self.dfs(source, sink, residual) {
            if self.augmentation_limit.is_some_and(|limit| self.num_augmentations >= limit) {
                warn!("ford-fulkerson stopped with an augmenting path left after {} augmentations", self.num_augmentations);
                return Err(FlowError::Unconverged { augmentations: self.num_augmentations });
            }

            let mut delta = residual.residual_capacity(self.prev[sink].1);
            let mut v = sink;
            while v != source {
                let (u, arc_index) = self.prev[v];
                delta = delta.min(residual.residual_capacity(arc_index));
                v = u;
            }

            let mut v = sink;
            while v != source {
                let (u, arc_index) = self.prev[v];
                residual.push_flow(arc_index, delta);
                v = u;
            }

            flow = flow.checked_add(&delta).ok_or_else(|| {
                warn!("ford-fulkerson flow value overflowed after {} augmentations", self.num_augmentations);
                FlowError::FlowOverflow
            })?;
            self.num_augmentations += 1;
            trace!("augmented {:?}", delta);
        }

        Ok(flow)
    }

    fn num_augmentations(&self) -> usize {
        self.num_augmentations
    }
}
