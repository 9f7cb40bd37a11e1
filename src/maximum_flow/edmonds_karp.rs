use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::residual::ResidualNetwork;
use crate::maximum_flow::AugmentingPathSolver;
use log::{trace, warn};
use num_traits::{CheckedAdd, NumAssign};
use std::collections::VecDeque;
use std::fmt::Debug;

/// Augments along shortest (fewest-arc) residual paths found by BFS,
/// which bounds the number of augmentations by O(nm).
#[derive(Default, Debug, Clone)]
pub struct EdmondsKarp {
    augmentation_limit: Option<usize>,
    num_augmentations: usize,
    prev: Vec<(usize, usize)>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl EdmondsKarp {
    /// Fails with [`FlowError::Unconverged`] if an augmenting path remains
    /// after `limit` augmentations.
    pub fn with_augmentation_limit(limit: usize) -> Self {
        Self { augmentation_limit: Some(limit), ..Self::default() }
    }

    // parent pointers are set on first discovery, so the path to sink is a shortest one
    fn bfs<Flow>(&mut self, source: usize, sink: usize, residual: &ResidualNetwork<Flow>) -> bool
    where
        Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
    {
        self.prev.fill((usize::MAX, usize::MAX));
        self.visited.fill(false);
        self.queue.clear();

        self.visited[source] = true;
        self.queue.push_back(source);
        while let Some(u) = self.queue.pop_front() {
            for arc_index in residual.arcs(u) {
                let arc = residual.arc(arc_index);
                if self.visited[arc.to] || arc.residual_capacity() == Flow::zero() {
                    continue;
                }

                self.visited[arc.to] = true;
                self.prev[arc.to] = (u, arc_index);
                if arc.to == sink {
                    return true;
                }
                self.queue.push_back(arc.to);
            }
        }
        false
    }
}

impl<Flow> AugmentingPathSolver<Flow> for EdmondsKarp
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
        while self.bfs(source, sink, residual) {
            if self.augmentation_limit.is_some_and(|limit| self.num_augmentations >= limit) {
                warn!("edmonds-karp stopped with an augmenting path left after {} augmentations", self.num_augmentations);
                return Err(FlowError::Unconverged { augmentations: self.num_augmentations });
            }

            // calculate delta
            let mut delta = residual.residual_capacity(self.prev[sink].1);
            let mut path_len = 0;
            let mut v = sink;
            while v != source {
                let (u, arc_index) = self.prev[v];
                delta = delta.min(residual.residual_capacity(arc_index));
                path_len += 1;
                v = u;
            }

            // update flow
            let mut v = sink;
            while v != source {
                let (u, arc_index) = self.prev[v];
                residual.push_flow(arc_index, delta);
                v = u;
            }

            flow = flow.checked_add(&delta).ok_or_else(|| {
                warn!("edmonds-karp flow value overflowed after {} augmentations", self.num_augmentations);
                FlowError::FlowOverflow
            })?;
            self.num_augmentations += 1;
            trace!("augmented {:?} along a path of {} arcs", delta, path_len);
        }

        Ok(flow)
    }

    fn num_augmentations(&self) -> usize {
        self.num_augmentations
    }
}
