use crate::maximum_flow::graph::FlowNetwork;
use crate::maximum_flow::residual::ResidualNetwork;
use num_traits::{CheckedAdd, NumAssign};
use std::collections::BTreeSet;
use std::fmt::Debug;

/// Terminal state of one maximum flow query.
#[derive(Debug, Clone, PartialEq)]
pub struct MaximumFlow<Flow> {
    source: usize,
    sink: usize,
    value: Flow,
    edge_flows: Vec<Flow>,
    source_side: Vec<bool>,
    num_augmentations: usize,
}

impl<Flow> MaximumFlow<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    pub(crate) fn new(source: usize, sink: usize, value: Flow, residual: &ResidualNetwork<Flow>, num_augmentations: usize) -> Self {
        Self { source, sink, value, edge_flows: residual.edge_flows(), source_side: residual.reachable_from(source), num_augmentations }
    }

    #[inline]
    pub fn value(&self) -> Flow {
        self.value
    }

    #[inline]
    pub fn num_augmentations(&self) -> usize {
        self.num_augmentations
    }

    /// Flow on the network edge `edge_id`.
    pub fn flow(&self, edge_id: usize) -> Option<Flow> {
        self.edge_flows.get(edge_id).copied()
    }

    pub fn edge_flows(&self) -> &[Flow] {
        &self.edge_flows
    }

    /// Vertices reachable from the source over positive residual capacity.
    pub fn source_side(&self) -> Vec<usize> {
        (0..self.source_side.len()).filter(|&v| self.source_side[v]).collect()
    }

    pub fn is_source_side(&self, vertex: usize) -> bool {
        self.source_side.get(vertex).copied().unwrap_or(false)
    }

    /// Flow entering `vertex`, or `None` if the sum does not fit in `Flow`.
    pub fn inflow(&self, network: &FlowNetwork<Flow>, vertex: usize) -> Option<Flow> {
        network.edges().iter().zip(&self.edge_flows).filter(|(e, _)| e.to == vertex).try_fold(Flow::zero(), |sum, (_, f)| sum.checked_add(f))
    }

    /// Flow leaving `vertex`, or `None` if the sum does not fit in `Flow`.
    pub fn outflow(&self, network: &FlowNetwork<Flow>, vertex: usize) -> Option<Flow> {
        network.edges().iter().zip(&self.edge_flows).filter(|(e, _)| e.from == vertex).try_fold(Flow::zero(), |sum, (_, f)| sum.checked_add(f))
    }

    /// Edges leaving the source side. `network` must be the one this flow was
    /// computed on; vertices it has beyond that one count as sink side.
    pub fn minimum_cut_edges(&self, network: &FlowNetwork<Flow>) -> BTreeSet<(usize, usize)> {
        if self.source == self.sink {
            return BTreeSet::new();
        }
        network.edges().iter().filter(|e| self.is_source_side(e.from) && !self.is_source_side(e.to)).map(|e| (e.from, e.to)).collect()
    }

    pub fn minimum_cut_capacity(&self, network: &FlowNetwork<Flow>) -> Option<Flow> {
        self.minimum_cut_edges(network).iter().try_fold(Flow::zero(), |sum, &(u, v)| sum.checked_add(&network.capacity(u, v)))
    }
}
