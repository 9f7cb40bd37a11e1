use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::graph::FlowNetwork;
use num_traits::{CheckedAdd, NumAssign};
use std::collections::VecDeque;
use std::fmt::Debug;
use std::ops::{Range, Sub};

#[derive(PartialEq, Debug, Clone)]
pub struct ResidualArc<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub rev: usize,
}

impl<Flow> ResidualArc<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

/// Residual graph in compressed sparse row form.
///
/// Every edge `(u, v, c)` of the network owns a forward arc `u -> v` with
/// residual `c` and a paired reverse arc `v -> u` with residual 0. Pushing
/// `d` along an arc lowers its residual by `d` and raises its pair's by `d`.
#[derive(Debug, Clone)]
pub struct ResidualNetwork<Flow> {
    num_nodes: usize,
    edge_index_to_arc_index: Vec<usize>,
    start: Vec<usize>,
    arcs: Vec<ResidualArc<Flow>>,
}

impl<Flow> ResidualNetwork<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    pub fn build(network: &FlowNetwork<Flow>) -> Self {
        let num_nodes = network.num_nodes();
        let num_edges = network.num_edges();

        let mut degree = vec![0; num_nodes];
        for edge in network.edges() {
            degree[edge.to] += 1;
            degree[edge.from] += 1;
        }

        let mut start = vec![0; num_nodes + 1];
        for i in 1..=num_nodes {
            start[i] = start[i - 1] + degree[i - 1];
        }

        let mut edge_index_to_arc_index = vec![usize::MAX; num_edges];
        let mut arcs: Vec<ResidualArc<Flow>> = (0..2 * num_edges).map(|_| ResidualArc { to: 0, flow: Flow::zero(), upper: Flow::zero(), rev: 0 }).collect();
        let mut counter = vec![0; num_nodes];
        for (edge_index, e) in network.edges().iter().enumerate() {
            let (u, v) = (e.from, e.to);
            let arc_index_u = start[u] + counter[u];
            counter[u] += 1;
            let arc_index_v = start[v] + counter[v];
            counter[v] += 1;
            edge_index_to_arc_index[edge_index] = arc_index_u;

            arcs[arc_index_u] = ResidualArc { to: v, flow: Flow::zero(), upper: e.upper, rev: arc_index_v };
            arcs[arc_index_v] = ResidualArc { to: u, flow: e.upper, upper: e.upper, rev: arc_index_u };
        }

        Self { num_nodes, edge_index_to_arc_index, start, arcs }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn check_vertex(&self, vertex: usize) -> Result<(), FlowError> {
        if vertex >= self.num_nodes {
            return Err(FlowError::InvalidVertex { vertex, num_nodes: self.num_nodes });
        }
        Ok(())
    }

    /// Indices of the arcs leaving `u`.
    #[inline]
    pub fn arcs(&self, u: usize) -> Range<usize> {
        self.start[u]..self.start[u + 1]
    }

    #[inline]
    pub fn arc(&self, arc_index: usize) -> &ResidualArc<Flow> {
        &self.arcs[arc_index]
    }

    #[inline]
    pub fn residual_capacity(&self, arc_index: usize) -> Flow {
        self.arcs[arc_index].residual_capacity()
    }

    #[inline]
    pub fn push_flow(&mut self, arc_index: usize, flow: Flow) {
        debug_assert!(flow <= self.arcs[arc_index].residual_capacity());
        let rev = self.arcs[arc_index].rev;

        self.arcs[arc_index].flow += flow;
        self.arcs[rev].flow -= flow;
    }

    // O(n + m)
    pub fn reachable_from(&self, source: usize) -> Vec<bool> {
        let mut visited = vec![false; self.num_nodes];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            for e in self.arcs[self.start[u]..self.start[u + 1]].iter() {
                if !visited[e.to] && e.residual_capacity() > Flow::zero() {
                    visited[e.to] = true;
                    que.push_back(e.to);
                }
            }
        }
        visited
    }

    /// Flow carried by each edge of the network, by edge index.
    pub fn edge_flows(&self) -> Vec<Flow> {
        self.edge_index_to_arc_index.iter().map(|&i| self.arcs[i].flow).collect()
    }
}
