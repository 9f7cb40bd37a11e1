use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::residual::ResidualNetwork;
use crate::maximum_flow::solution::MaximumFlow;
use crate::maximum_flow::AugmentingPathSolver;
use log::debug;
use num_traits::{CheckedAdd, NumAssign};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub upper: Flow,
}

/// A directed capacitated graph on vertices `0..num_nodes`.
///
/// Parallel edges on the same ordered pair are summed into a single stored
/// edge and zero-capacity edges are not stored, so every stored edge has a
/// positive capacity and a distinct `(from, to)` pair. Queries never mutate
/// the network; each one runs against its own [`ResidualNetwork`].
#[derive(Debug, Clone)]
pub struct FlowNetwork<Flow> {
    num_nodes: usize,
    edges: Vec<Edge<Flow>>,
    edge_ids: HashMap<(usize, usize), usize>,
}

impl<Flow> Default for FlowNetwork<Flow> {
    fn default() -> Self {
        Self { num_nodes: 0, edges: Vec::new(), edge_ids: HashMap::new() }
    }
}

impl<Flow> FlowNetwork<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    pub fn new<I>(num_nodes: usize, edges: I) -> Result<Self, FlowError>
    where
        I: IntoIterator<Item = (usize, usize, Flow)>,
    {
        let mut network = Self::default();
        network.add_nodes(num_nodes);
        for (from, to, upper) in edges {
            network.add_directed_edge(from, to, upper)?;
        }
        Ok(network)
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge<Flow>] {
        &self.edges
    }

    pub fn add_node(&mut self) -> usize {
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    /// Adds `upper` units of capacity from `from` to `to` and returns the
    /// index of the edge holding the pair, or `None` when the capacity is
    /// zero and the pair has no edge yet.
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow) -> Result<Option<usize>, FlowError> {
        if from >= self.num_nodes || to >= self.num_nodes {
            return Err(FlowError::InvalidGraph { from, to, num_nodes: self.num_nodes });
        }
        if upper < Flow::zero() {
            return Err(FlowError::NegativeCapacity { from, to });
        }

        if let Some(&edge_id) = self.edge_ids.get(&(from, to)) {
            let edge = &mut self.edges[edge_id];
            edge.upper = edge.upper.checked_add(&upper).ok_or(FlowError::CapacityOverflow { from, to })?;
            return Ok(Some(edge_id));
        }
        if upper == Flow::zero() {
            return Ok(None);
        }

        self.edges.push(Edge { from, to, upper });
        self.edge_ids.insert((from, to), self.edges.len() - 1);
        Ok(Some(self.edges.len() - 1))
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<&Edge<Flow>> {
        self.edges.get(edge_id)
    }

    pub fn capacity(&self, from: usize, to: usize) -> Flow {
        self.edge_ids.get(&(from, to)).map_or(Flow::zero(), |&edge_id| self.edges[edge_id].upper)
    }

    pub fn maximum_flow(&self, source: usize, sink: usize) -> Result<Flow, FlowError> {
        Ok(self.solve(source, sink)?.value())
    }

    pub fn minimum_cut_edges(&self, source: usize, sink: usize) -> Result<BTreeSet<(usize, usize)>, FlowError> {
        Ok(self.solve(source, sink)?.minimum_cut_edges(self))
    }

    pub fn solve(&self, source: usize, sink: usize) -> Result<MaximumFlow<Flow>, FlowError> {
        self.solve_with(&mut EdmondsKarp::default(), source, sink)
    }

    pub fn solve_with<S>(&self, solver: &mut S, source: usize, sink: usize) -> Result<MaximumFlow<Flow>, FlowError>
    where
        S: AugmentingPathSolver<Flow>,
    {
        let mut residual = ResidualNetwork::build(self);
        residual.check_vertex(source)?;
        residual.check_vertex(sink)?;
        debug!("solving maximum flow {} -> {} on {} nodes, {} edges", source, sink, self.num_nodes, self.num_edges());

        if source == sink {
            return Ok(MaximumFlow::new(source, sink, Flow::zero(), &residual, 0));
        }

        let value = solver.solve(source, sink, &mut residual)?;
        debug!("maximum flow {} -> {} is {:?} after {} augmentations", source, sink, value, solver.num_augmentations());
        Ok(MaximumFlow::new(source, sink, value, &residual, solver.num_augmentations()))
    }
}
