use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FlowError {
    #[error("edge ({from}, {to}) has an endpoint outside 0..{num_nodes}")]
    InvalidGraph { from: usize, to: usize, num_nodes: usize },

    #[error("edge ({from}, {to}) has a negative capacity")]
    NegativeCapacity { from: usize, to: usize },

    #[error("summed capacity of edge ({from}, {to}) does not fit in the capacity type")]
    CapacityOverflow { from: usize, to: usize },

    #[error("vertex {vertex} is outside 0..{num_nodes}")]
    InvalidVertex { vertex: usize, num_nodes: usize },

    #[error("augmenting path still exists after {augmentations} augmentations")]
    Unconverged { augmentations: usize },

    #[error("flow value does not fit in the capacity type")]
    FlowOverflow,
}

impl FlowError {
    /// Whether the error was raised while building the network.
    pub fn is_invalid_graph(&self) -> bool {
        matches!(self, FlowError::InvalidGraph { .. } | FlowError::NegativeCapacity { .. } | FlowError::CapacityOverflow { .. })
    }
}
