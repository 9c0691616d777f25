use crate::graph::NodeId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge #{edge_index} references a node that is not in the graph: {node_id}")]
    MissingEndpoint { edge_index: usize, node_id: NodeId },

    #[error("node id appears more than once in the hierarchy: {node_id}")]
    DuplicateNode { node_id: NodeId },

    #[error("node {node_id} names {ancestor_id} as its top-level ancestor, which is not a top-level node")]
    UnknownAncestor {
        node_id: NodeId,
        ancestor_id: NodeId,
    },

    #[error("edge #{edge_index} has an invalid weight: {weight}")]
    InvalidWeight { edge_index: usize, weight: f64 },

    #[error("degree matrix is singular")]
    SingularDegreeMatrix,

    #[error("inverse degree matrix has no real principal square root")]
    NoPrincipalSquareRoot,

    #[error("eigen solver did not converge ({dimension}x{dimension} matrix)")]
    EigenSolverDidNotConverge { dimension: usize },

    #[error("spectral embedding produced a non-finite coordinate for node {node_id}")]
    NonFiniteEmbedding { node_id: NodeId },
}

impl Error {
    /// Numerical failures come out of the linear algebra; everything else is malformed input.
    pub fn is_numerical(&self) -> bool {
        matches!(
            self,
            Self::SingularDegreeMatrix
                | Self::NoPrincipalSquareRoot
                | Self::EigenSolverDidNotConverge { .. }
                | Self::NonFiniteEmbedding { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
