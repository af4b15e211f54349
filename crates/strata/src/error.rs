#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] strata_graph::Error),

    #[error("graph has no nodes to lay out")]
    EmptyGraph,

    #[error("node `{id}` is not present in the diagram")]
    UnknownNode { id: String },

    #[error("invalid layout config: {message}")]
    InvalidConfig { message: String },

    #[error("unknown ranker `{name}` (expected longest-path, tight-tree or network-simplex)")]
    UnknownRanker { name: String },

    #[error("unknown acyclicer `{name}` (expected dfs or greedy)")]
    UnknownAcyclicer { name: String },

    #[error("unknown rank direction `{name}` (expected LR, RL, TB or BT)")]
    UnknownRankDir { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
