#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("edge `{edge_id}` references missing node `{node_id}`")]
    MissingEndpoint { edge_id: String, node_id: String },
    #[error("edge `{edge_id}` has minlen {minlen}, above the maximum of {max}")]
    MinlenTooLarge { edge_id: String, minlen: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
