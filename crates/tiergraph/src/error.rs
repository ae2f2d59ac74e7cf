pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge `{edge_id}` references unknown node `{node_id}`")]
    MissingNode { edge_id: String, node_id: String },

    #[error("layout produced no position for node `{node_id}`")]
    MissingPosition { node_id: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
