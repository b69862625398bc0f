#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FinderError {
    /// Every bootstrap seed failed to answer the producer query.
    #[error("no producer source available after trying {attempted} seeds (last error: {last_error:?})")]
    SourceExhausted {
        attempted: usize,
        last_error: Option<String>,
    },
    #[error("failed to initialize transport: {0}")]
    ClientInit(String),
}
