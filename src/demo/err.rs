use thiserror::Error;

use super::options::DemoOptionsBuilderError;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown section {name:?}. Expected one of {expected:?}")]
    UnknownSection {
        name: String,
        expected: Vec<&'static str>,
    },

    #[error("Invalid options: {0}")]
    Options(#[from] DemoOptionsBuilderError),

    #[error("{0}")]
    Usage(String),

    #[error("Cannot write transcript: {0}")]
    Io(#[from] std::io::Error),
}
