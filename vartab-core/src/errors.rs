use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("qualifying feature has no begin field")]
    MissingPosition,

    #[error("can't parse begin field as a position: {0:?}")]
    MalformedPosition(String),
}
