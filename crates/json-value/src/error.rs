use thiserror::Error;

use crate::kind::Kind;

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("not an object: value is {0}")]
    NotAnObject(Kind),
    #[error("not an array: value is {0}")]
    NotAnArray(Kind),
    #[error("alias values are read-only")]
    AliasNotMutable,
}

pub type Result<T> = std::result::Result<T, ValueError>;
