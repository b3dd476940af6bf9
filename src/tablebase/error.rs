//! Errors raised while setting up tablebases. Probing itself never fails with an error,
//! missing or unusable tables simply yield no result.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum TbError {
    #[error("tablebase path does not exist: {0}")]
    InvalidPath(PathBuf),

    #[error("failed to load syzygy tables from {path}: {reason}")]
    Syzygy { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, TbError>;
