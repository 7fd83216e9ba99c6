//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("sort aborted: {0}")]
	CircularDependency(#[from] crate::sorter::CircularDependencyError),
}
