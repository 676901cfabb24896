/// Errors produced by container operations.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The requested storage size cannot be represented as an allocation.
    #[error("failed to allocate {bytes} bytes")]
    AllocationFailure { bytes: u128 },
    /// Vector index at or past the current length.
    #[error("index {index} is out of bounds (length: {length})")]
    OutOfBounds { index: usize, length: usize },
    /// Pop on a list with no nodes.
    #[error("list is empty")]
    EmptyList,
    /// Width tag outside of u8/u16/u32/u64.
    #[error("unknown element width {0}")]
    UnknownElementWidth(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
