use thiserror::Error;

/// Why a selection call was rejected.
///
/// Both variants are reported before the sequence is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// There is no element to select.
    #[error("cannot select from an empty sequence")]
    EmptySequence,

    /// The 1-based rank lies outside `[1, len]`.
    #[error("rank {rank} is out of bounds for a sequence of length {len}")]
    InvalidRank { rank: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SelectError>;

/// Checks a 1-based rank against a sequence length.
pub(crate) fn check_rank(rank: usize, len: usize) -> Result<()> {
    if len == 0 {
        return Err(SelectError::EmptySequence);
    }
    if rank < 1 || rank > len {
        return Err(SelectError::InvalidRank { rank, len });
    }
    Ok(())
}
