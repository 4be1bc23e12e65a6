use thiserror::Error;

/// Errors raised at the sequencer boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequencerError {
    #[error("Alien index {index} is out of bounds for a catalog of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
