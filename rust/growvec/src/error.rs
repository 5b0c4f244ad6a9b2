use thiserror::Error;

/// Error raised by the checked element accessors.
///
/// All other precondition violations (insertion past the end, removal of a
/// non-live position) are caller contract violations and panic instead of
/// returning an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("index {index} out of range for vector of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}
