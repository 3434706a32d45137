use thiserror::Error;

/// Errors surfaced by the viewer core.
///
/// All failures are typed and fail fast; no operation partially mutates the
/// volume, settings or annotation state before returning one of these.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no volume loaded")]
    NoVolumeLoaded,

    #[error("slice index {index} out of range (axis extent is {extent})")]
    IndexOutOfRange { index: usize, extent: usize },

    #[error("failed to load volume: {0}")]
    LoadFailed(String),

    #[error("cannot reconstruct a surface before a volume is loaded")]
    EmptyVolume,
}
