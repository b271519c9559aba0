//! Error types

use thiserror::Error;

/// Main error type for the crate.
///
/// The voxel core itself is total over its inputs (out-of-bounds lookups,
/// redundant edits, and degenerate generation parameters are all normal
/// states). The fallible seam is the external render sink, whose failures
/// are surfaced through [`Error::Render`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("render sink error: {0}")]
    Render(String),
}
