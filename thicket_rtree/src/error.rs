// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported at the index API boundary.

use thiserror::Error;

/// Failure modes of [`RTree`](crate::RTree) operations.
///
/// All of these are deterministic and caller-correctable. An absent
/// rectangle on delete or exact search is an ordinary `false` result, and a
/// nearest-neighbor query on an empty tree is `None`; neither is an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum RTreeError {
    /// A rectangle whose minimum exceeds its maximum (or is NaN) on the
    /// reported axis. Never silently corrected.
    #[error("invalid rectangle: min exceeds max on axis {axis}")]
    InvalidRectangle {
        /// First axis on which the `min <= max` invariant fails.
        axis: usize,
    },

    /// Node capacity below the supported minimum of 4.
    #[error("node capacity {0} is too small (minimum is 4)")]
    InvalidCapacity(usize),
}

/// Convenience alias for results carrying [`RTreeError`].
pub type RTreeResult<T> = Result<T, RTreeError>;
