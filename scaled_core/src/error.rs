// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::MAX_BATCH_UPDATES;

/// Errors raised while forming a settlement batch.
///
/// All of these are detected locally, before any signing or network
/// call; a batch that fails validation is never submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// An update's receipt names a different initiating party than the
    /// batch declares.
    #[error("update {position} is initiated by account {found}, batch declares account {expected}")]
    Inconsistent {
        position: usize,
        expected: u64,
        found: u64,
    },
    /// More updates than the 2-byte wire count field can carry.
    #[error("batch of {len} updates exceeds the {max} update limit", max = MAX_BATCH_UPDATES)]
    TooLarge { len: usize },
    /// A zero-count settlement is meaningless; empty batches are
    /// refused outright.
    #[error("batch contains no updates")]
    Empty,
}
