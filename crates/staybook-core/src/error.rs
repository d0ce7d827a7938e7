//! Error types for the Staybook domain layer.
//!
//! Only validation lives here. Transport and token failures belong to the
//! client crate, which owns the I/O seams that produce them.

use thiserror::Error;

/// Reason a raw room entry was excluded from the catalog.
///
/// Rejections are per-element: one bad entry never aborts the batch.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomRejection {
    /// Entry is `null` or not a record at all.
    #[error("room entry is missing")]
    Missing,

    /// Record has no non-empty string identifier.
    #[error("room has no id")]
    MissingId,

    /// Record has no embedded hotel object.
    #[error("room has no hotel data")]
    MissingHotel,
}
