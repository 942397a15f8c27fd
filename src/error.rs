use thiserror::Error;

use crate::model::SlotId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("slot {slot} is already occupied")]
    Occupied { slot: SlotId },
    #[error("slot {slot} is outside a board of {size} slots")]
    OutOfRange { slot: SlotId, size: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog must contain exactly one hazard, found {0}")]
    HazardCount(usize),
    #[error("catalog has no regular creatures")]
    EmptyRegularPool,
    #[error("invalid catalog json: {0}")]
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("audio element unavailable: {0}")]
    Unavailable(String),
    #[error("playback rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("stored value is not a score: {0:?}")]
    Corrupt(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty {0:?}, expected easy, medium or hard")]
pub struct DifficultyParseError(pub String);
