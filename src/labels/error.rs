use thiserror::Error;
use uuid::Uuid;

use crate::db::models::LabelKind;

/// Errors from the taxonomy layer.
///
/// `InvalidName` is the one expected, recoverable case: the editor leaves
/// the input field for correction and nothing has changed. The `NotFound`
/// variants mean an item field or a held id no longer resolves against the
/// catalog; callers treat those as fatal for the selection session.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("invalid {kind} label name {name:?}")]
    InvalidName { kind: LabelKind, name: String },

    #[error("no {kind} label named {name:?}")]
    NameNotFound { kind: LabelKind, name: String },

    #[error("no {kind} label with id {id}")]
    IdNotFound { kind: LabelKind, id: Uuid },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
