use thiserror::Error;

use crate::domain::PersonId;

/// Failures surfaced by roster state transitions. Every variant leaves the
/// roster exactly as it was before the rejected operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("no person with id {id} in the roster")]
    UnknownPerson { id: PersonId },
    #[error("index {index} out of range for roster of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("duplicate person id {id}")]
    DuplicateId { id: PersonId },
}
