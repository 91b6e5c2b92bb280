//! Types shared across the roster workspace: the person domain model and the
//! roster error taxonomy.

pub mod domain;
pub mod error;
