//! Error presentation for the desktop GUI controller.

use shared::error::RosterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Error,
}

/// Dismissible message shown above the roster until the user clears it.
#[derive(Debug, Clone)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub message: String,
}

impl StatusBanner {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Error,
            message: message.into(),
        }
    }
}

/// Turns a rejected transition into a sentence fit for the banner.
pub fn describe_roster_error(err: &RosterError) -> String {
    match err {
        RosterError::UnknownPerson { id } => {
            format!("Person \"{id}\" is no longer in the roster.")
        }
        RosterError::IndexOutOfRange { index, len } => {
            format!("Row {index} does not exist; the roster has {len} entries.")
        }
        RosterError::DuplicateId { id } => {
            format!("The roster contains id \"{id}\" more than once.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::PersonId;

    #[test]
    fn unknown_person_banner_names_the_missing_id() {
        let message = describe_roster_error(&RosterError::UnknownPerson {
            id: PersonId::new("b"),
        });
        assert!(message.contains("\"b\""));
    }

    #[test]
    fn out_of_range_banner_reports_index_and_length() {
        let message = describe_roster_error(&RosterError::IndexOutOfRange { index: 9, len: 6 });
        assert!(message.contains('9'));
        assert!(message.contains('6'));
    }
}
