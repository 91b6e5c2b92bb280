//! Intent orchestration from UI input to roster state transitions.

use chrono::Local;
use roster_core::{RosterIntent, RosterState};

use crate::controller::events::{describe_roster_error, StatusBanner};

/// Applies one intent to the roster. On success the snapshot is replaced and
/// the status line records what happened; on rejection the snapshot is left
/// alone and the caller gets a banner to show.
pub fn apply_intent(
    state: &mut RosterState,
    intent: RosterIntent,
    status: &mut String,
) -> Option<StatusBanner> {
    let intent_name = match &intent {
        RosterIntent::Rename { .. } => "rename",
        RosterIntent::Delete { .. } => "delete",
        RosterIntent::ToggleVisibility => "toggle_visibility",
    };

    match state.apply(&intent) {
        Ok(next) => {
            *state = next;
            *status = format!(
                "{} at {}",
                applied_summary(&intent, state),
                Local::now().format("%H:%M:%S")
            );
            tracing::debug!(intent = intent_name, "applied roster intent");
            None
        }
        Err(err) => {
            tracing::warn!(intent = intent_name, error = %err, "rejected roster intent");
            *status = format!("Rejected {intent_name}: {err}");
            Some(StatusBanner::error(describe_roster_error(&err)))
        }
    }
}

fn applied_summary(intent: &RosterIntent, next: &RosterState) -> String {
    match intent {
        RosterIntent::Rename { id, name } => format!("Renamed \"{id}\" to {name}"),
        RosterIntent::Delete { id } => {
            format!("Removed \"{id}\"; {} remaining", next.len())
        }
        RosterIntent::ToggleVisibility => if next.show_persons() {
            "Showing persons"
        } else {
            "Hiding persons"
        }
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::PersonId;

    #[test]
    fn toggle_intent_updates_state_and_status() {
        let mut state = RosterState::seeded();
        let mut status = String::new();

        let banner = apply_intent(&mut state, RosterIntent::ToggleVisibility, &mut status);

        assert!(banner.is_none());
        assert!(state.show_persons());
        assert!(status.contains("Showing persons"));
    }

    #[test]
    fn rename_intent_replaces_the_snapshot() {
        let mut state = RosterState::seeded();
        let mut status = String::new();

        let banner = apply_intent(
            &mut state,
            RosterIntent::Rename {
                id: PersonId::new("b"),
                name: "Luke".to_string(),
            },
            &mut status,
        );

        assert!(banner.is_none());
        assert_eq!(state.find(&PersonId::new("b")).expect("person b").name, "Luke");
    }

    #[test]
    fn rejected_delete_keeps_state_and_raises_a_banner() {
        let mut state = RosterState::seeded();
        let before = state.clone();
        let mut status = String::new();

        let banner = apply_intent(
            &mut state,
            RosterIntent::Delete {
                id: PersonId::new("zz"),
            },
            &mut status,
        );

        assert!(banner.is_some());
        assert_eq!(state, before);
        assert!(status.contains("delete"));
    }
}
