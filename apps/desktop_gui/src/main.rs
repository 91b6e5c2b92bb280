mod controller;
mod ui;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use roster_core::RosterState;
use shared::domain::Person;
use tracing_subscriber::EnvFilter;

use crate::ui::RosterApp;

/// Desktop demo that renders an editable roster of persons.
#[derive(Parser, Debug)]
struct Args {
    /// JSON array of persons used to seed the roster instead of the built-in
    /// six. The file is read once at startup and never written.
    #[arg(long)]
    roster: Option<PathBuf>,
}

fn parse_roster_json(text: &str) -> anyhow::Result<RosterState> {
    let persons: Vec<Person> =
        serde_json::from_str(text).context("roster file is not a JSON array of persons")?;
    Ok(RosterState::from_persons(persons)?)
}

fn load_roster(path: &Path) -> anyhow::Result<RosterState> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file {}", path.display()))?;
    parse_roster_json(&text).with_context(|| format!("invalid roster file {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let initial = match &args.roster {
        Some(path) => load_roster(path)?,
        None => RosterState::seeded(),
    };
    tracing::info!(persons = initial.len(), "starting roster demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Person Roster Demo")
            .with_inner_size([560.0, 640.0])
            .with_min_inner_size([400.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Person Roster Demo",
        options,
        Box::new(move |_cc| Ok(Box::new(RosterApp::bootstrap(initial)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe runtime failure: {err}"))
}

#[cfg(test)]
mod tests {
    use super::parse_roster_json;
    use shared::domain::PersonId;

    #[test]
    fn parses_a_valid_roster_file() {
        let roster = parse_roster_json(
            r#"[
                {"id": "a", "name": "Darren", "age": 26},
                {"id": "b", "name": "Anakin", "age": 8}
            ]"#,
        )
        .expect("valid roster");

        assert_eq!(roster.len(), 2);
        assert!(!roster.show_persons());
        assert_eq!(
            roster.find(&PersonId::new("b")).expect("person b").age,
            8
        );
    }

    #[test]
    fn rejects_a_roster_file_with_duplicate_ids() {
        let err = parse_roster_json(
            r#"[
                {"id": "a", "name": "Darren", "age": 26},
                {"id": "a", "name": "Impostor", "age": 30}
            ]"#,
        )
        .expect_err("duplicate ids");

        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn rejects_a_roster_file_that_is_not_a_person_array() {
        assert!(parse_roster_json("{\"not\": \"an array\"}").is_err());
        assert!(parse_roster_json("[{\"id\": \"a\"}]").is_err());
        assert!(parse_roster_json("not json at all").is_err());
    }
}
