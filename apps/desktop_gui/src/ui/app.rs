//! App shell for the roster demo: heading, toggle button, person rows, and
//! the status surfaces.

use eframe::egui;
use roster_core::{RosterIntent, RosterState};
use shared::domain::Person;

use crate::controller::events::{StatusBanner, StatusBannerSeverity};
use crate::controller::orchestration::apply_intent;

const HEADING_TEXT: &str = "Hello from the person roster demo!";
const TOGGLE_BUTTON_LABEL: &str = "~ Hide/Show Person(s) ~";
const ROW_HEIGHT: f32 = 36.0;

const BUTTON_BORDER: egui::Color32 = egui::Color32::from_rgb(0, 0, 255);

/// Background of the toggle button is the one style bit that depends on
/// state: green while the list is hidden, red while it is shown.
pub(crate) fn toggle_button_fill(show_persons: bool) -> egui::Color32 {
    if show_persons {
        egui::Color32::from_rgb(255, 0, 0)
    } else {
        egui::Color32::from_rgb(0, 128, 0)
    }
}

fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::left_to_right(egui::Align::Center)),
    );
    child.set_clip_rect(rect);
    add(&mut child);
}

pub struct RosterApp {
    roster: RosterState,
    status: String,
    status_banner: Option<StatusBanner>,
}

impl RosterApp {
    pub fn bootstrap(initial: RosterState) -> Self {
        let status = format!("Roster loaded with {} person(s)", initial.len());
        Self {
            roster: initial,
            status,
            status_banner: None,
        }
    }

    fn dispatch(&mut self, intent: RosterIntent) {
        if let Some(banner) = apply_intent(&mut self.roster, intent, &mut self.status) {
            self.status_banner = Some(banner);
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };

        let (fill, stroke) = match banner.severity {
            StatusBannerSeverity::Error => (
                egui::Color32::from_rgb(111, 53, 53),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
            ),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(stroke)
            .corner_radius(6.0)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_toggle_button(&mut self, ui: &mut egui::Ui) {
        let fill = toggle_button_fill(self.roster.show_persons());
        let response = ui
            .scope(|ui| {
                ui.spacing_mut().button_padding = egui::vec2(8.0, 8.0);
                ui.add(
                    egui::Button::new(
                        egui::RichText::new(TOGGLE_BUTTON_LABEL).color(egui::Color32::WHITE),
                    )
                    .fill(fill)
                    .stroke(egui::Stroke::new(1.0, BUTTON_BORDER))
                    .corner_radius(egui::CornerRadius::same(0)),
                )
            })
            .inner
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() {
            self.dispatch(RosterIntent::ToggleVisibility);
        }
    }

    fn show_person_rows(&mut self, ui: &mut egui::Ui) {
        let mut pending: Option<RosterIntent> = None;

        egui::ScrollArea::vertical()
            .id_salt("person_rows_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for person in self.roster.visible_persons() {
                    if let Some(intent) = render_person_row(ui, person, ROW_HEIGHT) {
                        pending.get_or_insert(intent);
                    }
                }
            });

        if let Some(intent) = pending {
            self.dispatch(intent);
        }
    }
}

/// Renders one roster row: an editable name field, the static age text, and
/// the click-row-to-delete affordance. Rows hold no state of their own; the
/// row reports what the user did as an intent and the caller applies it.
fn render_person_row(ui: &mut egui::Ui, person: &Person, row_height: f32) -> Option<RosterIntent> {
    let mut intent = None;

    let desired = egui::vec2(ui.available_width(), row_height);
    let (row_rect, row_response) = ui.allocate_exact_size(desired, egui::Sense::click());
    let row_response = row_response.on_hover_cursor(egui::CursorIcon::PointingHand);
    let hovered = ui.rect_contains_pointer(row_rect);

    if hovered {
        ui.painter().rect_filled(
            row_rect,
            egui::CornerRadius::same(4),
            ui.visuals().widgets.hovered.weak_bg_fill,
        );
    }

    let inner = row_rect.shrink2(egui::vec2(8.0, 4.0));
    ui_in_rect(ui, inner, |ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let mut name_draft = person.name.clone();
        let edit = egui::TextEdit::singleline(&mut name_draft)
            .id_salt(("person_name_edit", person.id.as_str()))
            .desired_width(180.0);
        if ui.add(edit).changed() {
            intent = Some(RosterIntent::Rename {
                id: person.id.clone(),
                name: name_draft,
            });
        }

        ui.label(format!("is {} years old", person.age));
    });

    // A click on the row surface outside the text input deletes the person.
    if row_response.clicked() {
        intent = Some(RosterIntent::Delete {
            id: person.id.clone(),
        });
    }

    intent
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_strip").show(ctx, |ui| {
            ui.small(egui::RichText::new(&self.status).weak());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(HEADING_TEXT);
            });
            ui.add_space(10.0);

            self.show_status_banner(ui);

            ui.vertical_centered(|ui| {
                self.show_toggle_button(ui);
            });
            ui.add_space(12.0);

            self.show_person_rows(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::PersonId;

    #[test]
    fn toggle_button_is_green_when_hidden_and_red_when_shown() {
        assert_eq!(toggle_button_fill(false), egui::Color32::from_rgb(0, 128, 0));
        assert_eq!(toggle_button_fill(true), egui::Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn bootstrap_starts_hidden_with_no_banner() {
        let app = RosterApp::bootstrap(RosterState::seeded());
        assert!(!app.roster.show_persons());
        assert!(app.status_banner.is_none());
        assert!(app.status.contains("6 person(s)"));
    }

    #[test]
    fn dispatch_surfaces_a_banner_for_a_rejected_intent() {
        let mut app = RosterApp::bootstrap(RosterState::seeded());
        app.dispatch(RosterIntent::Delete {
            id: PersonId::new("zz"),
        });
        assert!(app.status_banner.is_some());
        assert_eq!(app.roster.len(), 6);
    }

    #[test]
    fn dispatch_applies_accepted_intents() {
        let mut app = RosterApp::bootstrap(RosterState::seeded());
        app.dispatch(RosterIntent::ToggleVisibility);
        assert!(app.roster.show_persons());
        assert!(app.status_banner.is_none());
    }
}
