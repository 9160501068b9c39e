//! Desktop host for the review session.
//! Draws the card stack and turns egui input (drags, clicks, keys, window
//! focus, wall-clock time) into session events.

use eframe::egui;
use flashzilla::config::AppConfig;
use flashzilla::database::CardStore;
use flashzilla::database::db::SqliteCardStore;
use flashzilla::export::json::{export_cards_to_path, import_cards};
use flashzilla::models::{
    AccessibilityGateway, Card, CardEditor, CardView, DeckSession, Outcome, SwipeClassifier,
};
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_secs(1);
const CARD_SIZE: egui::Vec2 = egui::vec2(450.0, 250.0);
const STACK_STEP: f32 = 10.0;

/// Application screen states
#[derive(Default)]
enum AppScreen {
    #[default]
    Review,
    EditCards,
}

pub struct FlashzillaApp {
    current_screen: AppScreen,
    session: DeckSession,
    classifier: SwipeClassifier,
    gateway: AccessibilityGateway,
    editor: CardEditor<SqliteCardStore>,

    last_tick: Instant,
    was_focused: bool,

    new_question: String,
    new_answer: String,
    show_result_dialog: bool,
    result_message: String,
}

/// Linear blend between two colours, `t` in 0..=1
fn blend(from: egui::Color32, to: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    egui::Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

impl eframe::App for FlashzillaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_focus(ctx);
        self.drive_clock(ctx);
        self.gateway
            .set_assistive_active(ctx.options(|o| o.screen_reader));

        match self.current_screen {
            AppScreen::Review => self.render_review_screen(ctx),
            AppScreen::EditCards => self.render_edit_screen(ctx),
        }

        if self.show_result_dialog {
            egui::Window::new("Import/Export Result")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_result_dialog = false;
                    }
                });
        }
    }
}

impl FlashzillaApp {
    pub fn new(config: &AppConfig, store: SqliteCardStore) -> Self {
        let editor = CardEditor::new(store);
        let mut session = DeckSession::with_duration(config.session_seconds);
        session.reset(editor.cards().to_vec());

        Self {
            current_screen: AppScreen::Review,
            session,
            classifier: SwipeClassifier::new(config.swipe_threshold),
            gateway: AccessibilityGateway::default().with_prefs(config.accessibility_prefs()),
            editor,
            last_tick: Instant::now(),
            was_focused: true,
            new_question: String::new(),
            new_answer: String::new(),
            show_result_dialog: false,
            result_message: String::new(),
        }
    }

    /// Window focus stands in for the app moving to/from the background
    fn handle_focus(&mut self, ctx: &egui::Context) {
        let focused = ctx.input(|i| i.viewport().focused).unwrap_or(true);
        if focused == self.was_focused {
            return;
        }

        if focused {
            self.session.on_foreground();
            self.last_tick = Instant::now();
        } else {
            self.classifier.cancel();
            self.session.on_background();
        }
        self.was_focused = focused;
    }

    /// Feeds one tick per whole elapsed second while the clock runs
    fn drive_clock(&mut self, ctx: &egui::Context) {
        if !self.session.timer_active() {
            self.last_tick = Instant::now();
            return;
        }

        while self.session.timer_active() && self.last_tick.elapsed() >= TICK {
            self.last_tick += TICK;
            self.session.tick();
        }
        ctx.request_repaint_after(TICK.saturating_sub(self.last_tick.elapsed()));
    }

    fn restart_session(&mut self) {
        self.session.reset(self.editor.store().load());
        self.classifier.cancel();
        self.last_tick = Instant::now();
    }

    /// Renders the review screen: timer, card stack and controls
    fn render_review_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let summary = self.session.summary();
            let mut action_edit = false;
            let mut action_restart = false;
            let mut action_accessible: Option<Outcome> = None;

            ui.horizontal(|ui| {
                ui.heading(format!("Time: {}", summary.remaining_seconds));
                ui.label(format!("{} cards left", summary.cards_left));
                if ui.button("Edit Cards").clicked() {
                    action_edit = true;
                }
            });
            ui.separator();
            ui.add_space(20.0);

            let (action_swipe, mut action_reveal) = self.draw_stack(ui);

            ui.add_space(20.0);

            if summary.is_complete || self.session.clock().is_expired() {
                if summary.is_complete {
                    ui.heading("Session complete!");
                    ui.label(format!(
                        "Correct: {}   Incorrect: {}",
                        summary.correct, summary.incorrect
                    ));
                } else {
                    ui.heading("Time's up!");
                }
                if ui.button("Start Again").clicked() {
                    action_restart = true;
                }
            } else {
                if !self.session.revealed() && ui.button("Show Answer").clicked() {
                    action_reveal = true;
                }

                if self.gateway.shows_action_buttons() {
                    ui.horizontal(|ui| {
                        if ui.button("✖ Mark incorrect").clicked() {
                            action_accessible = Some(Outcome::Incorrect);
                        }
                        if ui.button("✔ Mark correct").clicked() {
                            action_accessible = Some(Outcome::Correct);
                        }
                    });
                }
            }

            // Keyboard takes the same route as the accessibility buttons
            ctx.input(|i| {
                if i.key_pressed(egui::Key::ArrowLeft) {
                    action_accessible = Some(Outcome::Incorrect);
                }
                if i.key_pressed(egui::Key::ArrowRight) {
                    action_accessible = Some(Outcome::Correct);
                }
                if i.key_pressed(egui::Key::Space) {
                    action_reveal = true;
                }
            });

            // Execute deferred actions
            if let Some(outcome) = action_swipe {
                self.session.resolve_top(outcome);
            }
            match action_accessible {
                Some(Outcome::Correct) => {
                    self.gateway.mark_correct(&mut self.session);
                }
                Some(Outcome::Incorrect) => {
                    self.gateway.mark_incorrect(&mut self.session);
                }
                Some(Outcome::Cancelled) | None => {}
            }
            if action_reveal {
                self.session.toggle_reveal();
            }
            if action_restart {
                self.restart_session();
            }
            if action_edit {
                self.current_screen = AppScreen::EditCards;
            }
        });
    }

    /// Paints the stack and runs the drag gesture on the top card.
    /// Returns the outcome of a drag released this frame and whether the top
    /// card was tapped.
    fn draw_stack(&mut self, ui: &mut egui::Ui) -> (Option<Outcome>, bool) {
        let count = self.session.cards().len();
        let height = CARD_SIZE.y + STACK_STEP * (count as f32 + 1.0);
        let (area, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), height),
            egui::Sense::hover(),
        );

        let mut released = None;
        let mut tapped = false;
        let views: Vec<CardView<'_>> = self.session.card_views();
        for view in &views {
            let depth = (count - view.stack_index) as f32 * STACK_STEP;
            let center = egui::pos2(area.center().x, area.top() + CARD_SIZE.y / 2.0 + depth);
            let rect = egui::Rect::from_center_size(center, CARD_SIZE);

            if !view.is_topmost {
                // With assistive focus on the top card, cards below show only their back
                let label = (!self.gateway.top_only_focus()).then_some(view.card);
                paint_card(ui, rect, egui::Color32::WHITE, label, false);
                continue;
            }

            let label = AccessibilityGateway::card_label(view.card, view.is_revealed);
            let response =
                ui.interact(rect, ui.id().with("top_card"), egui::Sense::click_and_drag());
            response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Button, true, &label)
            });
            let response = response.on_hover_text(&label);

            if response.dragged() {
                let dx = self.classifier.offset() + response.drag_delta().x;
                self.classifier.on_changed(dx);
            }

            let mut fill = egui::Color32::WHITE;
            if !self.gateway.prefs().differentiate_without_color {
                let strength = self.classifier.offset().abs() / self.classifier.threshold().max(1.0);
                fill = match self.classifier.leaning() {
                    Some(Outcome::Correct) => blend(fill, egui::Color32::GREEN, strength),
                    Some(Outcome::Incorrect) => blend(fill, egui::Color32::RED, strength),
                    _ => fill,
                };
            }
            let drawn = if self.gateway.animate_drag() {
                rect.translate(egui::vec2(self.classifier.offset(), 0.0))
            } else {
                rect
            };
            paint_card(ui, drawn, fill, Some(view.card), view.is_revealed);

            if response.drag_stopped() {
                released = Some(self.classifier.on_ended(self.classifier.offset()));
            } else if response.clicked() {
                tapped = true;
            }
        }

        (released, tapped)
    }

    /// Renders the card editor
    fn render_edit_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut action_done = false;
            let mut action_remove: Option<usize> = None;

            ui.horizontal(|ui| {
                ui.heading("Edit Cards");
                if ui.button("Done").clicked() {
                    action_done = true;
                }
                if ui.button("Import").clicked() {
                    self.handle_import();
                }
                if ui.button("Export").clicked() {
                    self.handle_export();
                }
            });

            ui.separator();

            ui.heading("Add new card");
            ui.horizontal(|ui| {
                ui.label("Question:");
                ui.text_edit_singleline(&mut self.new_question);
            });
            ui.horizontal(|ui| {
                ui.label("Answer:");
                ui.text_edit_singleline(&mut self.new_answer);
            });
            if ui.button("Add card").clicked()
                && self.editor.add_card(&self.new_question, &self.new_answer)
            {
                self.new_question.clear();
                self.new_answer.clear();
            }

            ui.separator();

            ui.heading(format!("Cards ({})", self.editor.cards().len()));

            egui::ScrollArea::vertical()
                .id_source("cards_list")
                .show(ui, |ui| {
                    for (i, card) in self.editor.cards().iter().enumerate() {
                        ui.group(|ui| {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.strong(&card.question);
                                    ui.weak(&card.answer);
                                });
                                if ui.button("Delete").clicked() {
                                    action_remove = Some(i);
                                }
                            });
                        });
                    }
                });

            // Execute deferred actions
            if let Some(i) = action_remove {
                self.editor.remove_cards(&[i]);
            }
            if action_done {
                self.restart_session();
                self.current_screen = AppScreen::Review;
            }
        });
    }

    /// Handles card list export to a JSON file
    fn handle_export(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("cards.json")
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            self.result_message = match export_cards_to_path(self.editor.cards(), &path) {
                Ok(()) => format!("Exported {} cards.", self.editor.cards().len()),
                Err(e) => format!("Export failed: {}", e),
            };
            self.show_result_dialog = true;
        }
    }

    /// Handles card list import from a JSON file; replaces the current list
    fn handle_import(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        {
            self.result_message = match import_cards(&path) {
                Ok(cards) => {
                    let count = cards.len();
                    self.editor.replace_all(cards);
                    format!("Imported {} cards.", count)
                }
                Err(e) => format!(
                    "Import failed: {}\n\nExpected a JSON array like:\n[\n  {{ \"question\": \"...\", \"answer\": \"...\" }}\n]",
                    e
                ),
            };
            self.show_result_dialog = true;
        }
    }
}

fn paint_card(
    ui: &egui::Ui,
    rect: egui::Rect,
    fill: egui::Color32,
    card: Option<&Card>,
    revealed: bool,
) {
    let painter = ui.painter();
    painter.rect_filled(rect, egui::Rounding::same(25.0), fill);
    painter.rect_stroke(
        rect,
        egui::Rounding::same(25.0),
        egui::Stroke::new(1.0, egui::Color32::GRAY),
    );

    let Some(card) = card else {
        return;
    };

    let question_pos = if revealed {
        rect.center() - egui::vec2(0.0, 25.0)
    } else {
        rect.center()
    };
    painter.text(
        question_pos,
        egui::Align2::CENTER_CENTER,
        &card.question,
        egui::FontId::proportional(26.0),
        egui::Color32::BLACK,
    );
    if revealed {
        painter.text(
            rect.center() + egui::vec2(0.0, 25.0),
            egui::Align2::CENTER_CENTER,
            &card.answer,
            egui::FontId::proportional(20.0),
            egui::Color32::GRAY,
        );
    }
}
