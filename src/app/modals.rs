//! Settings modal

use super::App;
use crate::theme;
use crate::ui::components;
use eframe::egui;
use tracing::debug;

impl App {
    pub fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let modal_response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(320.0);

                // Title bar with close button
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new("Settings").size(16.0).strong())
                            .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close_size = 24.0;
                        let (rect, response) = ui.allocate_exact_size(
                            egui::vec2(close_size, close_size),
                            egui::Sense::click(),
                        );
                        let close_color = if response.hovered() {
                            ui.painter().rect_filled(rect, 4.0, theme::BG_SURFACE);
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            theme::STATUS_ERROR
                        } else {
                            theme::TEXT_DIM
                        };
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            egui_phosphor::regular::X,
                            egui::FontId::proportional(16.0),
                            close_color,
                        );
                        if response.clicked() {
                            self.show_settings = false;
                        }
                    });
                });
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // — Game Path —
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Game Path")
                            .size(theme::FONT_LABEL)
                            .color(theme::ACCENT),
                    )
                    .selectable(false),
                );
                components::caption(ui, "Leave empty to look next to the launcher executable");
                ui.add_space(2.0);

                let mut path_edited = false;
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    let browse_width = 28.0 + 4.0; // button + spacing
                    let frame_padding = 12.0 + 2.0; // inner_margin (6*2) + stroke (1*2)
                    let text_width = (ui.available_width() - browse_width - frame_padding).max(40.0);
                    let te = egui::Frame::new()
                        .fill(theme::BG_INPUT)
                        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
                        .corner_radius(4.0)
                        .inner_margin(egui::Margin::symmetric(6, 4))
                        .show(ui, |ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.game_path_str)
                                    .frame(false)
                                    .desired_width(text_width)
                                    .hint_text(crate::constants::GAME_BINARY)
                                    .font(egui::FontId::proportional(theme::FONT_LABEL)),
                            )
                        })
                        .inner;
                    if te.changed() {
                        path_edited = true;
                    }

                    // Browse button
                    let (rect, resp) =
                        ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::click());
                    if resp.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        ui.painter().rect_filled(rect, 4.0, theme::BG_SURFACE);
                    }
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        egui_phosphor::regular::FOLDER_OPEN,
                        egui::FontId::proportional(16.0),
                        theme::TEXT_SECONDARY,
                    );
                    if resp.clicked() || te.double_clicked() {
                        let start_dir = self
                            .game_path()
                            .parent()
                            .map(|d| d.to_path_buf())
                            .unwrap_or_else(|| std::path::PathBuf::from("."));
                        if let Some(path) = rfd::FileDialog::new()
                            .set_directory(start_dir)
                            .pick_file()
                        {
                            self.game_path_str = path.to_string_lossy().to_string();
                            path_edited = true;
                        }
                    }
                });

                ui.add_space(2.0);
                let game_path = self.game_path();
                let (icon, color, label) = components::presence_badge(&game_path);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(icon).size(theme::FONT_BODY).color(color),
                        )
                        .selectable(false),
                    );
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(label)
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                });

                if path_edited {
                    debug!(path = %self.game_path_str, "Game path changed");
                    self.save_settings();
                }

                ui.add_space(theme::SPACING_MD);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // — Logs —
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Logs")
                            .size(theme::FONT_LABEL)
                            .color(theme::ACCENT),
                    )
                    .selectable(false),
                );
                ui.add_space(2.0);
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(120.0, 26.0), egui::Sense::click());
                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                let (fill, draw_rect) = theme::button_visual(&response, theme::BTN_DEFAULT, rect);
                ui.painter().rect_filled(draw_rect, 4.0, fill);
                ui.painter().text(
                    draw_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("{}  Open Logs", egui_phosphor::regular::FOLDER_OPEN),
                    egui::FontId::proportional(12.0),
                    egui::Color32::WHITE,
                );
                if response.clicked() {
                    let logs_dir = self.data_dir.join("logs");
                    std::fs::create_dir_all(&logs_dir).ok();
                    let _ = open::that(&logs_dir);
                }
            });

        if modal_response.should_close() {
            self.show_settings = false;
        }
    }
}
